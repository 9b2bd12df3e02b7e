use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
struct StateFile {
    #[serde(default)]
    seen_ids: Vec<i64>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

/// Listing ids already reported, persisted as one flat JSON file. The set
/// only ever grows; ids are never evicted.
pub struct SeenStore {
    path: PathBuf,
}

impl SeenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A missing file means a first run. Any other read or parse failure
    /// is fatal rather than silently starting over.
    pub fn load(&self) -> Result<HashSet<i64>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashSet::new()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("failed to read state file {}", self.path.display())
                })
            }
        };

        let state: StateFile = serde_json::from_str(&raw)
            .with_context(|| format!("corrupt state file {}", self.path.display()))?;

        Ok(state.seen_ids.into_iter().collect())
    }

    /// Overwrites the file with the ids sorted ascending and the write time.
    pub fn save(&self, seen: &HashSet<i64>) -> Result<()> {
        let mut seen_ids: Vec<i64> = seen.iter().copied().collect();
        seen_ids.sort_unstable();

        let state = StateFile {
            seen_ids,
            updated_at: Some(Utc::now()),
        };
        let raw = serde_json::to_string_pretty(&state)?;

        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write state file {}", self.path.display()))
    }
}
