use anyhow::Result;

use crate::api::{HomeQClient, TelegramClient};
use crate::core::Config;
use crate::state::SeenStore;

use super::filter::{individual_listings, new_listings};
use super::format::build_message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub new_listings: usize,
    pub recipients_notified: usize,
}

/// One watch cycle: fetch, diff against the seen set, persist, notify.
///
/// The seen set is written before the first send, so a failed delivery or a
/// crash mid-notification never reports the same listing twice. The cost is
/// that listings persisted in a run whose sends failed are not retried.
pub async fn run(
    config: &Config,
    homeq: &HomeQClient,
    telegram: &TelegramClient,
    store: &SeenStore,
) -> Result<RunSummary> {
    let mut seen = store.load()?;
    tracing::info!("Loaded {} previously seen listing ids", seen.len());

    let results = homeq.fetch().await?;
    let individual = individual_listings(results);
    tracing::info!("Fetched {} individual listings", individual.len());

    let new_items = new_listings(individual, &seen);
    if new_items.is_empty() {
        tracing::info!("No new individual listings");
        return Ok(RunSummary {
            new_listings: 0,
            recipients_notified: 0,
        });
    }

    for listing in &new_items {
        if let Some(id) = listing.id {
            seen.insert(id);
        }
    }
    store.save(&seen)?;

    let message = build_message(&new_items);

    for chat_id in &config.telegram.chat_ids {
        telegram.send_message(chat_id, &message).await?;
        tracing::info!("Notified chat {}", chat_id);
    }

    Ok(RunSummary {
        new_listings: new_items.len(),
        recipients_notified: config.telegram.chat_ids.len(),
    })
}
