use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::types::{Listing, SearchResponse};

pub const SEARCH_URL: &str = "https://api.homeq.se/api/v3/search";
pub const LISTING_BASE_URL: &str = "https://homeq.se";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Search payload posted to the HomeQ search endpoint. `min_area`,
/// `max_rent` and `min_room` are strings on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchFilter {
    pub random: bool,
    pub first_come_first: bool,
    pub queue_points: bool,
    pub min_area: String,
    pub max_rent: String,
    pub min_room: String,
    pub sorting: String,
    pub geo_bounds: GeoBounds,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Default for SearchFilter {
    /// Stockholm inner-city box, newest published first.
    fn default() -> Self {
        Self {
            random: false,
            first_come_first: true,
            queue_points: true,
            min_area: "48".to_string(),
            max_rent: "13000".to_string(),
            min_room: "2".to_string(),
            sorting: "publish_date.desc".to_string(),
            geo_bounds: GeoBounds {
                min_lat: 59.2526,
                max_lat: 59.3608,
                min_lng: 17.9708,
                max_lng: 18.1828,
            },
        }
    }
}

impl SearchFilter {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read filter payload {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse filter payload {}", path.display()))
    }
}

pub struct HomeQClient {
    client: Client,
    search_url: String,
    filter: SearchFilter,
}

impl HomeQClient {
    pub fn new(filter: SearchFilter) -> Result<Self> {
        Self::new_with_endpoint(SEARCH_URL.to_string(), filter)
    }

    pub fn new_with_endpoint(search_url: String, filter: SearchFilter) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            search_url,
            filter,
        })
    }

    /// One search request; a missing `results` field counts as no results.
    pub async fn fetch(&self) -> Result<Vec<Listing>> {
        let response = self
            .client
            .post(&self.search_url)
            .header("Content-Type", "application/json")
            .json(&self.filter)
            .send()
            .await
            .context("HomeQ search request failed")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            tracing::error!("HomeQ API error: {} - {}", status, error_text);
            return Err(anyhow::anyhow!(
                "search request failed: {} - {}",
                status,
                error_text
            ));
        }

        let search: SearchResponse = response
            .json()
            .await
            .context("failed to parse HomeQ search response")?;

        Ok(search.results)
    }
}
