use anyhow::Result;

use homeq_watch::api::{HomeQClient, SearchFilter, TelegramClient};
use homeq_watch::core::{logging, Config};
use homeq_watch::state::SeenStore;
use homeq_watch::watch;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    logging::init_logging(&config.log_level);

    tracing::info!("🏠 HomeQ listing watch starting...");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Notifying {} chat(s)", config.telegram.chat_ids.len());

    let filter = match &config.filter_file {
        Some(path) => SearchFilter::from_file(path)?,
        None => SearchFilter::default(),
    };

    let homeq = HomeQClient::new(filter)?;
    let telegram = TelegramClient::new(config.telegram.bot_token.clone())?;
    let store = SeenStore::new(config.state_file.clone());

    let summary = watch::run(&config, &homeq, &telegram, &store).await?;

    if summary.new_listings == 0 {
        println!("No new individual listings.");
    } else {
        println!(
            "Sent {} new listings to {} chat(s).",
            summary.new_listings, summary.recipients_notified
        );
    }

    Ok(())
}
