use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram: TelegramConfig,
    pub state_file: PathBuf,
    pub filter_file: Option<PathBuf>,
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_ids: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let bot_token =
            env::var("TELEGRAM_BOT_TOKEN").context("TELEGRAM_BOT_TOKEN is not set")?;
        let chat_ids = parse_chat_ids(
            &env::var("TELEGRAM_CHAT_ID").context("TELEGRAM_CHAT_ID is not set")?,
        );

        Ok(Config {
            telegram: TelegramConfig {
                bot_token,
                chat_ids,
            },
            state_file: env::var("STATE_FILE")
                .unwrap_or_else(|_| "seen.json".to_string())
                .into(),
            filter_file: env::var("FILTER_FILE").ok().map(PathBuf::from),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Set TELEGRAM_CHAT_ID="123,456" to notify both chats.
fn parse_chat_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
