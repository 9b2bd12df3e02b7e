use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// Telegram rejects messages over 4096 characters; 3900 leaves headroom.
pub const MAX_MESSAGE_CHARS: usize = 3900;

const API_BASE_URL: &str = "https://api.telegram.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

pub struct TelegramClient {
    client: Client,
    base_url: String,
    bot_token: String,
}

impl TelegramClient {
    pub fn new(bot_token: String) -> Result<Self> {
        Self::new_with_endpoint(API_BASE_URL.to_string(), bot_token)
    }

    pub fn new_with_endpoint(base_url: String, bot_token: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url,
            bot_token,
        })
    }

    /// Delivers `text` to one chat, split into chunks of at most
    /// [`MAX_MESSAGE_CHARS`] characters, in order. The first failed chunk
    /// aborts the send.
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        for chunk in split_message(text, MAX_MESSAGE_CHARS) {
            self.send_chunk(chat_id, chunk).await?;
        }
        Ok(())
    }

    async fn send_chunk(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.bot_token);
        let body = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
            "disable_web_page_preview": true,
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("Telegram sendMessage request failed")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            tracing::error!("Telegram API error: {} - {}", status, error_text);
            return Err(anyhow::anyhow!(
                "sendMessage to chat {} failed: {} - {}",
                chat_id,
                status,
                error_text
            ));
        }

        Ok(())
    }
}

/// Consecutive chunks of at most `max_chars` characters. Counts characters,
/// not bytes, so a boundary never lands inside a UTF-8 code point.
pub fn split_message(text: &str, max_chars: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let end = rest
            .char_indices()
            .nth(max_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(end);
        chunks.push(head);
        rest = tail;
    }
    chunks
}
