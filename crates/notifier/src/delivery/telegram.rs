//! Telegram Bot API delivery channel.
//!
//! Sends alert text via the `sendMessage` method of the Bot API. One
//! attempt per alert -- the producer's next tick is the only retry in
//! the system, and the dispatcher treats any failure as non-fatal.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::TelegramConfig;
use crate::delivery::{DeliveryError, NotificationChannel};

/// Production Bot API host.
const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Delivers alert messages to a Telegram chat.
pub struct TelegramChannel {
    client: reqwest::Client,
    base_url: String,
    config: TelegramConfig,
}

impl TelegramChannel {
    /// Create a channel with a pre-configured HTTP client.
    pub fn new(config: TelegramConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            base_url: TELEGRAM_API_BASE.to_string(),
            config,
        }
    }

    /// Override the API host (tests point this at a local stub).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl NotificationChannel for TelegramChannel {
    async fn send(&self, text: &str) -> Result<(), DeliveryError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.config.token);
        let payload = serde_json::json!({
            "chat_id": self.config.chat_id,
            "text": text,
        });

        let response = self.client.post(&url).json(&payload).send().await?;
        if !response.status().is_success() {
            return Err(DeliveryError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
