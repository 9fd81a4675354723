//! Outbound delivery channels for fired alerts.

pub mod telegram;

use async_trait::async_trait;

/// Error type for alert delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote endpoint returned a non-2xx status code.
    #[error("Delivery endpoint returned HTTP {0}")]
    HttpStatus(u16),
}

/// A transport capable of delivering one alert message.
///
/// The dispatcher owns a boxed channel chosen at startup, which keeps
/// the outbound transport swappable in tests.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Deliver a single text message.
    async fn send(&self, text: &str) -> Result<(), DeliveryError>;
}
