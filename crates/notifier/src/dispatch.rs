//! Alert dispatch with local-log fallback.
//!
//! [`AlertDispatcher`] takes the verdict produced by the evaluator and,
//! when the alert fired, pushes it out through the configured
//! [`NotificationChannel`]. Delivery failures are logged and absorbed:
//! alerting is best-effort and must never fail the ingestion that
//! triggered it.

use vigil_core::alert::AlertEvent;

use crate::config::AlertConfig;
use crate::delivery::telegram::TelegramChannel;
use crate::delivery::NotificationChannel;

/// Dispatches fired alerts to an outbound channel, or to the local log
/// when no channel credentials are configured.
pub struct AlertDispatcher {
    /// `None` means no credentials were configured: fired alerts are
    /// recorded via the local log instead (simulated delivery).
    channel: Option<Box<dyn NotificationChannel>>,
}

impl AlertDispatcher {
    /// Build a dispatcher from configuration.
    ///
    /// Selects the Telegram channel when credentials are present and
    /// the log-only fallback otherwise.
    pub fn from_config(config: &AlertConfig) -> Self {
        match &config.telegram {
            Some(telegram) => {
                tracing::info!("Alert delivery configured: Telegram");
                Self::with_channel(Box::new(TelegramChannel::new(telegram.clone())))
            }
            None => {
                tracing::info!("No alert credentials configured, using log-only delivery");
                Self::log_only()
            }
        }
    }

    /// Dispatcher that delivers through the given channel.
    pub fn with_channel(channel: Box<dyn NotificationChannel>) -> Self {
        Self {
            channel: Some(channel),
        }
    }

    /// Dispatcher that only records fired alerts in the local log.
    pub fn log_only() -> Self {
        Self { channel: None }
    }

    /// Dispatch a single alert verdict.
    ///
    /// A non-fired event is a no-op -- not even logged as a dispatch
    /// attempt. Delivery failures are logged at error level and
    /// swallowed; the caller never observes them.
    pub async fn dispatch(&self, event: &AlertEvent) {
        if !event.fired {
            return;
        }

        tracing::warn!(
            device_id = %event.device_id,
            temperature = event.temperature,
            "{}",
            event.message
        );

        match &self.channel {
            Some(channel) => match channel.send(&event.message).await {
                Ok(()) => {
                    tracing::info!(device_id = %event.device_id, "Alert delivered");
                }
                Err(e) => {
                    tracing::error!(device_id = %event.device_id, error = %e, "Alert delivery failed");
                }
            },
            None => {
                tracing::info!(device_id = %event.device_id, "Simulated alert delivery: {}", event.message);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
