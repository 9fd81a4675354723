//! Alert notification infrastructure.
//!
//! Building blocks for pushing threshold alerts out of the service:
//!
//! - [`AlertConfig`] -- immutable alerting configuration loaded once at
//!   startup.
//! - [`NotificationChannel`] -- the outbound transport seam.
//! - [`TelegramChannel`] -- Bot API delivery.
//! - [`AlertDispatcher`] -- best-effort dispatch with a local-log
//!   fallback; delivery failures never reach the caller.

pub mod config;
pub mod delivery;
pub mod dispatch;

pub use config::{AlertConfig, TelegramConfig};
pub use delivery::telegram::TelegramChannel;
pub use delivery::{DeliveryError, NotificationChannel};
pub use dispatch::AlertDispatcher;
