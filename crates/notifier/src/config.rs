//! Alerting configuration loaded from environment variables.

/// Default alert threshold in °C when `ALERT_THRESHOLD` is not set.
const DEFAULT_THRESHOLD_TEMP: f64 = 30.0;

/// Telegram bot credentials for live alert delivery.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token.
    pub token: String,
    /// Target chat id.
    pub chat_id: String,
}

impl TelegramConfig {
    /// Load credentials from the environment.
    ///
    /// Returns `None` unless BOTH `TELEGRAM_BOT_TOKEN` and
    /// `TELEGRAM_CHAT_ID` are set -- with only one of the two, live
    /// delivery cannot work and the dispatcher falls back to log-only
    /// delivery.
    pub fn from_env() -> Option<Self> {
        let token = std::env::var("TELEGRAM_BOT_TOKEN").ok()?;
        let chat_id = std::env::var("TELEGRAM_CHAT_ID").ok()?;
        Some(Self { token, chat_id })
    }
}

/// Process-wide alerting configuration.
///
/// Loaded once at startup and passed into the evaluator / dispatcher
/// constructors; never mutated afterwards. Changing it requires a
/// process restart.
#[derive(Debug, Clone)]
pub struct AlertConfig {
    /// Temperature threshold in °C; readings strictly above it alert.
    pub threshold_temp: f64,
    /// Telegram credentials; `None` selects the log-only channel.
    pub telegram: Option<TelegramConfig>,
}

impl AlertConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Variable             | Required | Default |
    /// |----------------------|----------|---------|
    /// | `ALERT_THRESHOLD`    | no       | `30.0`  |
    /// | `TELEGRAM_BOT_TOKEN` | no       | --       |
    /// | `TELEGRAM_CHAT_ID`   | no       | --       |
    pub fn from_env() -> Self {
        let threshold_temp = std::env::var("ALERT_THRESHOLD")
            .ok()
            .map(|v| v.parse().expect("ALERT_THRESHOLD must be a valid float"))
            .unwrap_or(DEFAULT_THRESHOLD_TEMP);

        Self {
            threshold_temp,
            telegram: TelegramConfig::from_env(),
        }
    }
}
