//! `vigil-producer` -- synthetic sensor data generator.
//!
//! Posts a random reading to the backend ingestion endpoint on a fixed
//! interval.
//!
//! # Environment variables
//!
//! | Variable             | Required | Default                          |
//! |----------------------|----------|----------------------------------|
//! | `TARGET_URL`         | no       | `http://localhost:8000/api/data` |
//! | `SEND_INTERVAL_SECS` | no       | `2`                              |

use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vigil_producer::sender;

/// Default ingestion endpoint.
const DEFAULT_TARGET_URL: &str = "http://localhost:8000/api/data";

/// Default interval between generated readings.
const DEFAULT_INTERVAL_SECS: u64 = 2;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vigil_producer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let target_url =
        std::env::var("TARGET_URL").unwrap_or_else(|_| DEFAULT_TARGET_URL.into());

    let interval_secs: u64 = std::env::var("SEND_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_INTERVAL_SECS);

    tracing::info!(
        target_url = %target_url,
        interval_secs,
        "Starting vigil-producer",
    );

    let client = reqwest::Client::new();

    sender::run(&client, &target_url, Duration::from_secs(interval_secs)).await;
}
