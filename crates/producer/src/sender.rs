//! HTTP push loop for generated readings.
//!
//! Posts one synthetic reading per tick to the ingestion endpoint.
//! Failures are logged and the loop tries again on the next tick --
//! resending is the producer's only retry mechanism.

use std::time::Duration;

use crate::generate;

/// Run the send loop indefinitely.
///
/// This function never returns under normal operation.
pub async fn run(client: &reqwest::Client, target_url: &str, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);

    loop {
        ticker.tick().await;

        let payload = generate::generate_reading();

        match client.post(target_url).json(&payload).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::info!(
                    device_id = %payload.device_id,
                    temperature = payload.temperature,
                    humidity = payload.humidity,
                    "Reading accepted"
                );
            }
            Ok(response) => {
                tracing::error!(status = %response.status(), "Ingestion endpoint rejected reading");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to reach ingestion endpoint");
            }
        }
    }
}
