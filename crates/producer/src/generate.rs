//! Synthetic sensor reading generation.

use rand::seq::IndexedRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::Serialize;

/// Devices the simulator reports as.
const DEVICES: [&str; 3] = ["SENSOR_OFFICE", "SENSOR_WAREHOUSE", "SENSOR_LAB"];

/// Mean simulated temperature in °C.
const TEMP_MEAN: f64 = 24.0;

/// Standard deviation of the simulated temperature.
const TEMP_STD_DEV: f64 = 4.0;

/// Outgoing reading payload posted to the ingestion endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ReadingPayload {
    pub device_id: String,
    pub temperature: f64,
    pub humidity: f64,
}

/// Generate one random reading.
///
/// Temperature is drawn from a normal distribution centred on a mild
/// indoor climate, so occasional samples land above the default alert
/// threshold; humidity is uniform in 30..70. Both are rounded to one
/// decimal, matching typical sensor resolution.
pub fn generate_reading() -> ReadingPayload {
    let mut rng = rand::rng();

    let device = DEVICES.choose(&mut rng).expect("DEVICES is non-empty");
    let temp_dist = Normal::new(TEMP_MEAN, TEMP_STD_DEV).expect("valid distribution parameters");

    ReadingPayload {
        device_id: (*device).to_string(),
        temperature: round1(temp_dist.sample(&mut rng)),
        humidity: round1(rng.random_range(30.0..70.0)),
    }
}

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
