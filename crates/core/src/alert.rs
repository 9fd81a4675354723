//! Alert verdict type produced by threshold evaluation.

use serde::Serialize;

/// The verdict for a single evaluated reading.
///
/// Ephemeral by design: constructed per ingested reading, handed to the
/// dispatcher, and dropped after dispatch. No alert history is kept.
#[derive(Debug, Clone, Serialize)]
pub struct AlertEvent {
    /// Device that produced the reading.
    pub device_id: String,
    /// The measured temperature that was evaluated.
    pub temperature: f64,
    /// Human-readable alert text; empty when `fired` is false.
    pub message: String,
    /// Whether the reading breached the threshold.
    pub fired: bool,
}
