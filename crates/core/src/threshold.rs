//! Temperature threshold evaluation.
//!
//! Pure logic -- no I/O. The evaluator holds the configured threshold
//! and maps each reading to an [`AlertEvent`] verdict; the caller is
//! responsible for persisting the reading and dispatching the verdict.

use crate::alert::AlertEvent;

/// Stateless threshold check applied to every ingested reading.
///
/// Fires strictly above the threshold (`>`): a reading exactly at the
/// threshold does not alert. There is no hysteresis and no cooldown --
/// every reading above the threshold produces a fresh event.
#[derive(Debug, Clone)]
pub struct ThresholdEvaluator {
    threshold_temp: f64,
}

impl ThresholdEvaluator {
    /// Create an evaluator for the given threshold in °C.
    pub fn new(threshold_temp: f64) -> Self {
        Self { threshold_temp }
    }

    /// Evaluate a single reading against the threshold.
    pub fn evaluate(&self, device_id: &str, temperature: f64) -> AlertEvent {
        let fired = temperature > self.threshold_temp;

        let message = if fired {
            format!("High temperature detected! Device: {device_id}, Value: {temperature}°C")
        } else {
            String::new()
        };

        AlertEvent {
            device_id: device_id.to_string(),
            temperature,
            message,
            fired,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 30.0;

    #[test]
    fn no_alert_below_threshold() {
        let evaluator = ThresholdEvaluator::new(THRESHOLD);
        let event = evaluator.evaluate("SENSOR_OFFICE", 22.5);
        assert!(!event.fired);
        assert!(event.message.is_empty());
    }

    #[test]
    fn no_alert_exactly_at_threshold() {
        // The comparison is strict: 30.0 at a 30.0 threshold must not fire.
        let evaluator = ThresholdEvaluator::new(THRESHOLD);
        let event = evaluator.evaluate("SENSOR_OFFICE", 30.0);
        assert!(!event.fired);
    }

    #[test]
    fn alert_just_above_threshold() {
        let evaluator = ThresholdEvaluator::new(THRESHOLD);
        let event = evaluator.evaluate("SENSOR_OFFICE", 30.1);
        assert!(event.fired);
    }

    #[test]
    fn message_embeds_device_and_value() {
        let evaluator = ThresholdEvaluator::new(THRESHOLD);
        let event = evaluator.evaluate("SENSOR_LAB", 35.5);
        assert!(event.message.contains("SENSOR_LAB"));
        assert!(event.message.contains("35.5"));
    }

    #[test]
    fn negative_temperature_is_valid_data() {
        // No range validation: absurd values are evaluated, not rejected.
        let evaluator = ThresholdEvaluator::new(THRESHOLD);
        let event = evaluator.evaluate("SENSOR_WAREHOUSE", -40.0);
        assert!(!event.fired);
        assert_eq!(event.temperature, -40.0);
    }

    #[test]
    fn nan_temperature_does_not_fire() {
        let evaluator = ThresholdEvaluator::new(THRESHOLD);
        let event = evaluator.evaluate("SENSOR_OFFICE", f64::NAN);
        assert!(!event.fired);
    }

    #[test]
    fn every_evaluation_produces_a_fresh_event() {
        // No cooldown: the same over-threshold reading fires every time.
        let evaluator = ThresholdEvaluator::new(THRESHOLD);
        assert!(evaluator.evaluate("SENSOR_OFFICE", 31.0).fired);
        assert!(evaluator.evaluate("SENSOR_OFFICE", 31.0).fired);
    }
}
