//! Ingestion pipeline: validate, persist, evaluate, dispatch.
//!
//! [`IngestPipeline`] is the one component with cross-cutting
//! sequencing. Each incoming reading moves through four strictly
//! sequential steps:
//!
//! 1. shape validation -- nothing is persisted on failure
//! 2. store append -- id and timestamp assigned; failure aborts the
//!    request before evaluation runs
//! 3. threshold evaluation of the input temperature
//! 4. alert dispatch -- unconditional; a no-op when the alert did not
//!    fire, and delivery failures are absorbed by the dispatcher
//!
//! No step is retried here; the external producer resends on its next
//! tick.

use std::sync::Arc;

use validator::Validate;

use vigil_core::threshold::ThresholdEvaluator;
use vigil_db::models::reading::{CreateReading, Reading};
use vigil_db::repositories::ReadingRepo;
use vigil_db::DbPool;
use vigil_notifier::dispatch::AlertDispatcher;

/// Error type for failed ingestions.
///
/// Validation and storage failures are fatal to the request and surface
/// to the caller. Delivery failures never appear here: the dispatcher
/// absorbs them, so alerting cannot fail an ingestion.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The input failed shape validation; nothing was persisted.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The store rejected the append; evaluation never ran.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Orchestrates store append, threshold evaluation, and alert dispatch
/// for each incoming reading.
///
/// All collaborators are injected once at startup; the pipeline itself
/// is stateless between calls.
pub struct IngestPipeline {
    pool: DbPool,
    evaluator: ThresholdEvaluator,
    dispatcher: Arc<AlertDispatcher>,
}

impl IngestPipeline {
    pub fn new(
        pool: DbPool,
        evaluator: ThresholdEvaluator,
        dispatcher: Arc<AlertDispatcher>,
    ) -> Self {
        Self {
            pool,
            evaluator,
            dispatcher,
        }
    }

    /// Ingest one reading end-to-end and return the persisted row.
    pub async fn ingest(&self, reading: CreateReading) -> Result<Reading, PipelineError> {
        validate(&reading)?;

        let persisted = ReadingRepo::insert(&self.pool, &reading).await?;
        tracing::debug!(id = persisted.id, device_id = %persisted.device_id, "Reading persisted");

        // The input temperature is evaluated; it is identical to the
        // stored value.
        let event = self
            .evaluator
            .evaluate(&reading.device_id, reading.temperature);
        self.dispatcher.dispatch(&event).await;

        Ok(persisted)
    }
}

/// Shape validation: device id present, numeric fields finite.
///
/// Range checks are deliberately absent -- negative or absurd values are
/// valid data.
fn validate(reading: &CreateReading) -> Result<(), PipelineError> {
    reading
        .validate()
        .map_err(|e| PipelineError::Validation(e.to_string()))?;

    if !reading.temperature.is_finite() {
        return Err(PipelineError::Validation(
            "temperature must be a finite number".to_string(),
        ));
    }
    if !reading.humidity.is_finite() {
        return Err(PipelineError::Validation(
            "humidity must be a finite number".to_string(),
        ));
    }
    Ok(())
}
