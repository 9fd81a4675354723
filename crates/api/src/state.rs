use std::sync::Arc;

use vigil_pipeline::IngestPipeline;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable: inner data is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (query path).
    pub pool: vigil_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Ingestion pipeline (write path).
    pub pipeline: Arc<IngestPipeline>,
}
