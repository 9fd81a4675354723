//! Route definitions for sensor data endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::readings;
use crate::state::AppState;

/// Data routes mounted at `/api`.
///
/// ```text
/// POST /data  -> ingest_reading
/// GET  /data  -> list_readings
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/data",
        post(readings::ingest_reading).get(readings::list_readings),
    )
}
