//! Handlers for sensor data ingestion and listing.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use vigil_db::models::reading::{CreateReading, Reading};
use vigil_db::repositories::ReadingRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Default number of readings returned by the list endpoint.
const DEFAULT_LIMIT: i64 = 20;

/// Query parameters for the reading list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Maximum number of readings to return (default: 20).
    pub limit: Option<i64>,
}

/// POST /api/data
///
/// Ingest one sensor reading through the full pipeline and return the
/// persisted row (id and timestamp included). Validation failures map
/// to 400 with nothing persisted; alert delivery failures never
/// surface here.
pub async fn ingest_reading(
    State(state): State<AppState>,
    Json(body): Json<CreateReading>,
) -> AppResult<Json<Reading>> {
    let reading = state.pipeline.ingest(body).await?;
    Ok(Json(reading))
}

/// GET /api/data?limit=N
///
/// Latest readings, most recent first.
pub async fn list_readings(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Reading>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    if limit < 0 {
        return Err(AppError::BadRequest(
            "limit must be non-negative".to_string(),
        ));
    }

    let readings = ReadingRepo::recent(&state.pool, limit).await?;
    Ok(Json(readings))
}
