//! Handler for aggregate reading statistics.

use axum::extract::State;
use axum::Json;

use vigil_db::models::reading::StatsSummary;
use vigil_db::repositories::ReadingRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/stats
///
/// Aggregate statistics over every stored reading, recomputed per
/// call. An empty store yields the zero summary rather than an error.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<StatsSummary>> {
    let stats = ReadingRepo::aggregate_stats(&state.pool).await?;
    Ok(Json(stats))
}
