//! Route definitions for the statistics endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Stats routes mounted at `/api`.
///
/// ```text
/// GET /stats  -> get_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/stats", get(stats::get_stats))
}
