//! Route definitions.
//!
//! Handlers live in [`crate::handlers`]; each submodule here mounts
//! them on a router.

pub mod health;
pub mod readings;
pub mod stats;

use axum::Router;

use crate::state::AppState;

/// All routes mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(readings::router())
        .merge(stats::router())
}
