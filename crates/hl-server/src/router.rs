//! Route table.

use axum::routing::get;
use axum::Router;

use crate::handlers::{get_holiday, health, list_holidays, list_workdays};
use crate::state::AppState;

/// Build the service router.
///
/// Routes:
/// - `GET /holidays/{year}`
/// - `GET /holidays/{festival}/{year}`
/// - `GET /work/{year}`
/// - `GET /health`
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/holidays/{year}", get(list_holidays))
        .route("/holidays/{festival}/{year}", get(get_holiday))
        .route("/work/{year}", get(list_workdays))
        .route("/health", get(health))
        .with_state(state)
}
