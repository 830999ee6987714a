//! Request handlers.
//!
//! Each handler is a thin call into [`HolidayService`](hl_data::HolidayService);
//! errors go out through [`ApiError`].

use axum::extract::{Path, State};
use axum::Json;
use hl_data::Holiday;
use hl_time::Date;
use serde::Serialize;
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /holidays/{year}`
#[instrument(skip(state))]
pub async fn list_holidays(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<Json<Vec<Holiday>>, ApiError> {
    Ok(Json(state.service().holidays(&year)?))
}

/// `GET /holidays/{festival}/{year}`
#[instrument(skip(state))]
pub async fn get_holiday(
    State(state): State<AppState>,
    Path((festival, year)): Path<(String, String)>,
) -> Result<Json<Holiday>, ApiError> {
    Ok(Json(state.service().holiday(&year, &festival)?))
}

/// `GET /work/{year}`
#[instrument(skip(state))]
pub async fn list_workdays(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<Json<Vec<Date>>, ApiError> {
    Ok(Json(state.service().workdays(&year)?))
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Years currently held in the cache.
    pub cached_years: Vec<String>,
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        cached_years: state.service().store().cached_years(),
    })
}
