//! HTTP handlers for weather endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use shared::Precipitation;

use crate::deadline::TimeoutParams;
use crate::error::AppResult;
use crate::services::WeatherService;
use crate::AppState;

/// Get recent observed and forecast precipitation for a program
#[utoipa::path(
    get,
    path = "/oyster_regions/{program_id}/weather/precipitation",
    params(
        ("program_id" = i32, Path, description = "Unique program ID"),
        TimeoutParams
    ),
    responses(
        (status = 200, description = "Recent precipitation, newest first", body = Precipitation),
        (status = 400, description = "Malformed program ID"),
        (status = 404, description = "No weather for program"),
        (status = 500, description = "Database error"),
        (status = 504, description = "Request timeout elapsed")
    ),
    tag = "Weather"
)]
pub async fn get_precipitation(
    State(state): State<AppState>,
    Path(program_id): Path<i32>,
    params: TimeoutParams,
) -> AppResult<Json<Precipitation>> {
    tracing::info!(program_id, "[GET] Precipitation");

    let service = WeatherService::new(
        state.store,
        params.deadline(),
        state.api.precipitation_page_size,
    );
    let precipitation = service.get_precipitation(program_id).await?;
    Ok(Json(precipitation))
}
