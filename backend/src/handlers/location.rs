//! HTTP handlers for oyster production locations

use axum::{extract::State, Json};
use shared::{ListResponse, Location};

use crate::deadline::TimeoutParams;
use crate::error::AppResult;
use crate::services::LocationService;
use crate::AppState;

/// List all oyster production locations
#[utoipa::path(
    get,
    path = "/oyster_regions/list",
    params(TimeoutParams),
    responses(
        (status = 200, description = "Unique NSW oyster harvesting locations", body = ListResponse<Location>),
        (status = 500, description = "Database error"),
        (status = 504, description = "Request timeout elapsed")
    ),
    tag = "Oyster Production Regions"
)]
pub async fn list_locations(
    State(state): State<AppState>,
    params: TimeoutParams,
) -> AppResult<Json<ListResponse<Location>>> {
    tracing::info!("[GET] Unique locations list");

    let service = LocationService::new(state.store, params.deadline());
    let locations = service.list_locations().await?;
    Ok(Json(locations))
}
