//! HTTP handlers for harvest area status endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use shared::{HarvestArea, ListResponse};

use crate::deadline::TimeoutParams;
use crate::error::AppResult;
use crate::services::HarvestAreaService;
use crate::AppState;

/// List the current status of every harvest area
#[utoipa::path(
    get,
    path = "/oyster_regions/harvest_areas/list",
    params(TimeoutParams),
    responses(
        (status = 200, description = "Latest status of each harvest area", body = ListResponse<HarvestArea>),
        (status = 500, description = "Database error"),
        (status = 504, description = "Request timeout elapsed")
    ),
    tag = "Oyster Harvest Areas"
)]
pub async fn list_harvest_areas(
    State(state): State<AppState>,
    params: TimeoutParams,
) -> AppResult<Json<ListResponse<HarvestArea>>> {
    tracing::info!("[GET] Unique harvest areas list");

    let service = HarvestAreaService::new(state.store, params.deadline());
    let areas = service.list_harvest_areas().await?;
    Ok(Json(areas))
}

/// Get the status of a single harvest area
#[utoipa::path(
    get,
    path = "/oyster_regions/harvest_areas/{harvest_id}",
    params(
        ("harvest_id" = i32, Path, description = "Unique harvest area ID"),
        TimeoutParams
    ),
    responses(
        (status = 200, description = "Current harvest area status", body = HarvestArea),
        (status = 400, description = "Malformed harvest area ID"),
        (status = 404, description = "Harvest area not found"),
        (status = 500, description = "Database error"),
        (status = 504, description = "Request timeout elapsed")
    ),
    tag = "Oyster Harvest Areas"
)]
pub async fn get_harvest_area(
    State(state): State<AppState>,
    Path(harvest_id): Path<i32>,
    params: TimeoutParams,
) -> AppResult<Json<HarvestArea>> {
    tracing::info!(harvest_id, "[GET] Harvest area");

    let service = HarvestAreaService::new(state.store, params.deadline());
    let area = service.get_harvest_area(harvest_id).await?;
    Ok(Json(area))
}

/// List the current status of every harvest area in a program
#[utoipa::path(
    get,
    path = "/oyster_regions/{program_id}/status",
    params(
        ("program_id" = i32, Path, description = "Unique program ID"),
        TimeoutParams
    ),
    responses(
        (status = 200, description = "Latest status of each harvest area in the program", body = ListResponse<HarvestArea>),
        (status = 400, description = "Malformed program ID"),
        (status = 404, description = "Program not found"),
        (status = 500, description = "Database error"),
        (status = 504, description = "Request timeout elapsed")
    ),
    tag = "Oyster Harvest Areas"
)]
pub async fn list_program_harvest_areas(
    State(state): State<AppState>,
    Path(program_id): Path<i32>,
    params: TimeoutParams,
) -> AppResult<Json<ListResponse<HarvestArea>>> {
    tracing::info!(program_id, "[GET] Program harvest area status");

    let service = HarvestAreaService::new(state.store, params.deadline());
    let areas = service.list_by_program(program_id).await?;
    Ok(Json(areas))
}
