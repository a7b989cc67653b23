//! HTTP handler for the flood risk outlook

use axum::{
    extract::{Path, State},
    Json,
};
use shared::Outlook;

use crate::deadline::TimeoutParams;
use crate::error::AppResult;
use crate::services::OutlookService;
use crate::AppState;

/// Get the flood risk outlook for a program
#[utoipa::path(
    get,
    path = "/oyster_regions/{program_id}/outlook",
    params(
        ("program_id" = i32, Path, description = "Unique program ID"),
        TimeoutParams
    ),
    responses(
        (status = 200, description = "Latest flood index for the program", body = Outlook),
        (status = 400, description = "Malformed program ID"),
        (status = 404, description = "Program or flood index not found"),
        (status = 500, description = "Database error"),
        (status = 504, description = "Request timeout elapsed")
    ),
    tag = "Weather"
)]
pub async fn get_outlook(
    State(state): State<AppState>,
    Path(program_id): Path<i32>,
    params: TimeoutParams,
) -> AppResult<Json<Outlook>> {
    tracing::info!(program_id, "[GET] Outlook");

    let service = OutlookService::new(state.store, params.deadline());
    let outlook = service.get_outlook(program_id).await?;
    Ok(Json(outlook))
}
