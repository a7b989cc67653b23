//! Route definitions for the Oyster Status API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create oyster region routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/list", get(handlers::list_locations))
        .nest("/harvest_areas", harvest_area_routes())
        // Routes scoped to a single production program
        .route("/:program_id/status", get(handlers::list_program_harvest_areas))
        .route(
            "/:program_id/weather/precipitation",
            get(handlers::get_precipitation),
        )
        .route("/:program_id/outlook", get(handlers::get_outlook))
}

/// Harvest area routes
fn harvest_area_routes() -> Router<AppState> {
    Router::new()
        .route("/list", get(handlers::list_harvest_areas))
        .route("/:harvest_id", get(handlers::get_harvest_area))
}
