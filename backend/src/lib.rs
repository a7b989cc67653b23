//! NSW Oyster Status API
//!
//! Read-only REST API serving oyster harvest area status, production region
//! metadata and precipitation observations from PostgreSQL.

use std::sync::Arc;

use axum::{http::Method, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod deadline;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::{ApiConfig, Config};
pub use error::{AppError, AppResult};
pub use services::OysterStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn OysterStore>,
    pub api: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn OysterStore>, api: ApiConfig) -> Self {
        Self {
            store,
            api: Arc::new(api),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", handlers::ApiDoc::openapi()))
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/oyster_regions", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "NSW Oyster Status API v0.1"
}
