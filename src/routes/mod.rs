//! Route modules for the Highlight Report server

pub mod health;
pub mod index;
pub mod reports;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router
pub fn router(state: AppState) -> Router {
    let body_limit = state.config().storage.max_upload_bytes;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index::index))
        .route(
            "/upload",
            post(upload::upload_report).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/reports/:id", get(reports::download_report))
        .route("/health", get(health::health_check))
        .route("/api/v1/health", get(health::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
