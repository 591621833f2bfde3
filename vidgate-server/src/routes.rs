//! API routes

use crate::state::AppState;
use crate::{docs, handlers};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/whoami", get(handlers::whoami))
        .route("/docs", get(docs::swagger_ui))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
