//! HTTP router construction.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api;
use crate::state::AppState;

/// Build the application router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/config", get(api::config_summary))
        .route(
            "/paper",
            post(api::upload_paper).layer(DefaultBodyLimit::max(50 * 1024 * 1024)),
        )
        .route("/summary", get(api::get_summary))
        .route("/summary/download", get(api::download_summary))
        .route("/chat", get(api::chat_history).post(api::chat_send))
        .route("/chat/clear", post(api::chat_clear))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
