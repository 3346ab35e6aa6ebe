use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub paper_loaded: bool,
    pub summary_ready: bool,
    pub chat_entries: usize,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let session = state.session.read().await;
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        paper_loaded: session.paper_text().is_some(),
        summary_ready: session.summary().is_some(),
        chat_entries: session.history().len(),
    })
}

/// Redacted configuration view (no secrets).
pub async fn config_summary(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(state.config.redacted_summary())
}
