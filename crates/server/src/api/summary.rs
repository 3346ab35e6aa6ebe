use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

pub async fn get_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SummaryResponse>, (StatusCode, String)> {
    let session = state.session.read().await;
    let summary = session
        .summary()
        .ok_or((StatusCode::NOT_FOUND, "No summary available".to_string()))?;
    Ok(Json(SummaryResponse {
        summary: summary.to_string(),
    }))
}

/// The current summary as a plain-text file download.
pub async fn download_summary(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let session = state.session.read().await;
    let summary = session
        .summary()
        .ok_or((StatusCode::NOT_FOUND, "No summary available".to_string()))?
        .to_string();

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"summary.txt\"",
            ),
        ],
        summary,
    ))
}
