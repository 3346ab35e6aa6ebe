use std::sync::Arc;

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use paperchat_core::config::ChunkingConfig;
use paperchat_core::text::truncate_chars;
use paperchat_ingest::{chunk_by_tokens, extract_pdf_text, select_passage};

use super::{llm_error_response, parse_lang};
use crate::state::AppState;

/// First characters of the extracted text echoed back to the caller.
const PREVIEW_CHARS: usize = 500;

#[derive(Deserialize)]
pub struct UploadParams {
    pub lang: Option<String>,
    pub chunk_tokens: Option<usize>,
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub extracted_chars: usize,
    pub preview: String,
    pub chunk_count: usize,
    pub summary: String,
}

/// Upload a research paper (PDF), extract its text, and summarize the
/// passage between "abstract" and "conclusion" via the chunked pipeline.
/// Replaces the session's document and summary wholesale on success.
pub async fn upload_paper(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UploadParams>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, (StatusCode, String)> {
    let lang = parse_lang(params.lang.as_deref())?;
    let chunk_tokens = ChunkingConfig::clamp_tokens(
        params.chunk_tokens.unwrap_or(state.config.chunking.max_tokens),
    );

    let field = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Multipart error: {e}")))?
        .ok_or((StatusCode::BAD_REQUEST, "No file provided".to_string()))?;

    let filename = field.file_name().unwrap_or("unnamed.pdf").to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Failed to read file: {e}")))?;

    let text = extract_pdf_text(&bytes)
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Text extraction failed: {e}")))?;

    let extracted_chars = text.chars().count();
    info!("Extracted '{}': {} chars", filename, extracted_chars);

    let passage = select_passage(&text).to_string();
    let chunk_count = chunk_by_tokens(&passage, chunk_tokens).count();

    // Summarize before touching the session: a terminal failure mid-pipeline
    // must leave the previous document and summary intact.
    let summary = state
        .summarizer
        .summarize(&passage, lang, chunk_tokens)
        .await
        .map_err(llm_error_response)?;

    let preview = truncate_chars(&text, PREVIEW_CHARS).to_string();

    let mut session = state.session.write().await;
    session.load_paper(text);
    session.set_summary(summary.clone());

    info!(
        "Summarized '{}' ({} chunks at {} tokens, lang={})",
        filename, chunk_count, chunk_tokens, lang
    );

    Ok(Json(UploadResponse {
        filename,
        extracted_chars,
        preview,
        chunk_count,
        summary,
    }))
}
