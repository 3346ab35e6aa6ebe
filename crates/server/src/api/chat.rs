use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use paperchat_assistant::{ChatEntry, Role};
use paperchat_ingest::select_passage;

use super::{llm_error_response, parse_lang};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub lang: Option<String>,
}

#[derive(Serialize)]
pub struct ChatHistoryResponse {
    pub history: Vec<ChatEntry>,
}

/// Send a chat message. With a summarized paper loaded the answer comes
/// from the summary; with a paper but no summary yet, a quick one-shot
/// summary is built first and kept; with no paper it falls back to
/// general chat.
pub async fn chat_send(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatEntry>, (StatusCode, String)> {
    let lang = parse_lang(req.lang.as_deref())?;
    let message = req.message.trim().to_string();
    if message.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Message must not be empty".to_string()));
    }

    // The user entry is appended first; history order is send order.
    state.session.write().await.push_user(message.clone());

    let (summary, paper) = {
        let session = state.session.read().await;
        (
            session.summary().map(str::to_string),
            session.paper_text().map(str::to_string),
        )
    };

    let answer = if let Some(summary) = summary {
        state
            .qa
            .answer(&summary, &message, lang)
            .await
            .map_err(llm_error_response)?
    } else if let Some(paper) = paper {
        // Paper uploaded but never summarized: build a quick summary once
        // and keep it for subsequent questions.
        info!("no summary yet, building quick summary before answering");
        let quick = state
            .qa
            .quick_summarize(select_passage(&paper), lang)
            .await
            .map_err(llm_error_response)?;
        state.session.write().await.set_summary(quick.clone());
        state
            .qa
            .answer(&quick, &message, lang)
            .await
            .map_err(llm_error_response)?
    } else {
        state
            .qa
            .general_chat(&message, lang)
            .await
            .map_err(llm_error_response)?
    };

    state.session.write().await.push_assistant(answer.clone());

    Ok(Json(ChatEntry {
        role: Role::Assistant,
        message: answer,
    }))
}

/// Ordered chat history for the current session.
pub async fn chat_history(
    State(state): State<Arc<AppState>>,
) -> Json<ChatHistoryResponse> {
    let session = state.session.read().await;
    Json(ChatHistoryResponse {
        history: session.history().to_vec(),
    })
}

/// Clear the chat history. The loaded paper and summary are untouched.
pub async fn chat_clear(State(state): State<Arc<AppState>>) -> StatusCode {
    state.session.write().await.clear_chat();
    StatusCode::NO_CONTENT
}
