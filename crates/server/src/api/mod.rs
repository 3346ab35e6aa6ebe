mod chat;
mod health;
mod paper;
mod summary;

pub use chat::{chat_clear, chat_history, chat_send};
pub use health::{config_summary, health};
pub use paper::upload_paper;
pub use summary::{download_summary, get_summary};

use axum::http::StatusCode;

use paperchat_core::Language;
use paperchat_llm::LlmError;

/// Map generation failures onto HTTP responses. Terminal failures surface
/// the last raw response body to the caller; the session itself survives
/// and later actions may be attempted.
pub(crate) fn llm_error_response(err: LlmError) -> (StatusCode, String) {
    match err {
        LlmError::NotConfigured(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        other => (StatusCode::BAD_GATEWAY, other.to_string()),
    }
}

pub(crate) fn parse_lang(raw: Option<&str>) -> Result<Language, (StatusCode, String)> {
    match raw {
        None => Ok(Language::default()),
        Some(s) => s
            .parse()
            .map_err(|e: String| (StatusCode::BAD_REQUEST, e)),
    }
}
