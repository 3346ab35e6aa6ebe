use async_trait::async_trait;

/// Tunable parameters sent with a generation request.
///
/// `None` fields are omitted from the wire request entirely, letting the
/// provider apply its own defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerationOptions {
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl GenerationOptions {
    pub fn new(temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            temperature: Some(temperature),
            max_output_tokens: Some(max_output_tokens),
        }
    }

    /// True when no option is set and the config block can be omitted.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.max_output_tokens.is_none()
    }
}

/// Trait for text generation backends — the seam between the assistant
/// pipeline and the remote API, so tests can substitute scripted responses.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a single prompt and return the generated text.
    async fn generate(
        &self,
        prompt: &str,
        options: GenerationOptions,
    ) -> Result<String, LlmError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("gave up after {attempts} attempts; last response: {last_body}")]
    RetriesExhausted { attempts: u32, last_body: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("provider not configured: {0}")]
    NotConfigured(String),
}

impl LlmError {
    /// Transient delivery failures are retried with a fixed delay;
    /// everything else is terminal for the current attempt chain.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LlmError::Http(_) | LlmError::Api { .. })
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, LlmError::Api { status: 429, .. })
    }

    /// Raw response body (or error text) to surface on terminal failure.
    pub fn response_body(&self) -> String {
        match self {
            LlmError::Api { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}
