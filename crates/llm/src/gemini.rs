//! Gemini `generateContent` client with fixed-delay retry.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use paperchat_core::config::LlmConfig;

use crate::provider::{GenerationOptions, LlmError, TextGenerator};
use crate::retry::RetryPolicy;

pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    retry: RetryPolicy,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, retry: RetryPolicy) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            retry,
        }
    }

    /// Build from config. Fails closed when no credential is supplied.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let api_key = config
            .resolve_api_key()
            .map_err(|e| LlmError::NotConfigured(e.to_string()))?;
        let retry = RetryPolicy::new(
            config.max_retries,
            std::time::Duration::from_secs(config.retry_delay_secs),
        );
        Ok(Self::new(api_key, config.model.clone(), retry))
    }

    /// Build the request body for the Gemini generateContent API.
    /// The generationConfig block is omitted entirely when no option is set.
    fn build_request_body(prompt: &str, options: GenerationOptions) -> serde_json::Value {
        let mut body = json!({
            "contents": [
                { "parts": [{ "text": prompt }] }
            ],
        });

        if !options.is_empty() {
            let mut config = serde_json::Map::new();
            if let Some(temperature) = options.temperature {
                config.insert("temperature".into(), json!(temperature));
            }
            if let Some(max_tokens) = options.max_output_tokens {
                config.insert("maxOutputTokens".into(), json!(max_tokens));
            }
            body["generationConfig"] = serde_json::Value::Object(config);
        }

        body
    }

    /// Pull the generated text out of a success response. A missing
    /// candidate (e.g. safety-filtered output) is a terminal error.
    fn parse_response(resp: &serde_json::Value) -> Result<String, LlmError> {
        resp["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                LlmError::MalformedResponse(
                    "missing candidates[0].content.parts[0].text".into(),
                )
            })
    }

    /// One delivery attempt: POST, check status, parse.
    async fn attempt(&self, body: &serde_json::Value) -> Result<String, LlmError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key,
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, body });
        }

        let resp: serde_json::Value = response.json().await?;
        Self::parse_response(&resp)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        options: GenerationOptions,
    ) -> Result<String, LlmError> {
        let body = Self::build_request_body(prompt, options);
        debug!("Gemini request to model={}", self.model);
        self.retry.run(|| self.attempt(&body)).await
    }
}
