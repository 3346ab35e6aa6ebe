//! Scripted generator for pipeline tests: records every call, replays a
//! fixed sequence of responses.

use std::sync::Mutex;

use async_trait::async_trait;

use paperchat_llm::{GenerationOptions, LlmError, TextGenerator};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub options: GenerationOptions,
}

pub struct ScriptedGenerator {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<Vec<Result<String, LlmError>>>,
}

impl ScriptedGenerator {
    pub fn new(mut responses: Vec<Result<String, LlmError>>) -> Self {
        // Pop from the back, so store reversed.
        responses.reverse();
        Self {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(responses),
        }
    }

    pub fn replying(texts: Vec<&str>) -> Self {
        Self::new(texts.into_iter().map(|t| Ok(t.to_string())).collect())
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        prompt: &str,
        options: GenerationOptions,
    ) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            options,
        });
        self.responses
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| panic!("scripted generator ran out of responses"))
    }
}
