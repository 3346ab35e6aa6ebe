//! Question answering against the current summary.

use std::sync::Arc;

use tracing::debug;

use paperchat_core::text::truncate_chars;
use paperchat_core::Language;
use paperchat_llm::{GenerationOptions, LlmError, TextGenerator};

use crate::prompts;

/// How much of the summary is embedded as context. A fixed character
/// window, not token-aware.
pub const SUMMARY_CONTEXT_CHARS: usize = 2000;

/// Output budget for answers and general chat.
const ANSWER_MAX_TOKENS: u32 = 300;
/// Output budget for the one-shot fallback summary.
const QUICK_SUMMARY_MAX_TOKENS: u32 = 500;

const TEMPERATURE: f32 = 0.2;

pub struct QaAdapter {
    generator: Arc<dyn TextGenerator>,
}

impl QaAdapter {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Answer `question` from the summary, truncated to its first
    /// [`SUMMARY_CONTEXT_CHARS`] characters. The generated text is returned
    /// verbatim, with no post-processing or validation.
    pub async fn answer(
        &self,
        summary: &str,
        question: &str,
        lang: Language,
    ) -> Result<String, LlmError> {
        let context = truncate_chars(summary, SUMMARY_CONTEXT_CHARS);
        let prompt = prompts::question_with_context(lang, context, question);
        debug!("answering question ({} chars of context)", context.len());
        self.generator
            .generate(&prompt, GenerationOptions::new(TEMPERATURE, ANSWER_MAX_TOKENS))
            .await
    }

    /// One-shot summary of a raw passage, used when a question arrives
    /// before the chunked pipeline has produced a summary.
    pub async fn quick_summarize(
        &self,
        text: &str,
        lang: Language,
    ) -> Result<String, LlmError> {
        let prompt = prompts::quick_summary(lang, text);
        self.generator
            .generate(
                &prompt,
                GenerationOptions::new(TEMPERATURE, QUICK_SUMMARY_MAX_TOKENS),
            )
            .await
    }

    /// Chat without a loaded paper.
    pub async fn general_chat(
        &self,
        message: &str,
        lang: Language,
    ) -> Result<String, LlmError> {
        let prompt = prompts::general_chat(lang, message);
        self.generator
            .generate(&prompt, GenerationOptions::new(TEMPERATURE, ANSWER_MAX_TOKENS))
            .await
    }
}
