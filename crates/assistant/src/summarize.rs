//! Chunked summarization pipeline.

use std::sync::Arc;

use tracing::{debug, info};

use paperchat_core::Language;
use paperchat_ingest::chunk_by_tokens;
use paperchat_llm::{GenerationOptions, LlmError, TextGenerator};

use crate::prompts;

/// Splits a text into token-budgeted chunks and summarizes each one with an
/// independent generation call — chunk N's prompt never sees chunk N-1's
/// output. This bounds every request's size at the cost of global coherence
/// across chunk boundaries.
pub struct Summarizer {
    generator: Arc<dyn TextGenerator>,
}

impl Summarizer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Summarize `text` in `lang`, issuing one request per chunk and joining
    /// the fragments with a blank line, in chunk order.
    ///
    /// Any failed chunk aborts the whole pipeline; fragments already
    /// produced for this call are discarded, never returned partially.
    pub async fn summarize(
        &self,
        text: &str,
        lang: Language,
        max_tokens_per_chunk: usize,
    ) -> Result<String, LlmError> {
        let mut fragments: Vec<String> = Vec::new();

        for (i, chunk) in chunk_by_tokens(text, max_tokens_per_chunk).enumerate() {
            debug!("summarizing chunk {} ({} chars)", i, chunk.len());
            let prompt = prompts::chunk_summary(lang, chunk);
            let fragment = self
                .generator
                .generate(&prompt, GenerationOptions::default())
                .await?;
            fragments.push(fragment);
        }

        info!("summarized {} chunks", fragments.len());
        Ok(fragments.join("\n\n"))
    }
}
