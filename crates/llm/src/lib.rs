pub mod gemini;
pub mod provider;
pub mod retry;

pub use gemini::GeminiClient;
pub use provider::{GenerationOptions, LlmError, TextGenerator};
pub use retry::RetryPolicy;
