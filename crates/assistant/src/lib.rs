pub mod prompts;
pub mod qa;
pub mod session;
pub mod summarize;

#[cfg(test)]
pub(crate) mod test_support;

pub use qa::QaAdapter;
pub use session::{ChatEntry, Role, Session};
pub use summarize::Summarizer;
