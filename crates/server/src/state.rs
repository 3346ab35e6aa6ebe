use std::sync::Arc;

use tokio::sync::RwLock;

use paperchat_assistant::{QaAdapter, Session, Summarizer};
use paperchat_core::Config;
use paperchat_llm::TextGenerator;

pub struct AppState {
    pub config: Config,
    /// One session per process. Behind a lock so a future multi-session
    /// deployment only has to swap this for a keyed map.
    pub session: RwLock<Session>,
    pub summarizer: Summarizer,
    pub qa: QaAdapter,
}

impl AppState {
    pub fn new(config: Config, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            config,
            session: RwLock::new(Session::new()),
            summarizer: Summarizer::new(generator.clone()),
            qa: QaAdapter::new(generator),
        }
    }
}
