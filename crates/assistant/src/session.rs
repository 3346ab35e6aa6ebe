//! Session state: the current paper, its summary, and the chat history.
//!
//! One session per running process. State is an explicit object owned by
//! the caller (the server keeps it behind a lock), never ambient globals,
//! so multi-session deployment stays feasible.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatEntry {
    pub role: Role,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct Session {
    paper_text: Option<String>,
    summary: Option<String>,
    chat_history: Vec<ChatEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the loaded paper wholesale. Any previous summary is dropped
    /// with it — a summary must never outlive the text it was derived from.
    pub fn load_paper(&mut self, text: String) {
        self.paper_text = Some(text);
        self.summary = None;
    }

    /// Overwrite (never merge) the current summary.
    pub fn set_summary(&mut self, summary: String) {
        self.summary = Some(summary);
    }

    pub fn paper_text(&self) -> Option<&str> {
        self.paper_text.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn push_user(&mut self, message: String) {
        self.chat_history.push(ChatEntry { role: Role::User, message });
    }

    pub fn push_assistant(&mut self, message: String) {
        self.chat_history.push(ChatEntry { role: Role::Assistant, message });
    }

    /// Append-only history, in send order. Entries are never reordered or
    /// individually removed.
    pub fn history(&self) -> &[ChatEntry] {
        &self.chat_history
    }

    /// Clear the chat history only; paper and summary stay untouched.
    pub fn clear_chat(&mut self) {
        self.chat_history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let session = Session::new();
        assert!(session.paper_text().is_none());
        assert!(session.summary().is_none());
        assert!(session.history().is_empty());
    }

    #[test]
    fn clear_chat_leaves_paper_and_summary() {
        let mut session = Session::new();
        session.load_paper("paper text".into());
        session.set_summary("the summary".into());
        session.push_user("hello".into());
        session.push_assistant("hi".into());

        session.clear_chat();

        assert!(session.history().is_empty());
        assert_eq!(session.paper_text(), Some("paper text"));
        assert_eq!(session.summary(), Some("the summary"));
    }

    #[test]
    fn load_paper_replaces_text_and_drops_stale_summary() {
        let mut session = Session::new();
        session.load_paper("old paper".into());
        session.set_summary("old summary".into());

        session.load_paper("new paper".into());

        assert_eq!(session.paper_text(), Some("new paper"));
        assert!(session.summary().is_none(), "stale summary must not survive a new upload");
    }

    #[test]
    fn history_preserves_send_order() {
        let mut session = Session::new();
        session.push_user("q1".into());
        session.push_assistant("a1".into());
        session.push_user("q2".into());

        let history = session.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[0].message, "q1");
        assert_eq!(history[1].role, Role::Assistant);
        assert_eq!(history[2].message, "q2");
    }
}
