use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// One entry in the in-memory chat log. The log is append-only and
/// unbounded; nothing ever trims or persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    /// Unix timestamp (ms)
    pub ts_ms: i64,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>, ts_ms: i64) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            ts_ms,
        }
    }

    pub fn assistant(text: impl Into<String>, ts_ms: i64) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Assistant,
            ts_ms,
        }
    }
}
