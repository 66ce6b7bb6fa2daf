use serde::{Deserialize, Serialize};
use crate::message::Message;

/// A persisted conversation session.
///
/// `id` never changes after creation. `messages` is append-only and keeps
/// creation order across persistence round-trips. `timestamp` (ms since
/// epoch) is refreshed on every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub messages: Vec<Message>,
    pub timestamp: i64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            messages: Vec::new(),
            timestamp: now_ms(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn touch(&mut self) {
        self.timestamp = now_ms();
    }

    /// Append a message and refresh the timestamp.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.touch();
    }

    /// Look up a message by identity.
    pub fn message(&self, id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Replace the message with the same id, keeping its position.
    /// Returns false (and leaves the session untouched) when no message
    /// matches — the caller decides whether that is an error.
    pub fn upsert_message(&mut self, message: Message) -> bool {
        match self.messages.iter_mut().find(|m| m.id == message.id) {
            Some(slot) => {
                *slot = message;
                self.touch();
                true
            }
            None => false,
        }
    }

    pub fn summarize(&self) -> SessionSummary {
        SessionSummary {
            id: self.id.clone(),
            title: self
                .messages
                .first()
                .map(|m| m.text.clone())
                .unwrap_or_else(|| "Empty chat".to_string()),
            timestamp: self.timestamp,
            message_count: self.messages.len(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of a session for the saved-chat list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: String,
    pub title: String,
    pub timestamp: i64,
    pub message_count: usize,
}

pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
