use serde::{Deserialize, Serialize};

/// The three enrichment operations performed on a message's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnrichmentKind {
    Detection,
    Summarization,
    Translation,
}

impl EnrichmentKind {
    pub fn label(&self) -> &'static str {
        match self {
            EnrichmentKind::Detection => "Detecting language",
            EnrichmentKind::Summarization => "Summarizing",
            EnrichmentKind::Translation => "Translating",
        }
    }
}

/// Events emitted by the session controller.
/// UI drains these each frame for busy flags and toasts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AssistantEvent {
    /// An enrichment call is in flight for this message
    EnrichmentStarted { message_id: String, kind: EnrichmentKind },

    /// The call resolved; the message has already been updated on success
    EnrichmentFinished {
        message_id: String,
        kind: EnrichmentKind,
        success: bool,
    },

    /// The active session was upserted into the store
    SessionSaved { session_id: String },

    /// A stored session became the active one
    SessionSwitched { session_id: String },

    /// The store snapshot finished hydrating from durable storage
    StoreLoaded { session_count: usize },

    /// A user-facing toast
    Notice { level: NoticeLevel, text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}
