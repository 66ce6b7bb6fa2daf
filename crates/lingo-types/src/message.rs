use serde::{Deserialize, Serialize};

/// A single user utterance plus its enrichment results.
///
/// `text` is immutable once created; enrichment fields are filled in as
/// asynchronous results arrive. The serialized field names are the persisted
/// storage layout and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    /// Language code set exactly once by a successful detection
    #[serde(rename = "language", skip_serializing_if = "Option::is_none", default)]
    pub detected_language: Option<String>,
    /// Target language chosen by the user for this message
    #[serde(
        rename = "selectedLanguage",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub selected_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub translation: Option<String>,
}

impl Message {
    /// Create a message from raw user input. The id is a time-ordered
    /// UUID (v7), so ids within a session sort by creation time.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::now_v7().to_string(),
            text: text.into(),
            detected_language: None,
            selected_language: None,
            summary: None,
            translation: None,
        }
    }

    pub fn with_detected_language(self, code: impl Into<String>) -> Self {
        Self {
            detected_language: Some(code.into()),
            ..self
        }
    }

    pub fn with_selected_language(self, code: impl Into<String>) -> Self {
        Self {
            selected_language: Some(code.into()),
            ..self
        }
    }

    /// Summaries derive from this message's own `text`; re-summarizing
    /// overwrites the previous value.
    pub fn with_summary(self, summary: impl Into<String>) -> Self {
        Self {
            summary: Some(summary.into()),
            ..self
        }
    }

    pub fn with_translation(self, translation: impl Into<String>) -> Self {
        Self {
            translation: Some(translation.into()),
            ..self
        }
    }
}
