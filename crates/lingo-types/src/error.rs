use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    #[error("AI capability unavailable: {0}")]
    CapabilityUnavailable(String),

    #[error("Source and target language are the same")]
    SameLanguage,

    // Field names avoid `source`, which thiserror reserves for error chaining
    #[error("Unsupported language pair: {from} -> {to}")]
    UnsupportedLanguagePair { from: String, to: String },

    #[error("Language detection failed: {0}")]
    Detection(String),

    #[error("Translation failed: {0}")]
    Translation(String),

    #[error("Summarization failed: {0}")]
    Summarization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Corrupt saved data: {0}")]
    StoreCorrupt(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl From<serde_json::Error> for AssistantError {
    fn from(e: serde_json::Error) -> Self {
        AssistantError::Serialization(e.to_string())
    }
}
