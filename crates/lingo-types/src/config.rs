use serde::{Deserialize, Serialize};

/// Top-level assistant configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    pub enrichment: EnrichmentConfig,
    pub storage: StorageConfig,
    /// Target language offered when a message has no explicit selection
    pub default_target_language: String,
    /// Assumed source language until a detection succeeds
    pub default_detected_language: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            enrichment: EnrichmentConfig::default(),
            storage: StorageConfig::default(),
            default_target_language: "es".to_string(),
            default_detected_language: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentConfig {
    pub provider: EnrichmentProvider,
    pub model: String,
    pub api_key: String,
    pub api_base: Option<String>,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            provider: EnrichmentProvider::Gemini,
            model: "gemini-2.0-flash".to_string(),
            api_key: String::new(),
            api_base: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrichmentProvider {
    /// Hosted generative-language API
    Gemini,
    /// Browser-native `window.ai` capability set
    BrowserAi,
    Custom,
}

impl EnrichmentProvider {
    pub fn default_base_url(&self) -> &str {
        match self {
            EnrichmentProvider::Gemini => "https://generativelanguage.googleapis.com",
            EnrichmentProvider::BrowserAi => "",
            EnrichmentProvider::Custom => "",
        }
    }

    pub fn all() -> &'static [EnrichmentProvider] {
        &[
            EnrichmentProvider::Gemini,
            EnrichmentProvider::BrowserAi,
            EnrichmentProvider::Custom,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            EnrichmentProvider::Gemini => "Gemini",
            EnrichmentProvider::BrowserAi => "Browser AI",
            EnrichmentProvider::Custom => "Custom",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackendType,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackendType::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBackendType {
    /// Auto-detect best available backend
    Auto,
    Memory,
    LocalStorage,
}

/// Language codes offered in the target-language selector.
/// Detection may return codes outside this list; that is fine — the list
/// only bounds what the user can pick as a target.
pub const TARGET_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("pt", "Portuguese"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("zh", "Chinese"),
    ("ar", "Arabic"),
    ("ru", "Russian"),
];

/// Human-readable name for a language code, falling back to the code itself.
pub fn language_name(code: &str) -> &str {
    TARGET_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}
