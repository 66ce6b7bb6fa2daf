//! Gemini enrichment adapter.
//!
//! Speaks the generativelanguage `generateContent` API. Each enrichment
//! operation is one prompt asking the model for a bare answer (a language
//! code, the translated text, a summary) with no surrounding prose.
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::json;

use lingo_core::ports::EnrichmentPort;
use lingo_types::{AssistantError, Result};
use lingo_types::config::EnrichmentConfig;

const DETECTION_PROMPT: &str = "You are an expert language identifier. Detect the language of \
the given text and return only its BCP-47 language code, e.g. `en` for English. \
Return the language code and nothing else.\n\nText:\n";

const TRANSLATION_PROMPT: &str = "You are an expert translator. Translate the given text from \
the source language to the target language. Return only the translated text, nothing else.\n\n";

const SUMMARY_PROMPT: &str = "Summarize the following text:\n";

/// Provider backed by a hosted generative-language API.
pub struct GeminiProvider {
    config: EnrichmentConfig,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(config: EnrichmentConfig) -> Self {
        let base_url = config
            .api_base
            .clone()
            .unwrap_or_else(|| config.provider.default_base_url().to_string());
        Self { config, base_url }
    }

    /// One prompt in, one text candidate out. Errors carry the provider's
    /// message so callers can map them to an operation-specific variant.
    async fn generate(&self, prompt: &str) -> std::result::Result<String, String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.config.model, self.config.api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.ok() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(format!("HTTP {}: {}", status, text));
        }

        let data: ApiResponse = response.json().await.map_err(|e| e.to_string())?;
        let candidate = data
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| "No candidates in response".to_string())?;
        let part = candidate
            .content
            .parts
            .into_iter()
            .next()
            .ok_or_else(|| "Empty candidate content".to_string())?;
        Ok(part.text)
    }
}

#[async_trait(?Send)]
impl EnrichmentPort for GeminiProvider {
    async fn detect(&self, text: &str) -> Result<String> {
        let prompt = format!("{}{}", DETECTION_PROMPT, text);
        let raw = self
            .generate(&prompt)
            .await
            .map_err(AssistantError::Detection)?;
        Ok(raw.trim().to_lowercase())
    }

    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        if source == target {
            return Err(AssistantError::SameLanguage);
        }
        let prompt = format!(
            "{}text: {}, from: {}, to: {}",
            TRANSLATION_PROMPT, text, source, target
        );
        let translated = self.generate(&prompt).await.map_err(|msg| {
            if msg.to_lowercase().contains("unsupported") {
                AssistantError::UnsupportedLanguagePair {
                    from: source.to_string(),
                    to: target.to_string(),
                }
            } else {
                AssistantError::Translation(msg)
            }
        })?;
        Ok(translated.trim().to_string())
    }

    async fn summarize(&self, text: &str) -> Result<String> {
        let prompt = format!("{}{}", SUMMARY_PROMPT, text);
        let summary = self
            .generate(&prompt)
            .await
            .map_err(AssistantError::Summarization)?;
        Ok(summary.trim().to_string())
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

// ─── API response types ──────────────────────────────────────

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<ApiCandidate>,
}

#[derive(Deserialize)]
struct ApiCandidate {
    content: ApiContent,
}

#[derive(Deserialize)]
struct ApiContent {
    #[serde(default)]
    parts: Vec<ApiPart>,
}

#[derive(Deserialize)]
struct ApiPart {
    text: String,
}
