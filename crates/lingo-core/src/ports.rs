//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `lingo-core` (pure Rust).
//! Implementations live in `lingo-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use lingo_types::Result;

// ─── Enrichment Port ─────────────────────────────────────────

/// Boundary to the external AI capability performing the three enrichment
/// operations. The underlying mechanism (browser-native capability vs.
/// hosted API) is fully interchangeable behind this contract.
///
/// Every operation is invoked at most once per user action; the core never
/// retries a failed call.
#[async_trait(?Send)]
pub trait EnrichmentPort {
    /// Detect the language of `text`, returning a BCP-47 language code.
    async fn detect(&self, text: &str) -> Result<String>;

    /// Translate `text` from `source` to `target`.
    ///
    /// Must fail with `AssistantError::SameLanguage` when `source == target`
    /// before any network call is attempted.
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;

    /// Summarize `text`. Best-effort; failure is never fatal.
    async fn summarize(&self, text: &str) -> Result<String>;

    /// Name of this provider (for logging/debug)
    fn provider_name(&self) -> &str;
}

// ─── Storage Port ────────────────────────────────────────────

/// Byte-blob key-value primitive over durable local storage.
/// The session store serializes its whole collection through one key here.
#[async_trait(?Send)]
pub trait StoragePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Set a value
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Delete a value
    async fn delete(&self, key: &str) -> Result<()>;

    /// List keys with a given prefix
    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>>;

    /// Check if a key exists
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
