//! WASM-target tests for lingo-types.
//!
//! Mirrors the native unit tests but runs under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use lingo_types::message::*;
use lingo_types::session::*;
use lingo_types::config::*;
use lingo_types::error::*;

// ─── Message Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn message_new() {
    let msg = Message::new("Bonjour le monde");
    assert!(!msg.id.is_empty());
    assert_eq!(msg.text, "Bonjour le monde");
    assert!(msg.detected_language.is_none());
    assert!(msg.translation.is_none());
}

#[wasm_bindgen_test]
fn message_update_ops() {
    let msg = Message::new("hola")
        .with_detected_language("es")
        .with_translation("hello");
    assert_eq!(msg.detected_language.as_deref(), Some("es"));
    assert_eq!(msg.translation.as_deref(), Some("hello"));
    assert_eq!(msg.text, "hola");
}

#[wasm_bindgen_test]
fn message_persisted_layout() {
    let msg = Message::new("hi").with_detected_language("en");
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["language"], "en");
    assert!(json.get("summary").is_none());
}

// ─── Session Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn session_push_and_lookup() {
    let mut session = Session::new();
    let msg = Message::new("first");
    let id = msg.id.clone();
    session.push(msg);
    session.push(Message::new("second"));
    assert_eq!(session.messages.len(), 2);
    assert_eq!(session.message(&id).unwrap().text, "first");
}

#[wasm_bindgen_test]
fn session_roundtrip() {
    let mut session = Session::new();
    session.push(Message::new("Bonjour").with_detected_language("fr"));
    let json = serde_json::to_string(&session).unwrap();
    let back: Session = serde_json::from_str(&json).unwrap();
    assert_eq!(back, session);
}

// ─── Config / Error Tests ────────────────────────────────

#[wasm_bindgen_test]
fn default_config() {
    let config = AssistantConfig::default();
    assert_eq!(config.enrichment.provider, EnrichmentProvider::Gemini);
    assert_eq!(config.default_target_language, "es");
}

#[wasm_bindgen_test]
fn error_display() {
    let err = AssistantError::SameLanguage;
    assert_eq!(err.to_string(), "Source and target language are the same");
}
