#[cfg(test)]
mod tests {
    use crate::message::*;
    use crate::session::*;
    use crate::event::*;
    use crate::config::*;
    use crate::error::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_new() {
        let msg = Message::new("Bonjour le monde");
        assert!(!msg.id.is_empty());
        assert_eq!(msg.text, "Bonjour le monde");
        assert!(msg.detected_language.is_none());
        assert!(msg.selected_language.is_none());
        assert!(msg.summary.is_none());
        assert!(msg.translation.is_none());
    }

    #[test]
    fn test_message_ids_unique() {
        let a = Message::new("one");
        let b = Message::new("two");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_message_with_detected_language() {
        let msg = Message::new("hola").with_detected_language("es");
        assert_eq!(msg.detected_language.as_deref(), Some("es"));
        assert_eq!(msg.text, "hola");
        assert!(msg.translation.is_none());
    }

    #[test]
    fn test_message_with_ops_keep_other_fields() {
        let msg = Message::new("text")
            .with_detected_language("fr")
            .with_selected_language("en")
            .with_summary("short")
            .with_translation("texte");
        assert_eq!(msg.detected_language.as_deref(), Some("fr"));
        assert_eq!(msg.selected_language.as_deref(), Some("en"));
        assert_eq!(msg.summary.as_deref(), Some("short"));
        assert_eq!(msg.translation.as_deref(), Some("texte"));
        assert_eq!(msg.text, "text");
    }

    #[test]
    fn test_message_with_summary_overwrites() {
        let msg = Message::new("text").with_summary("v1").with_summary("v2");
        assert_eq!(msg.summary.as_deref(), Some("v2"));
    }

    #[test]
    fn test_message_serialized_field_names() {
        let msg = Message::new("hi")
            .with_detected_language("en")
            .with_selected_language("es");
        let json = serde_json::to_value(&msg).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("text"));
        assert_eq!(obj["language"], "en");
        assert_eq!(obj["selectedLanguage"], "es");
        // absent options are omitted entirely
        assert!(!obj.contains_key("summary"));
        assert!(!obj.contains_key("translation"));
        assert!(!obj.contains_key("detected_language"));
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = Message::new("round trip")
            .with_detected_language("fr")
            .with_translation("aller-retour");
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_message_deserializes_sparse_record() {
        // Records saved before any enrichment only carry id and text
        let back: Message = serde_json::from_str(r#"{"id":"m1","text":"hey"}"#).unwrap();
        assert_eq!(back.id, "m1");
        assert_eq!(back.text, "hey");
        assert!(back.detected_language.is_none());
        assert!(back.summary.is_none());
    }

    // ─── Session Tests ───────────────────────────────────────

    #[test]
    fn test_session_new_is_empty() {
        let session = Session::new();
        assert!(!session.id.is_empty());
        assert!(session.is_empty());
        assert!(session.timestamp > 0);
    }

    #[test]
    fn test_session_push_keeps_order() {
        let mut session = Session::new();
        session.push(Message::new("first"));
        session.push(Message::new("second"));
        session.push(Message::new("third"));
        let texts: Vec<&str> = session.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_session_message_lookup_by_id() {
        let mut session = Session::new();
        let msg = Message::new("findable");
        let id = msg.id.clone();
        session.push(msg);
        session.push(Message::new("other"));
        assert_eq!(session.message(&id).unwrap().text, "findable");
        assert!(session.message("missing").is_none());
    }

    #[test]
    fn test_session_upsert_message_replaces_in_place() {
        let mut session = Session::new();
        let msg = Message::new("original");
        let id = msg.id.clone();
        session.push(msg.clone());
        session.push(Message::new("later"));

        let updated = msg.with_detected_language("fr");
        assert!(session.upsert_message(updated));
        assert_eq!(
            session.messages[0].detected_language.as_deref(),
            Some("fr")
        );
        // position and the other message are untouched
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[1].text, "later");
    }

    #[test]
    fn test_session_upsert_unknown_id_is_noop() {
        let mut session = Session::new();
        session.push(Message::new("only"));
        let before = session.clone();
        assert!(!session.upsert_message(Message::new("stranger")));
        assert_eq!(session.messages, before.messages);
    }

    #[test]
    fn test_session_serialization_roundtrip() {
        let mut session = Session::new();
        session.push(Message::new("Bonjour").with_detected_language("fr"));
        session.push(Message::new("Hello"));
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn test_session_serialized_field_names() {
        let session = Session::new();
        let json = serde_json::to_value(&session).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("messages"));
        assert!(obj["timestamp"].is_i64());
    }

    #[test]
    fn test_session_summary() {
        let mut session = Session::new();
        session.push(Message::new("What does ciao mean?"));
        session.push(Message::new("And arrivederci?"));
        let summary = session.summarize();
        assert_eq!(summary.id, session.id);
        assert_eq!(summary.title, "What does ciao mean?");
        assert_eq!(summary.message_count, 2);
    }

    #[test]
    fn test_session_summary_empty() {
        let summary = Session::new().summarize();
        assert_eq!(summary.title, "Empty chat");
        assert_eq!(summary.message_count, 0);
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_enrichment_event_serialization() {
        let event = AssistantEvent::EnrichmentStarted {
            message_id: "m1".to_string(),
            kind: EnrichmentKind::Translation,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("EnrichmentStarted"));
        assert!(json.contains("Translation"));
    }

    #[test]
    fn test_notice_event_roundtrip() {
        let event = AssistantEvent::Notice {
            level: NoticeLevel::Warning,
            text: "Unsupported Languages Provided!".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: AssistantEvent = serde_json::from_str(&json).unwrap();
        if let AssistantEvent::Notice { level, text } = back {
            assert_eq!(level, NoticeLevel::Warning);
            assert!(text.contains("Unsupported"));
        } else {
            panic!("Wrong variant");
        }
    }

    #[test]
    fn test_enrichment_kind_labels() {
        assert_eq!(EnrichmentKind::Detection.label(), "Detecting language");
        assert_eq!(EnrichmentKind::Summarization.label(), "Summarizing");
        assert_eq!(EnrichmentKind::Translation.label(), "Translating");
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = AssistantConfig::default();
        assert_eq!(config.enrichment.provider, EnrichmentProvider::Gemini);
        assert_eq!(config.enrichment.model, "gemini-2.0-flash");
        assert!(config.enrichment.api_key.is_empty());
        assert!(config.enrichment.api_base.is_none());
        assert_eq!(config.default_target_language, "es");
        assert_eq!(config.default_detected_language, "en");
        assert_eq!(config.storage.backend, StorageBackendType::Auto);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = AssistantConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: AssistantConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.enrichment.provider, EnrichmentProvider::Gemini);
        assert_eq!(back.default_target_language, "es");
    }

    #[test]
    fn test_provider_base_urls() {
        assert_eq!(
            EnrichmentProvider::Gemini.default_base_url(),
            "https://generativelanguage.googleapis.com"
        );
        assert!(EnrichmentProvider::BrowserAi.default_base_url().is_empty());
    }

    #[test]
    fn test_provider_labels() {
        assert_eq!(EnrichmentProvider::Gemini.label(), "Gemini");
        assert_eq!(EnrichmentProvider::BrowserAi.label(), "Browser AI");
        assert_eq!(EnrichmentProvider::Custom.label(), "Custom");
        assert_eq!(EnrichmentProvider::all().len(), 3);
    }

    #[test]
    fn test_language_name() {
        assert_eq!(language_name("fr"), "French");
        assert_eq!(language_name("xx"), "xx");
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = AssistantError::SameLanguage;
        assert_eq!(err.to_string(), "Source and target language are the same");

        let err = AssistantError::UnsupportedLanguagePair {
            from: "fr".to_string(),
            to: "xx".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported language pair: fr -> xx");

        let err = AssistantError::CapabilityUnavailable("no window.ai".to_string());
        assert_eq!(err.to_string(), "AI capability unavailable: no window.ai");

        let err = AssistantError::StoreCorrupt("bad json".to_string());
        assert_eq!(err.to_string(), "Corrupt saved data: bad json");
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{nope}}").unwrap_err();
        let err: AssistantError = serde_err.into();
        assert!(matches!(err, AssistantError::Serialization(_)));
    }

    #[test]
    fn test_error_clone_eq() {
        let err = AssistantError::Network("timeout".to_string());
        assert_eq!(err.clone(), err);
    }
}
