//! Session controller — orchestrates user intents.
//!
//! Owns the in-memory active session and mediates every store read/write.
//! Enrichment flows one direction: user text → controller → enrichment port
//! → controller mutates the matching message → UI re-renders.
//!
//! All methods take `&self`; the active session sits behind a RefCell and a
//! borrow is never held across an await. Enrichments for different messages
//! can therefore be in flight concurrently, and a result is always applied
//! by id lookup against the *current* session state — never by an index
//! captured before the suspension. A late result for a message that is no
//! longer active (the user started a new chat) is dropped silently.

use std::cell::RefCell;
use std::rc::Rc;

use lingo_types::AssistantError;
use lingo_types::config::AssistantConfig;
use lingo_types::event::{AssistantEvent, EnrichmentKind, NoticeLevel};
use lingo_types::message::Message;
use lingo_types::session::Session;

use crate::event_bus::EventBus;
use crate::ports::EnrichmentPort;
use crate::store::SessionStore;

pub struct SessionController {
    active: RefCell<Session>,
    store: Rc<SessionStore>,
    event_bus: EventBus,
    /// Session-level fallback source language, updated on every successful
    /// detection and reset when a new chat starts.
    detected_default: RefCell<String>,
    config: AssistantConfig,
}

impl SessionController {
    pub fn new(config: AssistantConfig, store: Rc<SessionStore>, event_bus: EventBus) -> Self {
        Self {
            active: RefCell::new(Session::new()),
            store,
            event_bus,
            detected_default: RefCell::new(config.default_detected_language.clone()),
            config,
        }
    }

    /// Read access to the active session without handing out the RefCell.
    pub fn with_active<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.active.borrow())
    }

    pub fn active_id(&self) -> String {
        self.active.borrow().id.clone()
    }

    /// Target language to offer when a message carries no explicit selection.
    pub fn default_target_language(&self) -> &str {
        &self.config.default_target_language
    }

    // ─── User intents ────────────────────────────────────────

    /// Create a message from raw input, append it, and dispatch detection.
    /// Empty or whitespace-only input creates nothing.
    ///
    /// Returns the new message's id once detection has settled.
    pub async fn submit_text(&self, gateway: &dyn EnrichmentPort, raw: &str) -> Option<String> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        let message = Message::new(text);
        let id = message.id.clone();
        let text = message.text.clone();
        self.active.borrow_mut().push(message);

        self.start(&id, EnrichmentKind::Detection);
        let result = gateway.detect(&text).await;
        let success = result.is_ok();
        match result {
            Ok(code) => {
                // Only adopt the code as the session fallback when the
                // message is still part of the active session — a result
                // arriving after a session change must not leak into it.
                if self.apply_enrichment(&id, |m| m.with_detected_language(code.clone())) {
                    *self.detected_default.borrow_mut() = code;
                }
            }
            Err(e) => {
                // The message stays untagged; no retry.
                log::warn!("Language detection failed for {}: {}", id, e);
                self.event_bus.notify(NoticeLevel::Error, notice_text(&e));
            }
        }
        self.finish(&id, EnrichmentKind::Detection, success);
        Some(id)
    }

    /// Summarize the message's text. Unknown ids are a no-op.
    pub async fn request_summary(&self, gateway: &dyn EnrichmentPort, message_id: &str) {
        let Some(text) = self.message_text(message_id) else {
            return;
        };

        self.start(message_id, EnrichmentKind::Summarization);
        let result = gateway.summarize(&text).await;
        let success = result.is_ok();
        match result {
            Ok(summary) => {
                self.apply_enrichment(message_id, |m| m.with_summary(summary));
            }
            Err(e) => {
                log::warn!("Summarization failed for {}: {}", message_id, e);
                self.event_bus.notify(NoticeLevel::Error, notice_text(&e));
            }
        }
        self.finish(message_id, EnrichmentKind::Summarization, success);
    }

    /// Translate the message's text into `target`.
    ///
    /// The effective source is the message's detected language, falling back
    /// to the session default. Source == target short-circuits without
    /// touching the gateway. A failed re-translation leaves any previous
    /// translation untouched.
    pub async fn request_translation(
        &self,
        gateway: &dyn EnrichmentPort,
        message_id: &str,
        target: &str,
    ) {
        let Some((text, detected)) = self.with_active(|s| {
            s.message(message_id)
                .map(|m| (m.text.clone(), m.detected_language.clone()))
        }) else {
            return;
        };
        let source = detected.unwrap_or_else(|| self.detected_default.borrow().clone());

        if source == target {
            self.event_bus
                .notify(NoticeLevel::Error, notice_text(&AssistantError::SameLanguage));
            return;
        }

        self.start(message_id, EnrichmentKind::Translation);
        let result = gateway.translate(&text, &source, target).await;
        let success = result.is_ok();
        match result {
            Ok(translation) => {
                self.apply_enrichment(message_id, |m| m.with_translation(translation));
            }
            Err(e) => {
                log::warn!("Translation failed for {}: {}", message_id, e);
                self.event_bus.notify(NoticeLevel::Error, notice_text(&e));
            }
        }
        self.finish(message_id, EnrichmentKind::Translation, success);
    }

    /// Record the user's target-language pick for one message.
    pub fn select_target_language(&self, message_id: &str, lang: &str) {
        let mut active = self.active.borrow_mut();
        if let Some(msg) = active.message(message_id).cloned() {
            active.upsert_message(msg.with_selected_language(lang));
        }
    }

    /// Upsert the active session into the store. Saving an empty session is
    /// a no-op with an informational notice.
    pub async fn save_active_session(&self) {
        let session = {
            let mut active = self.active.borrow_mut();
            if active.is_empty() {
                self.event_bus
                    .notify(NoticeLevel::Info, "Nothing to save yet.");
                return;
            }
            active.touch();
            active.clone()
        };
        let id = session.id.clone();

        match self.store.save_or_update(session).await {
            Ok(()) => {
                self.event_bus
                    .emit(AssistantEvent::SessionSaved { session_id: id });
                self.event_bus.notify(NoticeLevel::Success, "Chat saved.");
            }
            Err(e) => {
                log::error!("Saving chat failed: {}", e);
                self.event_bus
                    .notify(NoticeLevel::Error, format!("Could not save chat: {}", e));
            }
        }
    }

    /// Replace the active session with a fresh empty one.
    /// The previous session is not saved implicitly.
    pub fn start_new_session(&self) {
        *self.active.borrow_mut() = Session::new();
        *self.detected_default.borrow_mut() = self.config.default_detected_language.clone();
    }

    /// Make a stored session the active one, discarding unsaved edits to the
    /// previous active session. The user presses Save first if they care.
    pub fn switch_session(&self, id: &str) {
        match self.store.get(id) {
            Some(session) => {
                *self.detected_default.borrow_mut() = self.session_detected_default(&session);
                *self.active.borrow_mut() = session;
                self.event_bus.emit(AssistantEvent::SessionSwitched {
                    session_id: id.to_string(),
                });
            }
            None => {
                self.event_bus
                    .notify(NoticeLevel::Warning, "That chat no longer exists.");
            }
        }
    }

    /// Adopt the store's most recent session after hydration, if any.
    pub fn restore_most_recent(&self) -> bool {
        match self.store.most_recent() {
            Some(session) => {
                let id = session.id.clone();
                *self.detected_default.borrow_mut() = self.session_detected_default(&session);
                *self.active.borrow_mut() = session;
                self.event_bus
                    .emit(AssistantEvent::SessionSwitched { session_id: id });
                true
            }
            None => false,
        }
    }

    // ─── Internal ────────────────────────────────────────────

    /// Fallback source language for a session being adopted: its most
    /// recent successful detection, else the configured default.
    fn session_detected_default(&self, session: &Session) -> String {
        session
            .messages
            .iter()
            .rev()
            .find_map(|m| m.detected_language.clone())
            .unwrap_or_else(|| self.config.default_detected_language.clone())
    }

    fn message_text(&self, message_id: &str) -> Option<String> {
        self.active
            .borrow()
            .message(message_id)
            .map(|m| m.text.clone())
    }

    /// Apply an enrichment result to the matching message in the *current*
    /// active session. Returns false when the message is gone (session was
    /// switched or reset while the call was in flight).
    fn apply_enrichment(&self, message_id: &str, update: impl FnOnce(Message) -> Message) -> bool {
        let mut active = self.active.borrow_mut();
        match active.message(message_id).cloned() {
            Some(msg) => active.upsert_message(update(msg)),
            None => {
                log::debug!(
                    "Dropping late enrichment result for absent message {}",
                    message_id
                );
                false
            }
        }
    }

    fn start(&self, message_id: &str, kind: EnrichmentKind) {
        self.event_bus.emit(AssistantEvent::EnrichmentStarted {
            message_id: message_id.to_string(),
            kind,
        });
    }

    fn finish(&self, message_id: &str, kind: EnrichmentKind, success: bool) {
        self.event_bus.emit(AssistantEvent::EnrichmentFinished {
            message_id: message_id.to_string(),
            kind,
            success,
        });
    }
}

/// User-facing toast text for a controller-boundary error.
fn notice_text(err: &AssistantError) -> String {
    match err {
        AssistantError::CapabilityUnavailable(_) => {
            "This environment doesn't support the required AI capabilities.".to_string()
        }
        AssistantError::SameLanguage => "Can't translate to the same language".to_string(),
        AssistantError::UnsupportedLanguagePair { .. } => {
            "Unsupported Languages Provided!".to_string()
        }
        AssistantError::Detection(_) => "Error detecting language!".to_string(),
        AssistantError::Translation(_) => "Error in translation.".to_string(),
        AssistantError::Summarization(_) => {
            "Error occurred while summarizing text.".to_string()
        }
        other => other.to_string(),
    }
}
