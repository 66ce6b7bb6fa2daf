//! UI-level state that drives rendering.
//! This is a read-only projection of the controller's activity, updated each
//! frame by draining the EventBus. Message content itself is read straight
//! from the active session; only busy flags, toasts, and list-refresh
//! signals live here.

use std::collections::HashSet;

use lingo_types::event::{AssistantEvent, EnrichmentKind, NoticeLevel};
use lingo_types::session::now_ms;

/// How long a toast stays on screen
pub const TOAST_TTL_MS: i64 = 4000;

pub struct UiState {
    /// Input field content
    pub input_text: String,
    /// Enrichments currently in flight, keyed by (message id, kind)
    pub in_flight: HashSet<(String, EnrichmentKind)>,
    /// Active toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Set when the saved-chat list should be re-read from the store
    pub sessions_dirty: bool,
    /// Whether settings panel is open
    pub show_settings: bool,
    /// Status line text
    pub status_text: String,
}

#[derive(Clone)]
pub struct Toast {
    pub level: NoticeLevel,
    pub text: String,
    pub born_ms: i64,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            in_flight: HashSet::new(),
            toasts: Vec::new(),
            sessions_dirty: true,
            show_settings: false,
            status_text: "Ready".to_string(),
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<AssistantEvent>) {
        for event in events {
            match event {
                AssistantEvent::EnrichmentStarted { message_id, kind } => {
                    self.in_flight.insert((message_id, kind));
                    self.status_text = format!("{}...", kind.label());
                }
                AssistantEvent::EnrichmentFinished {
                    message_id, kind, ..
                } => {
                    self.in_flight.remove(&(message_id, kind));
                    if self.in_flight.is_empty() {
                        self.status_text = "Ready".to_string();
                    }
                }
                AssistantEvent::SessionSaved { .. }
                | AssistantEvent::SessionSwitched { .. }
                | AssistantEvent::StoreLoaded { .. } => {
                    self.sessions_dirty = true;
                }
                AssistantEvent::Notice { level, text } => {
                    self.toasts.push(Toast {
                        level,
                        text,
                        born_ms: now_ms(),
                    });
                }
            }
        }
    }

    /// Is this enrichment in flight for this message?
    /// Used to disable duplicate dispatch from the panels.
    pub fn is_busy(&self, message_id: &str, kind: EnrichmentKind) -> bool {
        self.in_flight.contains(&(message_id.to_string(), kind))
    }

    /// Is any detection running? Gates the Send button.
    pub fn is_detecting(&self) -> bool {
        self.in_flight
            .iter()
            .any(|(_, kind)| *kind == EnrichmentKind::Detection)
    }

    pub fn is_busy_any(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Drop toasts older than their TTL. Called once per frame.
    pub fn prune_toasts(&mut self) {
        let now = now_ms();
        self.toasts.retain(|t| now - t.born_ms < TOAST_TTL_MS);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
