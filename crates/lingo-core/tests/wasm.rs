//! WASM-target tests for lingo-core.
//!
//! Runs EventBus, SessionStore, and SessionController tests under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use lingo_core::controller::SessionController;
use lingo_core::event_bus::EventBus;
use lingo_core::ports::*;
use lingo_core::store::SessionStore;
use lingo_types::config::AssistantConfig;
use lingo_types::event::{AssistantEvent, NoticeLevel};
use lingo_types::Result;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use async_trait::async_trait;

struct MemStorage {
    data: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemStorage {
    fn new() -> Self {
        Self {
            data: RefCell::new(HashMap::new()),
        }
    }
}

#[async_trait(?Send)]
impl StoragePort for MemStorage {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.data.borrow().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.data.borrow_mut().remove(key);
        Ok(())
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .data
            .borrow()
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn backend_name(&self) -> &str {
        "mem"
    }
}

struct FixedGateway;

#[async_trait(?Send)]
impl EnrichmentPort for FixedGateway {
    async fn detect(&self, _text: &str) -> Result<String> {
        Ok("fr".to_string())
    }

    async fn translate(&self, _text: &str, _source: &str, _target: &str) -> Result<String> {
        Ok("hello world".to_string())
    }

    async fn summarize(&self, _text: &str) -> Result<String> {
        Ok("greeting".to_string())
    }

    fn provider_name(&self) -> &str {
        "fixed"
    }
}

fn make_controller() -> (SessionController, EventBus, Rc<SessionStore>) {
    let store = Rc::new(SessionStore::new(Rc::new(MemStorage::new())));
    let bus = EventBus::new();
    let controller = SessionController::new(AssistantConfig::default(), store.clone(), bus.clone());
    (controller, bus, store)
}

// ─── EventBus ────────────────────────────────────────────

#[wasm_bindgen_test]
fn event_bus_emit_and_drain() {
    let bus = EventBus::new();
    bus.notify(NoticeLevel::Info, "hi");
    assert!(bus.has_pending());
    assert_eq!(bus.drain().len(), 1);
    assert!(!bus.has_pending());
}

// ─── SessionStore ────────────────────────────────────────

#[wasm_bindgen_test]
async fn store_hydrate_empty() {
    let store = SessionStore::new(Rc::new(MemStorage::new()));
    assert_eq!(store.hydrate().await, 0);
    assert!(store.most_recent().is_none());
}

#[wasm_bindgen_test]
async fn store_upsert_roundtrip() {
    let (controller, _, store) = make_controller();
    let gateway = FixedGateway;
    controller.submit_text(&gateway, "Bonjour le monde").await;
    controller.save_active_session().await;
    controller.save_active_session().await;

    assert_eq!(store.len(), 1);
    assert_eq!(store.most_recent().unwrap().messages.len(), 1);
}

// ─── SessionController ───────────────────────────────────

#[wasm_bindgen_test]
async fn detect_then_translate() {
    let (controller, _, _) = make_controller();
    let gateway = FixedGateway;

    let id = controller
        .submit_text(&gateway, "Bonjour le monde")
        .await
        .unwrap();
    controller.request_translation(&gateway, &id, "en").await;

    controller.with_active(|s| {
        let msg = s.message(&id).unwrap();
        assert_eq!(msg.detected_language.as_deref(), Some("fr"));
        assert_eq!(msg.translation.as_deref(), Some("hello world"));
    });
}

#[wasm_bindgen_test]
async fn save_empty_is_noop() {
    let (controller, bus, store) = make_controller();
    controller.save_active_session().await;
    assert_eq!(store.len(), 0);
    assert!(bus
        .drain()
        .iter()
        .any(|e| matches!(e, AssistantEvent::Notice { .. })));
}
