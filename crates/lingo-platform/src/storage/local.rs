//! window.localStorage backend.
//! Persistent across page reloads; synchronous under the hood, which suits
//! the session store's atomic whole-document writes.
//!
//! localStorage holds strings, so values must be valid UTF-8 — the session
//! store only ever writes JSON, which is.

use async_trait::async_trait;
use wasm_bindgen::JsValue;

use lingo_core::ports::StoragePort;
use lingo_types::{AssistantError, Result};

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Grab window.localStorage, failing when the environment has none
    /// (private browsing modes, non-browser hosts).
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| AssistantError::Storage("No window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_err)?
            .ok_or_else(|| AssistantError::Storage("localStorage not available".to_string()))?;
        Ok(Self { storage })
    }
}

#[async_trait(?Send)]
impl StoragePort for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self.storage.get_item(key).map_err(js_err)?;
        Ok(value.map(String::into_bytes))
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(value)
            .map_err(|e| AssistantError::Storage(format!("Non-UTF-8 value for {}: {}", key, e)))?;
        self.storage.set_item(key, text).map_err(js_err)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(js_err)
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        let len = self.storage.length().map_err(js_err)?;
        let mut keys = Vec::new();
        for i in 0..len {
            if let Some(key) = self.storage.key(i).map_err(js_err)? {
                if key.starts_with(prefix) {
                    keys.push(key);
                }
            }
        }
        Ok(keys)
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}

fn js_err(e: JsValue) -> AssistantError {
    AssistantError::Storage(format!("{:?}", e))
}
