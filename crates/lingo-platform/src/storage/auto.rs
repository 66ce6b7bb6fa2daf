//! Pick a storage backend.
//!
//! Priority: localStorage → Memory (fallback).

use std::rc::Rc;
use lingo_core::ports::StoragePort;
use lingo_types::config::StorageBackendType;
use super::{LocalStorage, MemoryStorage};

/// Open the best available storage backend.
/// Returns a trait object so callers are backend-agnostic.
pub fn auto_detect_storage() -> Rc<dyn StoragePort> {
    match LocalStorage::open() {
        Ok(local) => {
            log::info!("Storage backend: localStorage");
            Rc::new(local)
        }
        Err(e) => {
            log::warn!("localStorage unavailable ({}), falling back to memory", e);
            Rc::new(MemoryStorage::new())
        }
    }
}

/// Open the backend the config asks for, auto-detecting when requested.
pub fn storage_for(backend: &StorageBackendType) -> Rc<dyn StoragePort> {
    match backend {
        StorageBackendType::Auto => auto_detect_storage(),
        StorageBackendType::Memory => Rc::new(MemoryStorage::new()),
        StorageBackendType::LocalStorage => match LocalStorage::open() {
            Ok(local) => Rc::new(local),
            Err(e) => {
                log::warn!("localStorage unavailable ({}), using memory", e);
                Rc::new(MemoryStorage::new())
            }
        },
    }
}
