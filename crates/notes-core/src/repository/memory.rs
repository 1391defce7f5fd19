//! In-Memory Key-Value Store
//!
//! Stand-in for browser storage in tests and headless hosts.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::{StoreError, StoreResult};
use super::traits::KeyValueStore;

/// Shared in-memory store. Clones see the same slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with one slot already written
    pub fn with_slot(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.slots().insert(key.to_string(), value.to_string());
        store
    }

    /// Make every following `set` fail, like a full quota.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Raw slot content, bypassing the error paths
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots().get(key).cloned()
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // a poisoned map is still a valid map
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.slots().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("quota exceeded".to_string()));
        }
        self.slots().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
