//! JSON Slot Repository
//!
//! Stores the note list as one JSON array under a single key.

use log::{debug, warn};

use crate::domain::{Note, StoreResult};
use super::traits::{KeyValueStore, NoteRepository};

/// `NoteRepository` backed by one slot of a `KeyValueStore`
#[derive(Debug, Clone)]
pub struct JsonSlot<K> {
    store: K,
    key: String,
}

impl<K: KeyValueStore> JsonSlot<K> {
    pub fn new(store: K, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }
}

impl<K: KeyValueStore> NoteRepository for JsonSlot<K> {
    fn load(&self) -> Vec<Note> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("[STORE] slot '{}' is empty", self.key);
                return Vec::new();
            }
            Err(e) => {
                warn!("[STORE] failed to read slot '{}': {}", self.key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Note>>(&raw) {
            Ok(notes) => notes,
            Err(e) => {
                warn!("[STORE] slot '{}' is not a note list, ignoring it: {}", self.key, e);
                Vec::new()
            }
        }
    }

    fn save(&self, notes: &[Note]) -> StoreResult<()> {
        let raw = serde_json::to_string(notes)?;
        self.store.set(&self.key, &raw)?;
        debug!("[STORE] wrote {} notes to '{}'", notes.len(), self.key);
        Ok(())
    }
}
