//! Repository Layer - Core Traits
//!
//! The browser's localStorage and the in-memory fake both sit behind
//! `KeyValueStore`; the board only ever sees `NoteRepository`.

use crate::domain::{Note, StoreResult};

/// Synchronous string key-value store
pub trait KeyValueStore {
    /// Read a slot. `Ok(None)` when nothing was ever written.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace a slot in one write
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// Load/save of the full, ordered note list
pub trait NoteRepository {
    /// Read every stored note in stored order.
    ///
    /// Fails soft: a missing slot, an unreadable backend or unparseable
    /// content all yield an empty list.
    fn load(&self) -> Vec<Note>;

    /// Replace the stored list with `notes`
    fn save(&self, notes: &[Note]) -> StoreResult<()>;
}
