//! Repository Layer
//!
//! Storage boundary for the note list: a raw key-value interface, the
//! JSON slot that maps it to notes, and list editing helpers.

mod traits;
mod json_slot;
mod memory;
mod list;

#[cfg(test)]
mod tests;

pub use traits::{KeyValueStore, NoteRepository};
pub use json_slot::JsonSlot;
pub use memory::MemoryStore;
pub use list::{remove_by_id, upsert_front};
