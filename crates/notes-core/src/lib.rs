//! Sticky Notes Core
//!
//! Board state, note domain and the storage boundary, with no DOM access.
//! The Leptos frontend drives a `NoteBoard` and renders from it.

pub mod domain;
pub mod repository;
pub mod ids;
pub mod clock;
pub mod board;

pub use board::{Card, CloseOutcome, EditOutcome, EditorSession, NoteBoard};
pub use clock::{Clock, FixedClock, LocalClock};
pub use domain::{BoardConfig, BoardError, BoardResult, Note, NoteId, StoreError, StoreResult};
pub use ids::{IdSource, SequentialIds};
pub use repository::{JsonSlot, KeyValueStore, MemoryStore, NoteRepository};
