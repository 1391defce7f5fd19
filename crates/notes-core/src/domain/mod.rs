//! Domain Layer
//!
//! Note entity, board configuration and error types.
//! No browser or storage dependencies here.

mod note;
mod error;
mod config;

pub use note::{estimate_rows, matches_query, Note, NoteId};
pub use error::{BoardError, BoardResult, StoreError, StoreResult};
pub use config::BoardConfig;
