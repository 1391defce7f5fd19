//! Error Types
//!
//! Storage and board errors, with result aliases.

use thiserror::Error;

/// Result of a storage operation
pub type StoreResult<T> = Result<T, StoreError>;

/// Result of a board operation
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors raised by a key-value store or the note codec
#[derive(Debug, Error)]
pub enum StoreError {
    /// No storage backend is reachable (e.g. storage disabled in the browser)
    #[error("storage unavailable")]
    Unavailable,
    /// The backend rejected the operation (quota exceeded, security error)
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("failed to serialize notes: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised by board operations
#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("no free note id after {0} attempts")]
    IdSpaceExhausted(usize),
}
