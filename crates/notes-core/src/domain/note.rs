//! Note Entity
//!
//! A single short text note as stored and displayed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Note identifier, stored as a bare JSON integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub u32);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sticky note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    /// Last edit time as "HH:MM", 24-hour local time
    pub updated_at: String,
    /// Note body; empty only while the note is unsaved
    pub content: String,
}

impl Note {
    pub fn new(id: NoteId, updated_at: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            updated_at: updated_at.into(),
            content: content.into(),
        }
    }

    /// Fresh note as created by the add button
    pub fn empty(id: NoteId, updated_at: impl Into<String>) -> Self {
        Self::new(id, updated_at, String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Number of textarea rows to show for a body of `len` characters.
///
/// Coarse wrap estimate: one row below `row_width`, otherwise
/// `ceil(len / row_width)`. A zero width is treated as one.
pub fn estimate_rows(len: usize, row_width: usize) -> usize {
    let width = row_width.max(1);
    if len < width {
        1
    } else {
        len.div_ceil(width)
    }
}

/// Case-insensitive substring filter used by the search box.
pub fn matches_query(content: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    content.to_lowercase().contains(&query.to_lowercase())
}
