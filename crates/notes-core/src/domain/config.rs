//! Board Configuration

use serde::Deserialize;

/// Default storage slot for the note list
pub const DEFAULT_STORAGE_KEY: &str = "sticky-notes-data";

/// Tunables for a board. Every field has a default, so a partial JSON
/// object is enough to override one of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Key of the single storage slot holding the note list
    pub storage_key: String,
    /// Characters per estimated textarea row
    pub row_width: usize,
    /// How long the saving indicator stays visible, in milliseconds
    pub save_indicator_ms: u32,
    /// Exclusive upper bound for generated note ids
    pub id_bound: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            row_width: 32,
            save_indicator_ms: 1000,
            // ids must survive a round trip through a JS number
            id_bound: i32::MAX as u32,
        }
    }
}

impl BoardConfig {
    /// Parse a (possibly partial) JSON override.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
