//! Note Id Allocation
//!
//! Candidates come from an `IdSource`; a candidate is only accepted when
//! no card on the board and no stored record already uses it.

use std::collections::HashSet;

use crate::domain::{BoardError, BoardResult, NoteId};

/// Draws before allocation gives up
pub const MAX_ID_ATTEMPTS: usize = 64;

/// Produces candidate id values
pub trait IdSource {
    fn next_candidate(&mut self) -> u32;
}

/// Monotonic counter
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u32,
}

impl SequentialIds {
    pub fn starting_at(next: u32) -> Self {
        Self { next }
    }
}

impl IdSource for SequentialIds {
    fn next_candidate(&mut self) -> u32 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Pick an id below `bound` that is not in `taken`.
pub fn allocate_id(
    source: &mut dyn IdSource,
    taken: &HashSet<NoteId>,
    bound: u32,
) -> BoardResult<NoteId> {
    let bound = bound.max(1);
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = NoteId(source.next_candidate() % bound);
        if !taken.contains(&candidate) {
            return Ok(candidate);
        }
        log::debug!("[IDS] candidate {} already in use", candidate);
    }
    Err(BoardError::IdSpaceExhausted(MAX_ID_ATTEMPTS))
}
