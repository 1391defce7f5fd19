//! Board Context
//!
//! The board state shared by every component through Leptos context.
//! All gestures go through here so failures are logged in one place.

use leptos::prelude::*;
use log::error;
use notes_core::{BoardResult, CloseOutcome, EditOutcome, JsonSlot, LocalClock, NoteBoard, NoteId};

use crate::ids::JsRandomIds;
use crate::storage::BrowserStorage;

pub type Board = NoteBoard<JsonSlot<BrowserStorage>>;

#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Whole board state; components read it through `with`
    pub board: RwSignal<Board>,
}

impl BoardContext {
    pub fn new(board: Board) -> Self {
        Self { board: RwSignal::new(board) }
    }

    /// Add an empty note at the front
    pub fn add(&self) {
        let result = self.board.try_update(|b| b.add_note(&mut JsRandomIds, &LocalClock));
        if let Some(Err(e)) = result {
            error!("[BOARD] failed to add note: {}", e);
        }
    }

    pub fn search(&self, query: &str) {
        self.board.update(|b| b.set_query(query));
    }

    pub fn open_editor(&self, id: NoteId) {
        self.board.update(|b| {
            b.open_editor(id);
        });
    }

    /// Apply editor text. The outcome drives the save indicator.
    pub fn edit(&self, id: NoteId, text: &str) -> BoardResult<EditOutcome> {
        let result = self
            .board
            .try_update(|b| b.edit(id, text, &LocalClock))
            .unwrap_or(Ok(EditOutcome::Ignored));
        if let Err(e) = &result {
            error!("[BOARD] failed to save note {}: {}", id, e);
        }
        result
    }

    pub fn delete(&self, id: NoteId) {
        if let Some(Err(e)) = self.board.try_update(|b| b.delete(id)) {
            error!("[BOARD] failed to delete note {}: {}", id, e);
        }
    }

    pub fn close(&self, id: NoteId) -> CloseOutcome {
        self.board
            .try_update(|b| b.close_editor(id))
            .unwrap_or(CloseOutcome::NotOpen)
    }

    /// How long the saving indicator stays up, in milliseconds
    pub fn save_indicator_ms(&self) -> u32 {
        self.board.with_untracked(|b| b.config().save_indicator_ms)
    }
}
