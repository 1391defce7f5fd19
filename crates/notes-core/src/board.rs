//! Note Board
//!
//! The whole widget state: visible cards in display order, open editor
//! sessions in overlay order, and the search query. Every mutating
//! gesture writes the full note list back through the repository.
//!
//! Per note: absent -> (add) -> unsaved empty -> (type) -> persisted ->
//! (type to empty | delete | close while empty) -> absent.

use std::collections::HashSet;

use log::{debug, info};

use crate::clock::Clock;
use crate::domain::{estimate_rows, matches_query, BoardConfig, BoardResult, Note, NoteId};
use crate::ids::{allocate_id, IdSource};
use crate::repository::{remove_by_id, upsert_front, NoteRepository};

/// A rendered note card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub note: Note,
    /// Whether the last write for this note stored it
    pub persisted: bool,
}

impl Card {
    pub fn id(&self) -> NoteId {
        self.note.id
    }
}

/// One open editor surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    pub id: NoteId,
    /// Distinct per opening; reopening a note yields a new session
    pub session: u64,
    /// Current editor text
    pub draft: String,
}

/// What a keystroke did to storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Note stored at the front of the list
    Saved,
    /// Text became empty; note removed from storage
    Removed,
    /// No card with that id
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Editor closed, card stays
    Kept,
    /// Editor closed while empty; card dropped too
    Abandoned,
    /// No editor open for that id
    NotOpen,
}

/// Board state over a note repository
#[derive(Debug)]
pub struct NoteBoard<R> {
    repo: R,
    config: BoardConfig,
    cards: Vec<Card>,
    editors: Vec<EditorSession>,
    query: String,
    /// Cards filtered out by the last search keystroke
    hidden: HashSet<NoteId>,
    next_session: u64,
}

impl<R: NoteRepository> NoteBoard<R> {
    /// Build the board from storage. An empty store gets one unsaved
    /// empty card so a new user has something to type into.
    pub fn load(
        repo: R,
        config: BoardConfig,
        ids: &mut dyn IdSource,
        clock: &dyn Clock,
    ) -> BoardResult<Self> {
        let stored = repo.load();
        info!("[BOARD] loaded {} notes", stored.len());

        let cards = stored
            .into_iter()
            .map(|note| Card { note, persisted: true })
            .collect();

        let mut board = Self {
            repo,
            config,
            cards,
            editors: Vec::new(),
            query: String::new(),
            hidden: HashSet::new(),
            next_session: 0,
        };

        if board.cards.is_empty() {
            let id = board.add_note(ids, clock)?;
            info!("[BOARD] no stored notes, started with empty note {}", id);
        }
        Ok(board)
    }

    /// Put a new empty card in front. Nothing is written until the
    /// first keystroke.
    pub fn add_note(&mut self, ids: &mut dyn IdSource, clock: &dyn Clock) -> BoardResult<NoteId> {
        let mut taken: HashSet<NoteId> = self.cards.iter().map(Card::id).collect();
        taken.extend(self.repo.load().into_iter().map(|n| n.id));

        let id = allocate_id(ids, &taken, self.config.id_bound)?;
        self.cards.insert(0, Card {
            note: Note::empty(id, clock.now_hhmm()),
            persisted: false,
        });
        debug!("[BOARD] added note {}", id);
        Ok(id)
    }

    /// Apply a search keystroke. Visibility is fixed here for the cards
    /// present now; cards added or edited later keep it until the next
    /// keystroke.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.hidden = self
            .cards
            .iter()
            .filter(|c| !matches_query(&c.note.content, &self.query))
            .map(Card::id)
            .collect();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Search filter for one card; unknown ids are not visible.
    pub fn is_visible(&self, id: NoteId) -> bool {
        self.card(id).is_some() && !self.hidden.contains(&id)
    }

    pub fn visible_ids(&self) -> Vec<NoteId> {
        self.cards
            .iter()
            .map(Card::id)
            .filter(|id| !self.hidden.contains(id))
            .collect()
    }

    /// Open a fresh editor for `id` at the front of the overlay,
    /// replacing any editor already open for it.
    pub fn open_editor(&mut self, id: NoteId) -> bool {
        let Some(content) = self.card(id).map(|c| c.note.content.clone()) else {
            return false;
        };

        self.editors.retain(|e| e.id != id);
        let session = self.next_session;
        self.next_session += 1;
        self.editors.insert(0, EditorSession { id, session, draft: content });
        debug!("[BOARD] opened editor for {} (session {})", id, session);
        true
    }

    /// Apply editor text to a note: restamp it, move its card to the
    /// front and write it through. Empty text deletes the stored record.
    pub fn edit(&mut self, id: NoteId, text: &str, clock: &dyn Clock) -> BoardResult<EditOutcome> {
        let Some(pos) = self.position(id) else {
            debug!("[BOARD] edit for missing note {}", id);
            return Ok(EditOutcome::Ignored);
        };

        let mut card = self.cards.remove(pos);
        card.note.updated_at = clock.now_hhmm();
        card.note.content = text.to_string();
        let note = card.note.clone();
        self.cards.insert(0, card);

        if let Some(editor) = self.editors.iter_mut().find(|e| e.id == id) {
            editor.draft = text.to_string();
        }

        let mut stored = self.repo.load();
        let outcome = if note.is_empty() {
            remove_by_id(&mut stored, id);
            EditOutcome::Removed
        } else {
            upsert_front(&mut stored, note);
            EditOutcome::Saved
        };
        let written = self.repo.save(&stored);

        // the card now shows text storage may not hold
        if let Some(card) = self.cards.first_mut() {
            card.persisted = written.is_ok() && outcome == EditOutcome::Saved;
        }
        written?;
        debug!("[BOARD] note {} {:?}", id, outcome);
        Ok(outcome)
    }

    /// Remove a note everywhere: card, editor and storage.
    pub fn delete(&mut self, id: NoteId) -> BoardResult<()> {
        self.cards.retain(|c| c.id() != id);
        self.editors.retain(|e| e.id != id);
        self.hidden.remove(&id);

        let mut stored = self.repo.load();
        remove_by_id(&mut stored, id);
        self.repo.save(&stored)?;
        debug!("[BOARD] deleted note {}", id);
        Ok(())
    }

    /// Close the editor for `id`. Closing an empty editor abandons the
    /// note's card as well. Never writes.
    pub fn close_editor(&mut self, id: NoteId) -> CloseOutcome {
        let Some(pos) = self.editors.iter().position(|e| e.id == id) else {
            return CloseOutcome::NotOpen;
        };

        let editor = self.editors.remove(pos);
        if editor.draft.is_empty() {
            self.cards.retain(|c| c.id() != id);
            self.hidden.remove(&id);
            debug!("[BOARD] closed empty editor, dropped note {}", id);
            CloseOutcome::Abandoned
        } else {
            CloseOutcome::Kept
        }
    }

    /// Estimated textarea rows for a card's body
    pub fn rows(&self, id: NoteId) -> usize {
        let len = self.card(id).map(|c| c.note.content.chars().count()).unwrap_or(0);
        estimate_rows(len, self.config.row_width)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: NoteId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == id)
    }

    pub fn editors(&self) -> &[EditorSession] {
        &self.editors
    }

    pub fn editor(&self, id: NoteId) -> Option<&EditorSession> {
        self.editors.iter().find(|e| e.id == id)
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }
}
