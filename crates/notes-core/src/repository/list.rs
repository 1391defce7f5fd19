//! Note List Editing
//!
//! The stored list keeps at most one record per id. Both helpers remove
//! every matching record, so a list that somehow holds duplicates is
//! repaired by the next write.

use crate::domain::{Note, NoteId};

/// Replace any record with `note.id` by `note`, placed first.
pub fn upsert_front(notes: &mut Vec<Note>, note: Note) {
    remove_by_id(notes, note.id);
    notes.insert(0, note);
}

/// Drop every record with `id`. Returns whether anything was removed.
pub fn remove_by_id(notes: &mut Vec<Note>, id: NoteId) -> bool {
    let before = notes.len();
    notes.retain(|n| n.id != id);
    notes.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: u32, content: &str) -> Note {
        Note::new(NoteId(id), "10:00", content)
    }

    #[test]
    fn test_upsert_moves_to_front() {
        let mut notes = vec![note(1, "a"), note(2, "b"), note(3, "c")];
        upsert_front(&mut notes, note(3, "c2"));

        let ids: Vec<u32> = notes.iter().map(|n| n.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(notes[0].content, "c2");
    }

    #[test]
    fn test_upsert_collapses_duplicates() {
        let mut notes = vec![note(7, "x"), note(1, "a"), note(7, "y")];
        upsert_front(&mut notes, note(7, "z"));

        assert_eq!(notes.iter().filter(|n| n.id == NoteId(7)).count(), 1);
        assert_eq!(notes.len(), 2);
    }

    #[test]
    fn test_remove_missing_id() {
        let mut notes = vec![note(1, "a")];
        assert!(!remove_by_id(&mut notes, NoteId(9)));
        assert_eq!(notes.len(), 1);
        assert!(remove_by_id(&mut notes, NoteId(1)));
        assert!(notes.is_empty());
    }
}
