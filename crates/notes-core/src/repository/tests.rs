//! Repository Integration Tests
//!
//! JsonSlot over the in-memory store.

#[cfg(test)]
mod tests {
    use crate::domain::{Note, NoteId, StoreError};
    use crate::repository::{upsert_front, remove_by_id, JsonSlot, KeyValueStore, MemoryStore, NoteRepository};

    const KEY: &str = "sticky-notes-data";

    fn setup_repo() -> (JsonSlot<MemoryStore>, MemoryStore) {
        let store = MemoryStore::new();
        (JsonSlot::new(store.clone(), KEY), store)
    }

    fn sample_notes() -> Vec<Note> {
        vec![
            Note::new(NoteId(17), "09:15", "buy milk"),
            Note::new(NoteId(4), "23:59", "call \"Sam\"\nline two"),
            Note::new(NoteId(99_999), "00:00", "ünïcödé ✓"),
        ]
    }

    #[test]
    fn test_round_trip_keeps_order() {
        let (repo, _) = setup_repo();
        let notes = sample_notes();

        repo.save(&notes).expect("Save failed");

        assert_eq!(repo.load(), notes);
    }

    #[test]
    fn test_missing_slot_loads_empty() {
        let (repo, _) = setup_repo();
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_garbage_loads_empty() {
        let store = MemoryStore::with_slot(KEY, r#"{"id": 1}"#);
        let repo = JsonSlot::new(store, KEY);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_stored_layout() {
        let (repo, store) = setup_repo();
        repo.save(&[Note::new(NoteId(3), "12:34", "x")]).unwrap();

        let raw = store.raw(KEY).expect("slot written");
        assert_eq!(raw, r#"[{"id":3,"updatedAt":"12:34","content":"x"}]"#);
    }

    #[test]
    fn test_reads_externally_written_slot() {
        let store = MemoryStore::with_slot(
            KEY,
            r#"[{"id":5,"updatedAt":"07:00","content":"from another tab"}]"#,
        );
        let repo = JsonSlot::new(store, KEY);
        let notes = repo.load();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, NoteId(5));
        assert_eq!(notes[0].content, "from another tab");
    }

    #[test]
    fn test_update_never_duplicates() {
        let (repo, _) = setup_repo();
        repo.save(&sample_notes()).unwrap();

        for i in 0..5 {
            let mut stored = repo.load();
            upsert_front(&mut stored, Note::new(NoteId(4), "10:00", format!("rev {}", i)));
            repo.save(&stored).unwrap();
        }

        let stored = repo.load();
        assert_eq!(stored.iter().filter(|n| n.id == NoteId(4)).count(), 1);
        assert_eq!(stored[0].content, "rev 4");
        assert_eq!(stored.len(), 3);
    }

    #[test]
    fn test_delete_removes_record() {
        let (repo, _) = setup_repo();
        repo.save(&sample_notes()).unwrap();

        let mut stored = repo.load();
        remove_by_id(&mut stored, NoteId(17));
        repo.save(&stored).unwrap();

        assert!(repo.load().iter().all(|n| n.id != NoteId(17)));
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let (repo, store) = setup_repo();
        repo.save(&sample_notes()).unwrap();
        store.set_fail_writes(true);

        let err = repo.save(&[]).expect_err("write should fail");
        assert!(matches!(err, StoreError::Backend(_)));
        assert_eq!(repo.load().len(), 3);
    }

    #[test]
    fn test_slots_are_independent() {
        let store = MemoryStore::new();
        let a = JsonSlot::new(store.clone(), "a");
        let b = JsonSlot::new(store.clone(), "b");
        a.save(&sample_notes()).unwrap();

        assert!(b.load().is_empty());
        assert!(store.get("a").unwrap().is_some());
    }
}
