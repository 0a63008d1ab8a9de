//! In-memory note collection and its CRUD operations.
//!
//! # Responsibility
//! - Own the authoritative, insertion-ordered sequence of notes.
//! - Be the only place that mutates that sequence.
//! - Notify subscribers after every applied mutation.
//!
//! # Invariants
//! - Every note in the store has a unique `id`.
//! - Sequence order is insertion order; nothing sorts it.
//! - `update` on an unknown id is a silent no-op.
//! - `delete` validates every position before removing any note.
//! - Failed or empty operations never notify subscribers.

use crate::model::note::{Note, NoteId};
use crate::store::observer::{ChangeKind, NoteChange, ObserverRegistry, SubscriptionId};
use log::{debug, warn};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Title of the note every fresh store starts with.
pub const SEED_NOTE_TITLE: &str = "Note title";
/// Body of the note every fresh store starts with.
pub const SEED_NOTE_CONTENT: &str = "Note text";

pub type StoreResult<T> = Result<T, NoteStoreError>;

/// Errors surfaced by store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteStoreError {
    /// A delete position is outside the current sequence bounds.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for NoteStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "note position {index} is out of range for {len} note(s)")
            }
        }
    }
}

impl Error for NoteStoreError {}

/// Owner of the in-memory note sequence.
#[derive(Debug)]
pub struct NoteStore {
    notes: Vec<Note>,
    observers: ObserverRegistry,
}

impl NoteStore {
    /// Creates a store holding exactly one seeded example note.
    pub fn new() -> Self {
        let mut store = Self::empty();
        store
            .notes
            .push(Note::new(SEED_NOTE_TITLE, SEED_NOTE_CONTENT));
        debug!("event=store_init module=store status=ok count=1");
        store
    }

    /// Creates a store with no notes.
    pub fn empty() -> Self {
        Self {
            notes: Vec::new(),
            observers: ObserverRegistry::new(),
        }
    }

    /// Appends a new note and returns its generated id.
    ///
    /// Empty title or content is accepted here; the editor form is where
    /// emptiness is rejected.
    pub fn add(&mut self, title: impl Into<String>, content: impl Into<String>) -> NoteId {
        let note = Note::new(title, content);
        let id = note.id();
        self.notes.push(note);
        debug!(
            "event=note_add module=store status=ok note_id={} count={}",
            id,
            self.notes.len()
        );
        self.publish(ChangeKind::Added(id));
        id
    }

    /// Replaces title and content of the note with `id`, keeping its position.
    ///
    /// Returns `true` when a note was rewritten. An unknown id leaves the
    /// store untouched and notifies nobody.
    pub fn update(
        &mut self,
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> bool {
        let Some(note) = self.notes.iter_mut().find(|note| note.id() == id) else {
            debug!("event=note_update module=store status=miss note_id={id}");
            return false;
        };

        note.rewrite(title, content);
        debug!("event=note_update module=store status=ok note_id={id}");
        self.publish(ChangeKind::Updated(id));
        true
    }

    /// Removes the notes at the given zero-based positions in one step.
    ///
    /// Positions refer to the sequence before any removal; duplicates count
    /// once. Returns how many notes were removed.
    ///
    /// # Errors
    /// - `IndexOutOfRange` for the smallest position `>= len()`. The store is
    ///   left unchanged.
    pub fn delete<I>(&mut self, positions: I) -> StoreResult<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        let positions: BTreeSet<usize> = positions.into_iter().collect();
        let len = self.notes.len();
        if let Some(&index) = positions.iter().find(|&&index| index >= len) {
            warn!(
                "event=note_delete module=store status=error reason=index_out_of_range index={index} len={len}"
            );
            return Err(NoteStoreError::IndexOutOfRange { index, len });
        }
        if positions.is_empty() {
            return Ok(0);
        }

        let removed_ids = positions
            .iter()
            .map(|&index| self.notes[index].id())
            .collect::<Vec<_>>();
        for &index in positions.iter().rev() {
            self.notes.remove(index);
        }

        debug!(
            "event=note_delete module=store status=ok removed={} count={}",
            removed_ids.len(),
            self.notes.len()
        );
        let removed = removed_ids.len();
        self.publish(ChangeKind::Deleted(removed_ids));
        Ok(removed)
    }

    /// Current notes in display order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Owned copy of the current sequence.
    pub fn snapshot(&self) -> Vec<Note> {
        self.notes.clone()
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id() == id)
    }

    /// Zero-based display position of the note with `id`.
    pub fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id() == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Registers a callback fired synchronously after every mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&NoteChange<'_>) + Send + 'static,
    {
        let id = self.observers.subscribe(callback);
        debug!("event=subscribe module=store status=ok subscription={id}");
        id
    }

    /// Registers a callback that lives only as long as `target`.
    ///
    /// After the last `Arc` to `target` drops, the next mutation removes the
    /// callback without invoking it.
    pub fn subscribe_weak<T, F>(&mut self, target: &Arc<T>, callback: F) -> SubscriptionId
    where
        T: Send + Sync + 'static,
        F: FnMut(&T, &NoteChange<'_>) + Send + 'static,
    {
        let id = self.observers.subscribe_weak(target, callback);
        debug!("event=subscribe module=store status=ok subscription={id} weak=true");
        id
    }

    /// Removes a callback. Returns `false` for unknown handles.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.observers.unsubscribe(id);
        debug!(
            "event=unsubscribe module=store status={} subscription={id}",
            if removed { "ok" } else { "miss" }
        );
        removed
    }

    /// Registered callbacks. Weak callbacks whose target already dropped are
    /// counted until the next mutation prunes them.
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    fn publish(&mut self, kind: ChangeKind) {
        let pruned = self.observers.notify(&kind, &self.notes);
        if pruned > 0 {
            debug!(
                "event=subscriber_prune module=store status=ok pruned={pruned} remaining={}",
                self.observers.len()
            );
        }
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteStore, NoteStoreError, SEED_NOTE_CONTENT, SEED_NOTE_TITLE};

    #[test]
    fn new_store_holds_only_the_seed_note() {
        let store = NoteStore::new();
        assert_eq!(store.len(), 1);
        assert_eq!(store.notes()[0].title, SEED_NOTE_TITLE);
        assert_eq!(store.notes()[0].content, SEED_NOTE_CONTENT);
    }

    #[test]
    fn empty_store_has_no_notes() {
        let store = NoteStore::empty();
        assert!(store.is_empty());
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn delete_with_empty_set_is_a_no_op() {
        let mut store = NoteStore::new();
        assert_eq!(store.delete(Vec::new()).expect("empty delete should succeed"), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_on_empty_store_rejects_position_zero() {
        let mut store = NoteStore::empty();
        let err = store.delete([0]).expect_err("nothing to delete");
        assert_eq!(err, NoteStoreError::IndexOutOfRange { index: 0, len: 0 });
    }

    #[test]
    fn delete_reports_smallest_offending_position() {
        let mut store = NoteStore::new();
        let err = store.delete([9, 0, 4]).expect_err("positions 4 and 9 are invalid");
        assert_eq!(err, NoteStoreError::IndexOutOfRange { index: 4, len: 1 });
        assert!(err.to_string().contains("out of range"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_positions_remove_one_note() {
        let mut store = NoteStore::new();
        store.add("a", "1");
        let removed = store.delete([1, 1, 1]).expect("position 1 exists");
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.notes()[0].title, SEED_NOTE_TITLE);
    }

    #[test]
    fn lookups_follow_current_positions() {
        let mut store = NoteStore::empty();
        let first = store.add("a", "1");
        let second = store.add("b", "2");
        assert_eq!(store.position(second), Some(1));

        store.delete([0]).expect("position 0 exists");
        assert!(store.get(first).is_none());
        assert_eq!(store.position(second), Some(0));
    }
}
