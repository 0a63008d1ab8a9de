//! List projection that re-renders on every store change.
//!
//! # Responsibility
//! - Mirror the store sequence as title rows, in store order.
//! - Refresh from the full post-mutation sequence on each notification.
//! - Resolve delete gestures on rendered rows to the notes they show.
//!
//! # Invariants
//! - A dropped model stops being rendered to after the next store mutation.

use crate::model::note::{Note, NoteId};
use crate::store::note_store::{NoteStore, NoteStoreError, StoreResult};
use crate::store::observer::SubscriptionId;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListItem {
    pub id: NoteId,
    pub title: String,
}

impl From<&Note> for NoteListItem {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id(),
            title: note.title.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct Rendered {
    rows: Vec<NoteListItem>,
    revision: u64,
}

impl Rendered {
    fn render(&mut self, notes: &[Note]) {
        self.rows = notes.iter().map(NoteListItem::from).collect();
        self.revision += 1;
    }
}

/// Title list kept in sync with one `NoteStore` through a subscription.
#[derive(Debug)]
pub struct NoteListModel {
    rendered: Arc<Mutex<Rendered>>,
    subscription: SubscriptionId,
}

impl NoteListModel {
    /// Renders the current sequence and subscribes for future changes.
    pub fn attach(store: &mut NoteStore) -> Self {
        let rendered = Arc::new(Mutex::new(Rendered::default()));
        lock(&rendered).render(store.notes());

        let subscription = store.subscribe_weak(&rendered, |rendered, change| {
            lock(rendered).render(change.notes);
        });
        Self {
            rendered,
            subscription,
        }
    }

    /// Current rows in display order.
    pub fn rows(&self) -> Vec<NoteListItem> {
        lock(&self.rendered).rows.clone()
    }

    pub fn titles(&self) -> Vec<String> {
        lock(&self.rendered)
            .rows
            .iter()
            .map(|row| row.title.clone())
            .collect()
    }

    /// Number of renders so far, including the initial one.
    pub fn revision(&self) -> u64 {
        lock(&self.rendered).revision
    }

    /// Swipe-to-delete on the given rendered row positions.
    ///
    /// Rows are resolved to notes by id, so a detached, stale list still
    /// deletes what it shows. Rows whose note is already gone are skipped;
    /// duplicate positions count once.
    ///
    /// # Errors
    /// - `IndexOutOfRange` for the smallest position past the rendered rows.
    ///   Nothing is deleted.
    pub fn delete_rows<I>(&self, store: &mut NoteStore, positions: I) -> StoreResult<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        let targets = {
            let rendered = lock(&self.rendered);
            let len = rendered.rows.len();
            positions
                .into_iter()
                .collect::<BTreeSet<usize>>()
                .into_iter()
                .map(|index| {
                    rendered
                        .rows
                        .get(index)
                        .map(|row| row.id)
                        .ok_or(NoteStoreError::IndexOutOfRange { index, len })
                })
                .collect::<StoreResult<Vec<NoteId>>>()?
        };

        let store_positions = targets
            .into_iter()
            .filter_map(|id| store.position(id))
            .collect::<Vec<_>>();
        store.delete(store_positions)
    }

    /// Stops listening to `store`. Rows keep their last rendered state.
    pub fn detach(&self, store: &mut NoteStore) -> bool {
        store.unsubscribe(self.subscription)
    }
}

fn lock(rendered: &Mutex<Rendered>) -> MutexGuard<'_, Rendered> {
    rendered.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::NoteListModel;
    use crate::store::note_store::{NoteStore, NoteStoreError, SEED_NOTE_TITLE};

    #[test]
    fn attach_renders_the_current_sequence() {
        let mut store = NoteStore::new();
        let list = NoteListModel::attach(&mut store);

        assert_eq!(list.titles(), vec![SEED_NOTE_TITLE.to_string()]);
        assert_eq!(list.revision(), 1);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn detach_stops_rerendering() {
        let mut store = NoteStore::new();
        let list = NoteListModel::attach(&mut store);
        store.add("a", "1");
        assert_eq!(list.revision(), 2);

        assert!(list.detach(&mut store));
        assert!(!list.detach(&mut store));

        store.add("b", "2");
        assert_eq!(list.revision(), 2);
        assert_eq!(list.titles(), vec![SEED_NOTE_TITLE.to_string(), "a".to_string()]);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn dropped_models_are_unsubscribed_on_next_mutation() {
        let mut store = NoteStore::new();
        for _ in 0..100 {
            drop(NoteListModel::attach(&mut store));
        }
        let live = NoteListModel::attach(&mut store);
        assert_eq!(store.subscriber_count(), 101);

        store.add("a", "1");

        assert_eq!(store.subscriber_count(), 1);
        assert_eq!(live.revision(), 2);
    }

    #[test]
    fn stale_rows_delete_the_notes_they_show() {
        let mut store = NoteStore::new();
        store.add("a", "1");
        let list = NoteListModel::attach(&mut store);
        list.detach(&mut store);

        store.add("b", "2");
        store.delete([0]).unwrap();
        assert_eq!(
            list.titles(),
            vec![SEED_NOTE_TITLE.to_string(), "a".to_string()]
        );

        // seed row is gone from the store; "a" moved to position 0
        assert_eq!(list.delete_rows(&mut store, [0, 1]).unwrap(), 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.notes()[0].title, "b");
    }

    #[test]
    fn delete_rows_checks_positions_against_rendered_rows() {
        let mut store = NoteStore::new();
        let list = NoteListModel::attach(&mut store);

        let err = list.delete_rows(&mut store, [0, 1]).unwrap_err();
        assert_eq!(err, NoteStoreError::IndexOutOfRange { index: 1, len: 1 });
        assert_eq!(store.len(), 1);
        assert_eq!(list.revision(), 1);
    }
}
