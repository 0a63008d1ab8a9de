//! Thread-safe handle over one `NoteStore`.
//!
//! # Invariants
//! - Every operation takes the lock exactly once and never holds it across
//!   calls.
//! - Subscriber callbacks run while the lock is held; they must not call back
//!   into the same handle.

use crate::model::note::{Note, NoteId};
use crate::store::note_store::{NoteStore, StoreResult};
use crate::store::observer::{NoteChange, SubscriptionId};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable, lock-guarded store handle for multi-threaded hosts.
#[derive(Debug, Clone, Default)]
pub struct SharedNoteStore {
    inner: Arc<Mutex<NoteStore>>,
}

impl SharedNoteStore {
    /// Creates a shared store holding the seed note.
    pub fn new() -> Self {
        Self::from_store(NoteStore::new())
    }

    pub fn from_store(store: NoteStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn add(&self, title: impl Into<String>, content: impl Into<String>) -> NoteId {
        self.lock().add(title, content)
    }

    pub fn update(
        &self,
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> bool {
        self.lock().update(id, title, content)
    }

    pub fn delete<I>(&self, positions: I) -> StoreResult<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        self.lock().delete(positions)
    }

    pub fn snapshot(&self) -> Vec<Note> {
        self.lock().snapshot()
    }

    pub fn get(&self, id: NoteId) -> Option<Note> {
        self.lock().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: FnMut(&NoteChange<'_>) + Send + 'static,
    {
        self.lock().subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.lock().unsubscribe(id)
    }

    /// Runs `f` with exclusive access, for multi-step reads or mutations that
    /// must observe one consistent state.
    pub fn with_store<T>(&self, f: impl FnOnce(&mut NoteStore) -> T) -> T {
        f(&mut *self.lock())
    }

    // A panicking subscriber can poison the lock, but store mutations finish
    // before subscribers run, so the inner state is still consistent.
    fn lock(&self) -> MutexGuard<'_, NoteStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
