//! Note domain model.
//!
//! # Responsibility
//! - Define the titled text record owned by `NoteStore`.
//! - Generate identity and creation timestamp exactly once per note.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `id` and `created_at` are never modified after construction.
//! - Only `title` and `content` are mutable.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for one note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Titled free-text record with immutable identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    /// Display title shown in list rows.
    pub title: String,
    /// Free-text body.
    pub content: String,
    /// Unix epoch milliseconds.
    created_at: i64,
}

impl Note {
    /// Creates a new note with a generated ID, stamped with the current time.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_identity(Uuid::new_v4(), title, content, now_epoch_ms())
    }

    /// Creates a note with caller-provided identity and creation time.
    ///
    /// Used by hosts restoring a snapshot where identity already exists.
    pub fn with_identity(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            created_at,
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Creation timestamp in Unix epoch milliseconds.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Replaces the mutable fields in place.
    pub fn rewrite(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.title = title.into();
        self.content = content.into();
    }
}

/// Returns the current wall-clock time as Unix epoch milliseconds.
///
/// Clocks set before the epoch collapse to `0` instead of failing.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
