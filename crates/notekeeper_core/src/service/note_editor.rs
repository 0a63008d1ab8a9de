//! Detail form state for creating and editing one note.
//!
//! # Responsibility
//! - Hold the title/content a user is typing before it reaches the store.
//! - Own the submit-enabled rule (both fields non-empty).
//! - Route a submit to `NoteStore::add` or `NoteStore::update`.
//!
//! # Invariants
//! - A draft that cannot be submitted never touches the store.
//! - Emptiness is exact: whitespace-only fields count as filled.

use crate::model::note::{Note, NoteId};
use crate::store::note_store::NoteStore;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Editable form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Content => f.write_str("content"),
        }
    }
}

/// Submit rejection raised by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorError {
    /// The named field is empty; submit is disabled.
    EmptyField(Field),
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "note {field} must not be empty"),
        }
    }
}

impl Error for EditorError {}

/// Result of a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new note was appended.
    Created(NoteId),
    /// The target note was rewritten in place.
    Updated(NoteId),
    /// The target note no longer exists; nothing changed.
    Stale(NoteId),
}

/// In-progress form contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    target: Option<NoteId>,
}

impl NoteDraft {
    /// Blank form behind the "new note" affordance.
    pub fn new_note() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            target: None,
        }
    }

    /// Form pre-filled from an existing note.
    pub fn edit(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            target: Some(note.id()),
        }
    }

    /// Note this draft will update, or `None` for a new note.
    pub fn target(&self) -> Option<NoteId> {
        self.target
    }

    /// First empty field, if any.
    pub fn missing_field(&self) -> Option<Field> {
        if self.title.is_empty() {
            Some(Field::Title)
        } else if self.content.is_empty() {
            Some(Field::Content)
        } else {
            None
        }
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Applies the draft to `store`.
    ///
    /// # Errors
    /// - `EmptyField` when either field is empty. The store is not touched.
    pub fn submit(&self, store: &mut NoteStore) -> Result<SubmitOutcome, EditorError> {
        if let Some(field) = self.missing_field() {
            debug!("event=draft_submit module=editor status=rejected field={field}");
            return Err(EditorError::EmptyField(field));
        }

        let outcome = match self.target {
            None => SubmitOutcome::Created(store.add(self.title.as_str(), self.content.as_str())),
            Some(id) => {
                if store.update(id, self.title.as_str(), self.content.as_str()) {
                    SubmitOutcome::Updated(id)
                } else {
                    SubmitOutcome::Stale(id)
                }
            }
        };
        debug!("event=draft_submit module=editor status=ok outcome={outcome:?}");
        Ok(outcome)
    }
}

impl Default for NoteDraft {
    fn default() -> Self {
        Self::new_note()
    }
}

#[cfg(test)]
mod tests {
    use super::{EditorError, Field, NoteDraft, SubmitOutcome};
    use crate::store::note_store::NoteStore;

    #[test]
    fn blank_draft_cannot_submit() {
        let draft = NoteDraft::new_note();
        assert!(!draft.can_submit());
        assert_eq!(draft.missing_field(), Some(Field::Title));
        assert!(draft.target().is_none());
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let draft = NoteDraft {
            title: " ".to_string(),
            content: "\n".to_string(),
            ..NoteDraft::new_note()
        };
        assert!(draft.can_submit());
    }

    #[test]
    fn empty_content_is_reported_and_store_is_untouched() {
        let mut store = NoteStore::new();
        let mut draft = NoteDraft::new_note();
        draft.title = "only title".to_string();

        let err = draft.submit(&mut store).expect_err("content is empty");
        assert_eq!(err, EditorError::EmptyField(Field::Content));
        assert_eq!(err.to_string(), "note content must not be empty");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn edit_draft_is_prefilled_from_the_note() {
        let store = NoteStore::new();
        let seed = &store.notes()[0];
        let draft = NoteDraft::edit(seed);

        assert_eq!(draft.title, seed.title);
        assert_eq!(draft.content, seed.content);
        assert_eq!(draft.target(), Some(seed.id()));
    }

    #[test]
    fn stale_target_reports_without_changing_the_store() {
        let mut store = NoteStore::new();
        let id = store.add("gone", "soon");
        let draft = NoteDraft::edit(store.get(id).expect("note was just added"));
        store.delete([1]).expect("position 1 exists");

        let before = store.snapshot();
        assert_eq!(draft.submit(&mut store), Ok(SubmitOutcome::Stale(id)));
        assert_eq!(store.snapshot(), before);
    }
}
