//! Core domain logic for NoteKeeper.
//! This crate is the single source of truth for note invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{init_logging, logging_status, LogLevel, LoggingConfig, LoggingError};
pub use model::note::{Note, NoteId};
pub use service::note_editor::{EditorError, Field, NoteDraft, SubmitOutcome};
pub use service::note_list::{NoteListItem, NoteListModel};
pub use store::note_store::{
    NoteStore, NoteStoreError, StoreResult, SEED_NOTE_CONTENT, SEED_NOTE_TITLE,
};
pub use store::observer::{ChangeKind, NoteChange, SubscriptionId};
pub use store::shared::SharedNoteStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
