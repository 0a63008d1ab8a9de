//! Domain model for in-memory notes.
//!
//! # Responsibility
//! - Define canonical data structures used by the note store.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Deletion is a hard removal; there are no tombstones.

pub mod note;
