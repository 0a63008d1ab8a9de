//! Note storage and change notification.
//!
//! # Responsibility
//! - Own the in-memory note sequence and its four operations.
//! - Publish every applied mutation to registered subscribers.
//!
//! # Invariants
//! - State lives only for the process lifetime; nothing is persisted.
//! - Only `NoteStore` mutates the sequence.

pub mod note_store;
pub mod observer;
pub mod shared;
