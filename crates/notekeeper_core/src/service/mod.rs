//! Headless presentation services.
//!
//! # Responsibility
//! - Model the list and detail screens without any GUI toolkit.
//! - Keep presentation-side validation out of the store.

pub mod note_editor;
pub mod note_list;
