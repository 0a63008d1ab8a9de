//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `notekeeper_core` linkage without a GUI host.
//! - Drive one deterministic add/delete/update session and print the titles.
//! - Write the session's store events to the rolling log under the temp dir.

use notekeeper_core::{
    init_logging, LogLevel, LoggingConfig, NoteDraft, NoteListModel, NoteStore,
};
use std::error::Error;

const LOG_DIR_NAME: &str = "notekeeper-logs";

fn main() -> Result<(), Box<dyn Error>> {
    let log_dir = std::env::temp_dir().join(LOG_DIR_NAME);
    init_logging(&LoggingConfig::new(LogLevel::for_build(), &log_dir))?;
    println!("notekeeper_core version={}", notekeeper_core::core_version());
    println!("log_dir={}", log_dir.display());

    let mut store = NoteStore::new();
    let list = NoteListModel::attach(&mut store);
    println!("initial titles={:?}", list.titles());

    store.add("A", "a");
    let second = store.add("B", "b");
    list.delete_rows(&mut store, [0])?;

    if let Some(note) = store.get(second) {
        let mut draft = NoteDraft::edit(note);
        draft.title = "B2".to_string();
        draft.content = "b2".to_string();
        draft.submit(&mut store)?;
    }

    println!("final titles={:?} renders={}", list.titles(), list.revision());
    Ok(())
}
