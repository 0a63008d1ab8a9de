use notekeeper_core::{
    EditorError, Field, NoteDraft, NoteListModel, NoteStore, NoteStoreError, SubmitOutcome,
    SEED_NOTE_TITLE,
};

#[test]
fn new_note_form_creates_a_note_and_list_rerenders() {
    let mut store = NoteStore::new();
    let list = NoteListModel::attach(&mut store);

    let mut draft = NoteDraft::new_note();
    assert!(!draft.can_submit());
    draft.title = "Shopping".to_string();
    draft.content = "bread".to_string();

    let SubmitOutcome::Created(id) = draft.submit(&mut store).unwrap() else {
        panic!("new-note draft should create");
    };

    let rows = list.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].id, id);
    assert_eq!(rows[1].title, "Shopping");
    assert_eq!(list.revision(), 2);
}

#[test]
fn edit_form_updates_in_place() {
    let mut store = NoteStore::new();
    let list = NoteListModel::attach(&mut store);
    store.add("second", "body");

    let mut draft = NoteDraft::edit(&store.notes()[0]);
    draft.title = "renamed seed".to_string();
    let outcome = draft.submit(&mut store).unwrap();

    assert_eq!(outcome, SubmitOutcome::Updated(store.notes()[0].id()));
    assert_eq!(
        list.titles(),
        vec!["renamed seed".to_string(), "second".to_string()]
    );
}

#[test]
fn emptied_field_disables_submit_and_nothing_rerenders() {
    let mut store = NoteStore::new();
    let list = NoteListModel::attach(&mut store);

    let mut draft = NoteDraft::edit(&store.notes()[0]);
    draft.title.clear();

    assert!(!draft.can_submit());
    assert_eq!(
        draft.submit(&mut store),
        Err(EditorError::EmptyField(Field::Title))
    );
    assert_eq!(list.revision(), 1);
    assert_eq!(list.titles(), vec![SEED_NOTE_TITLE.to_string()]);
}

#[test]
fn delete_gesture_removes_rows_and_rejects_stale_positions() {
    let mut store = NoteStore::new();
    let list = NoteListModel::attach(&mut store);
    store.add("a", "1");
    store.add("b", "2");

    assert_eq!(list.delete_rows(&mut store, [0, 2]).unwrap(), 2);
    assert_eq!(list.titles(), vec!["a".to_string()]);

    let err = list.delete_rows(&mut store, [1]).unwrap_err();
    assert_eq!(err, NoteStoreError::IndexOutOfRange { index: 1, len: 1 });
    assert_eq!(list.titles(), vec!["a".to_string()]);
}

#[test]
fn two_lists_observe_the_same_store() {
    let mut store = NoteStore::new();
    let left = NoteListModel::attach(&mut store);
    let right = NoteListModel::attach(&mut store);

    store.add("shared", "body");

    assert_eq!(left.rows(), right.rows());
    assert_eq!(left.revision(), 2);
    assert_eq!(right.revision(), 2);
}
