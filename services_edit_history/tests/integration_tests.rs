//! Integration tests for the edit history service
//!
//! These tests validate complete command/undo workflows against a session,
//! encoding the observed editor behavior (cut replaces the selection with
//! the clipboard content, exactly like paste).

use core_types::EditorId;
use editor_core::Position;
use services_edit_history::{
    Command, CommandKind, DispatchError, EditorRegistry, EditorSession, UiAction,
};

fn session_with(content: &str, cursor: Position, width: usize) -> (EditorSession, EditorId) {
    let mut session = EditorSession::new();
    let id = session.open_editor(content);
    let editor = session.editor_mut(id).unwrap();
    editor.set_cursor(cursor);
    editor.set_selection_width(width);
    (session, id)
}

#[test]
fn test_copy_fills_clipboard_without_recording() {
    let (mut session, _) = session_with("hello world", Position::new(0, 6), 5);

    let changed = session.trigger_copy().unwrap();

    assert!(!changed);
    assert_eq!(session.clipboard().content(), "world");
    assert!(session.history().is_empty());
}

#[test]
fn test_repeated_copies_never_grow_history() {
    let (mut session, _) = session_with("hello world", Position::new(0, 0), 5);

    for _ in 0..10 {
        session.trigger_copy().unwrap();
    }
    assert_eq!(session.history().len(), 0);
}

#[test]
fn test_cut_undo_restores_text_cursor_and_selection() {
    let (mut session, id) = session_with("hello world", Position::new(0, 6), 5);
    session.clipboard_mut().set_content("X");

    assert!(session.trigger_cut().unwrap());
    assert_eq!(session.editor(id).unwrap().text(), "hello X");
    assert_eq!(session.history().len(), 1);

    assert!(!session.undo().unwrap());
    let editor = session.editor(id).unwrap();
    assert_eq!(editor.text(), "hello world");
    assert_eq!(editor.cursor(), Position::new(0, 6));
    assert_eq!(editor.selection_width(), 5);
    assert!(session.history().is_empty());
}

#[test]
fn test_round_trip_copy_then_cut() {
    // Start with "hello world" and "world" selected. Copy fills the
    // clipboard; cut then replaces the selection with that same clipboard
    // content, so the text is unchanged, yet the cut is recorded and
    // undoable.
    let (mut session, id) = session_with("hello world", Position::new(0, 6), 5);

    session.trigger_copy().unwrap();
    assert_eq!(session.clipboard().content(), "world");

    assert!(session.trigger_cut().unwrap());
    assert_eq!(session.editor(id).unwrap().text(), "hello world");
    assert_eq!(session.history().len(), 1);

    session.undo().unwrap();
    assert_eq!(session.editor(id).unwrap().text(), "hello world");
    assert!(session.history().is_empty());
}

#[test]
fn test_undo_restores_in_exact_reverse_order() {
    let (mut session, id) = session_with("hello world", Position::new(0, 0), 5);

    // Cut #1: "hello" -> "AA"
    session.clipboard_mut().set_content("AA");
    session.trigger_cut().unwrap();
    assert_eq!(session.editor(id).unwrap().text(), "AA world");

    // Paste: "AA" -> "BBB" (the selection now covers the inserted text)
    session.clipboard_mut().set_content("BBB");
    session.trigger_paste().unwrap();
    assert_eq!(session.editor(id).unwrap().text(), "BBB world");

    // Cut #2: "BBB" -> "C"
    session.clipboard_mut().set_content("C");
    session.trigger_cut().unwrap();
    assert_eq!(session.editor(id).unwrap().text(), "C world");
    assert_eq!(session.history().len(), 3);

    // Undo #1 restores the state before cut #2.
    session.undo().unwrap();
    assert_eq!(session.editor(id).unwrap().text(), "BBB world");
    assert_eq!(session.editor(id).unwrap().selection_width(), 3);

    // Undo #2 restores the state before the paste.
    session.undo().unwrap();
    assert_eq!(session.editor(id).unwrap().text(), "AA world");
    assert_eq!(session.editor(id).unwrap().selection_width(), 2);

    // Undo #3 restores the state before cut #1.
    session.undo().unwrap();
    let editor = session.editor(id).unwrap();
    assert_eq!(editor.text(), "hello world");
    assert_eq!(editor.cursor(), Position::new(0, 0));
    assert_eq!(editor.selection_width(), 5);
    assert!(session.history().is_empty());
}

#[test]
fn test_undo_on_empty_history_is_idempotent() {
    let (mut session, id) = session_with("hello world", Position::new(0, 6), 5);

    for _ in 0..5 {
        assert!(!session.undo().unwrap());
        let editor = session.editor(id).unwrap();
        assert_eq!(editor.text(), "hello world");
        assert_eq!(editor.cursor(), Position::new(0, 6));
        assert_eq!(editor.selection_width(), 5);
    }
}

#[test]
fn test_history_never_contains_copy_or_undo() {
    let (mut session, _) = session_with("hello world", Position::new(0, 6), 5);

    session.trigger_copy().unwrap();
    session.trigger_cut().unwrap();
    session.trigger_paste().unwrap();
    session.trigger_copy().unwrap();
    session.undo().unwrap();

    for kind in session.history().kinds() {
        assert!(matches!(kind, CommandKind::Cut | CommandKind::Paste));
    }
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_empty_clipboard_cut_proceeds_and_is_undoable() {
    let (mut session, id) = session_with("hello world", Position::new(0, 5), 6);
    assert!(session.clipboard().is_empty());

    assert!(session.trigger_cut().unwrap());
    assert_eq!(session.editor(id).unwrap().text(), "hello");

    session.undo().unwrap();
    assert_eq!(session.editor(id).unwrap().text(), "hello world");
}

#[test]
fn test_undo_before_execute_is_a_precondition_violation() {
    let mut registry = EditorRegistry::new();
    let id = registry.open("hello");

    assert_eq!(
        Command::cut(id).undo(&mut registry),
        Err(DispatchError::MissingBackup(CommandKind::Cut))
    );
    assert_eq!(
        Command::paste(id).undo(&mut registry),
        Err(DispatchError::MissingBackup(CommandKind::Paste))
    );
    assert_eq!(
        Command::copy(id).undo(&mut registry),
        Err(DispatchError::NotUndoable(CommandKind::Copy))
    );
}

#[test]
fn test_command_bound_to_foreign_session_is_rejected() {
    let (mut session, _) = session_with("hello", Position::new(0, 0), 5);

    let mut other = EditorSession::new();
    let foreign = other.open_editor("elsewhere");

    assert_eq!(
        session.execute_command(Command::copy(foreign)),
        Err(DispatchError::UnknownEditor(foreign))
    );
    assert_eq!(
        session.execute_command(Command::cut(foreign)),
        Err(DispatchError::UnknownEditor(foreign))
    );
}

#[test]
fn test_sessions_are_independent() {
    let (mut session_a, id_a) = session_with("alpha text", Position::new(0, 0), 5);
    let (mut session_b, id_b) = session_with("beta text", Position::new(0, 0), 4);

    session_a.clipboard_mut().set_content("A");
    session_b.clipboard_mut().set_content("B");

    session_a.trigger_cut().unwrap();
    session_b.trigger_cut().unwrap();
    assert_eq!(session_a.editor(id_a).unwrap().text(), "A text");
    assert_eq!(session_b.editor(id_b).unwrap().text(), "B text");

    session_a.undo().unwrap();
    assert_eq!(session_a.editor(id_a).unwrap().text(), "alpha text");
    // Session B's history is untouched by session A's undo.
    assert_eq!(session_b.history().len(), 1);
    assert_eq!(session_b.editor(id_b).unwrap().text(), "B text");
}

#[test]
fn test_active_editor_switching() {
    let mut session = EditorSession::new();
    let first = session.open_editor("first document");
    let second = session.open_editor("second document");
    assert_eq!(session.active(), Some(second));

    {
        let editor = session.editor_mut(second).unwrap();
        editor.set_cursor(Position::new(0, 0));
        editor.set_selection_width(6);
    }
    session.trigger_copy().unwrap();
    assert_eq!(session.clipboard().content(), "second");

    session.set_active(first).unwrap();
    {
        let editor = session.editor_mut(first).unwrap();
        editor.set_cursor(Position::new(0, 0));
        editor.set_selection_width(5);
    }
    session.trigger_cut().unwrap();
    assert_eq!(session.editor(first).unwrap().text(), "second document");
    assert_eq!(session.editor(second).unwrap().text(), "second document");

    // Undo restores the editor the recorded command was bound to, not the
    // currently active one.
    session.set_active(second).unwrap();
    session.undo().unwrap();
    assert_eq!(session.editor(first).unwrap().text(), "first document");
}

#[test]
fn test_ui_actions_cover_all_entry_points() {
    let (mut session, id) = session_with("hello world", Position::new(0, 6), 5);

    assert!(!session.dispatch(UiAction::Copy).unwrap());
    assert!(session.dispatch(UiAction::Cut).unwrap());
    assert!(session.dispatch(UiAction::Paste).unwrap());
    assert!(!session.dispatch(UiAction::Undo).unwrap());

    assert_eq!(session.history().len(), 1);
    assert_eq!(session.editor(id).unwrap().text(), "hello world");
}

#[test]
fn test_dispatch_log_tracks_history_depth() {
    let (mut session, _) = session_with("hello world", Position::new(0, 6), 5);

    session.trigger_cut().unwrap();
    session.trigger_paste().unwrap();
    session.undo().unwrap();

    let entries = session.log().entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].field("history_depth"), Some("1"));
    assert_eq!(entries[1].field("history_depth"), Some("2"));
    assert_eq!(entries[2].field("history_depth"), Some("1"));
    assert_eq!(entries[2].field("command"), Some("undo"));
    assert_eq!(entries[2].field("changed"), Some("false"));
}
