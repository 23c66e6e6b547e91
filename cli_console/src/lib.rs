//! # CLI Console (Demo)
//!
//! This is a simple demonstration of wiring an editor session together.
//! It is NOT a shell and NOT intended for interactive editing.

pub mod commands;

use core_types::EditorId;
use editor_core::Position;
use services_edit_history::EditorSession;

/// Bootstrap function
///
/// This wires together an editor session with a sample document and
/// returns the session plus the handle of its active editor.
///
/// ## Design
///
/// Nothing here is ambient: the session owns its registry, clipboard,
/// history, and log, and the caller gets typed handles to work with.
pub fn bootstrap() -> (EditorSession, EditorId) {
    let mut session = EditorSession::new();
    let editor = session.open_editor("hello world");
    (session, editor)
}

/// Demo function showing the copy/cut/undo flow
pub fn demo() {
    let (mut session, editor) = bootstrap();

    {
        let editor = session.editor_mut(editor).unwrap();
        editor.set_cursor(Position::new(0, 6));
        editor.set_selection_width(5);
    }

    for input in ["copy", "cut", "undo"] {
        let action = commands::ActionParser::parse(input).expect("Known demo action");
        let changed = session.dispatch(action).expect("Demo dispatch failed");
        println!(
            "{input}: changed={changed} history_depth={} text={:?}",
            session.history().len(),
            session.editor(editor).unwrap().text()
        );
    }

    println!("Demo completed successfully");
}
