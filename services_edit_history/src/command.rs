//! Reversible editor commands

use std::fmt;

use core_types::EditorId;
use editor_core::Snapshot;
use thiserror::Error;

use crate::clipboard::Clipboard;
use crate::history::CommandHistory;
use crate::registry::EditorRegistry;

/// Command dispatch error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Unknown editor: {0}")]
    UnknownEditor(EditorId),

    #[error("Cannot undo {0}: no backup captured (command never executed)")]
    MissingBackup(CommandKind),

    #[error("Cannot undo {0}: command does not mutate editor state")]
    NotUndoable(CommandKind),

    #[error("Snapshot refused the editor it was asked to restore")]
    ForeignSnapshot,

    #[error("No active editor in session")]
    NoActiveEditor,
}

/// Command dispatch result
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Data-free command discriminant, for logging and history inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Copy,
    Cut,
    Paste,
    Undo,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Copy => "copy",
            CommandKind::Cut => "cut",
            CommandKind::Paste => "paste",
            CommandKind::Undo => "undo",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reversible unit of work bound to one editor.
///
/// `execute` reports whether the command changed editor state; the session
/// records only commands that report `true`. A mutating command captures
/// exactly one backup snapshot, immediately before its own mutation, and
/// that snapshot is what `undo` restores.
#[derive(Debug, Clone)]
pub enum Command {
    /// Read the bound editor's selection into the clipboard
    Copy { editor: EditorId },
    /// Snapshot the bound editor, then replace its selection with the
    /// clipboard's current content
    Cut {
        editor: EditorId,
        backup: Option<Snapshot>,
    },
    /// Snapshot the bound editor, then replace its selection with the
    /// clipboard's current content
    Paste {
        editor: EditorId,
        backup: Option<Snapshot>,
    },
    /// Pop the most recent recorded command and reverse it
    Undo,
}

impl Command {
    pub fn copy(editor: EditorId) -> Self {
        Command::Copy { editor }
    }

    pub fn cut(editor: EditorId) -> Self {
        Command::Cut {
            editor,
            backup: None,
        }
    }

    pub fn paste(editor: EditorId) -> Self {
        Command::Paste {
            editor,
            backup: None,
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Copy { .. } => CommandKind::Copy,
            Command::Cut { .. } => CommandKind::Cut,
            Command::Paste { .. } => CommandKind::Paste,
            Command::Undo => CommandKind::Undo,
        }
    }

    /// Handle of the bound editor, if the command has one
    pub fn editor(&self) -> Option<EditorId> {
        match self {
            Command::Copy { editor }
            | Command::Cut { editor, .. }
            | Command::Paste { editor, .. } => Some(*editor),
            Command::Undo => None,
        }
    }

    /// Run the command against the session context. Returns whether editor
    /// state changed, which is also the signal that the command must be
    /// recorded.
    ///
    /// An empty clipboard is not an error: cut and paste proceed with
    /// whatever the clipboard holds.
    pub fn execute(
        &mut self,
        editors: &mut EditorRegistry,
        clipboard: &mut Clipboard,
        history: &mut CommandHistory,
    ) -> DispatchResult<bool> {
        match self {
            Command::Copy { editor } => {
                let editor = editors
                    .get(*editor)
                    .ok_or(DispatchError::UnknownEditor(*editor))?;
                clipboard.set_content(editor.selection());
                Ok(false)
            }
            Command::Cut { editor, backup } | Command::Paste { editor, backup } => {
                let id = *editor;
                let editor = editors.get_mut(id).ok_or(DispatchError::UnknownEditor(id))?;
                *backup = Some(editor.capture_snapshot());
                editor.replace_selection(clipboard.content());
                Ok(true)
            }
            Command::Undo => {
                if let Some(recorded) = history.pop() {
                    recorded.undo(editors)?;
                }
                Ok(false)
            }
        }
    }

    /// Reverse the command by restoring its captured backup snapshot.
    ///
    /// A command that never executed has no backup and cannot be undone;
    /// that is a precondition violation, not a silent no-op.
    pub fn undo(&self, editors: &mut EditorRegistry) -> DispatchResult<()> {
        let kind = self.kind();
        match self {
            Command::Cut { backup, .. } | Command::Paste { backup, .. } => {
                let snapshot = backup.as_ref().ok_or(DispatchError::MissingBackup(kind))?;
                let id = snapshot.editor();
                let editor = editors.get_mut(id).ok_or(DispatchError::UnknownEditor(id))?;
                if !snapshot.restore(editor) {
                    return Err(DispatchError::ForeignSnapshot);
                }
                Ok(())
            }
            Command::Copy { .. } | Command::Undo => Err(DispatchError::NotUndoable(kind)),
        }
    }
}
