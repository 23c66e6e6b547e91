//! Point-in-time capture of editor state

use alloc::string::String;

use core_types::EditorId;

use crate::buffer::{Position, TextBuffer};
use crate::editor::Editor;

/// Immutable copy of an editor's state at one instant.
///
/// Carries the handle of the editor it was captured from as a non-owning
/// back-reference; the captured fields never change after construction.
/// Restoring writes the captured values back and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    editor: EditorId,
    buffer: TextBuffer,
    cursor: Position,
    selection_width: usize,
}

impl Snapshot {
    pub(crate) fn capture(editor: &Editor) -> Self {
        Self {
            editor: editor.id(),
            buffer: editor.buffer().clone(),
            cursor: editor.cursor(),
            selection_width: editor.selection_width(),
        }
    }

    /// Handle of the editor this snapshot restores
    pub fn editor(&self) -> EditorId {
        self.editor
    }

    /// Captured buffer content
    pub fn text(&self) -> String {
        self.buffer.as_string()
    }

    /// Captured cursor position
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Captured selection width
    pub fn selection_width(&self) -> usize {
        self.selection_width
    }

    /// Write the captured fields back onto `editor`. Idempotent. Refuses
    /// an editor whose handle differs from the back-reference and returns
    /// `false` without touching it.
    pub fn restore(&self, editor: &mut Editor) -> bool {
        if editor.id() != self.editor {
            return false;
        }
        editor.apply_restore(self.buffer.clone(), self.cursor, self.selection_width);
        true
    }

    /// Compute a deterministic hash of the captured state.
    /// This is used for fast parity comparison in tests.
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        for line in self.buffer.lines() {
            hasher.update(line.as_bytes());
            hasher.update(b"\n");
        }

        hasher.update(self.cursor.row.to_le_bytes());
        hasher.update(self.cursor.col.to_le_bytes());
        hasher.update(self.selection_width.to_le_bytes());

        let result = hasher.finalize();
        let bytes: [u8; 8] = result[..8].try_into().unwrap();
        u64::from_le_bytes(bytes)
    }
}
