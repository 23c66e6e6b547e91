//! The mutable editor state holder

use alloc::string::String;

use core_types::EditorId;

use crate::buffer::{Position, TextBuffer};
use crate::snapshot::Snapshot;

/// The mutable editor state: text buffer, cursor, and selection width.
///
/// An editor is bound to its registry handle at construction and owns its
/// fields exclusively. The selection starts at the cursor and extends
/// `selection_width` bytes to the right within the cursor's line, clamped
/// to the line end.
#[derive(Debug, Clone)]
pub struct Editor {
    id: EditorId,
    buffer: TextBuffer,
    cursor: Position,
    selection_width: usize,
}

impl Editor {
    /// Create an empty editor bound to `id`
    pub fn new(id: EditorId) -> Self {
        Self {
            id,
            buffer: TextBuffer::new(),
            cursor: Position::zero(),
            selection_width: 0,
        }
    }

    /// Create an editor bound to `id` holding `content`
    pub fn with_content(id: EditorId, content: &str) -> Self {
        Self {
            id,
            buffer: TextBuffer::from_string(content.into()),
            cursor: Position::zero(),
            selection_width: 0,
        }
    }

    pub fn id(&self) -> EditorId {
        self.id
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Full buffer content
    pub fn text(&self) -> String {
        self.buffer.as_string()
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn selection_width(&self) -> usize {
        self.selection_width
    }

    /// Replace the whole buffer, resetting cursor and selection
    pub fn load_content(&mut self, content: String) {
        self.buffer = TextBuffer::from_string(content);
        self.cursor = Position::zero();
        self.selection_width = 0;
    }

    /// Move the cursor, clamping to the buffer. The selection collapses
    /// when the cursor moves.
    pub fn set_cursor(&mut self, pos: Position) {
        let row = pos.row.min(self.buffer.line_count().saturating_sub(1));
        let col = pos.col.min(self.buffer.line_length(row));
        self.cursor = Position::new(row, col);
        self.selection_width = 0;
    }

    /// Set the selection width, clamped to the rest of the cursor's line
    pub fn set_selection_width(&mut self, width: usize) {
        let line_len = self.buffer.line_length(self.cursor.row);
        let available = line_len.saturating_sub(self.cursor.col);
        self.selection_width = width.min(available);
    }

    /// Currently selected text
    pub fn selection(&self) -> String {
        self.buffer
            .span(self.cursor, self.selection_width)
            .unwrap_or_default()
    }

    /// Replace the selection with `text`. The cursor does not move; the
    /// selection afterwards covers the inserted text when it stays on one
    /// line and collapses otherwise.
    pub fn replace_selection(&mut self, text: &str) -> bool {
        if !self
            .buffer
            .replace_span(self.cursor, self.selection_width, text)
        {
            return false;
        }
        self.selection_width = if text.contains('\n') { 0 } else { text.len() };
        true
    }

    /// Delete the selection, collapsing it
    pub fn delete_selection(&mut self) -> bool {
        if !self.buffer.replace_span(self.cursor, self.selection_width, "") {
            return false;
        }
        self.selection_width = 0;
        true
    }

    /// Capture an immutable copy of the editor's state. All fields are read
    /// under one shared borrow, so the copy is always consistent.
    pub fn capture_snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    /// Overwrite all fields with a snapshot's captured values, under one
    /// exclusive borrow. Only [`Snapshot::restore`] calls this.
    pub(crate) fn apply_restore(
        &mut self,
        buffer: TextBuffer,
        cursor: Position,
        selection_width: usize,
    ) {
        self.buffer = buffer;
        self.cursor = cursor;
        self.selection_width = selection_width;
    }
}
