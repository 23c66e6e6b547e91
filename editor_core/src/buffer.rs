//! Text buffer and position types

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Cursor position in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn zero() -> Self {
        Self { row: 0, col: 0 }
    }
}

/// Text buffer with line-based storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    pub fn from_string(content: String) -> Self {
        let lines = if content.is_empty() {
            vec![String::new()]
        } else {
            content.lines().map(|s| s.into()).collect()
        };
        Self { lines }
    }

    pub fn as_string(&self) -> String {
        self.lines.join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    pub fn line_length(&self, row: usize) -> usize {
        self.lines.get(row).map(|s| s.len()).unwrap_or(0)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Text of the span starting at `pos`, at most `width` bytes, clamped
    /// to the end of the line
    pub fn span(&self, pos: Position, width: usize) -> Option<String> {
        let line = self.lines.get(pos.row)?;
        let end = pos.col.saturating_add(width).min(line.len());
        line.get(pos.col..end).map(|s| s.into())
    }

    /// Replace the span starting at `pos` (at most `width` bytes, clamped
    /// to the end of the line) with `text`. Replacement text containing
    /// newlines splits the line at the splice point.
    pub fn replace_span(&mut self, pos: Position, width: usize, text: &str) -> bool {
        let Some(line) = self.lines.get(pos.row) else {
            return false;
        };
        let end = pos.col.saturating_add(width).min(line.len());
        if !line.is_char_boundary(pos.col) || !line.is_char_boundary(end) {
            return false;
        }

        let tail = self.lines[pos.row].split_off(end);
        self.lines[pos.row].truncate(pos.col);

        match text.split_once('\n') {
            None => {
                self.lines[pos.row].push_str(text);
                self.lines[pos.row].push_str(&tail);
            }
            Some((first, rest)) => {
                self.lines[pos.row].push_str(first);
                let mut row = pos.row;
                for segment in rest.split('\n') {
                    row += 1;
                    self.lines.insert(row, segment.into());
                }
                self.lines[row].push_str(&tail);
            }
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
