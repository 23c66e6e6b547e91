//! Shared clipboard buffer

/// A single string buffer shared by the copy, cut, and paste commands of
/// one session. The clipboard is not versioned and not undoable; commands
/// read whatever it currently holds, including the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clipboard {
    content: String,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }
}
