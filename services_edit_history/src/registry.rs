//! Editor registry

use std::collections::HashMap;

use core_types::EditorId;
use editor_core::Editor;

/// Owns the editors of one session, keyed by handle.
///
/// Snapshot back-references are `EditorId`s that resolve here; a handle
/// that no longer resolves means the editor was never registered in this
/// session (or the handle is stale) and the caller must reject the
/// operation.
#[derive(Debug, Clone, Default)]
pub struct EditorRegistry {
    editors: HashMap<EditorId, Editor>,
}

impl EditorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor holding `content`, register it, and return its
    /// handle
    pub fn open(&mut self, content: &str) -> EditorId {
        let id = EditorId::new();
        self.editors.insert(id, Editor::with_content(id, content));
        id
    }

    pub fn get(&self, id: EditorId) -> Option<&Editor> {
        self.editors.get(&id)
    }

    pub fn get_mut(&mut self, id: EditorId) -> Option<&mut Editor> {
        self.editors.get_mut(&id)
    }

    pub fn contains(&self, id: EditorId) -> bool {
        self.editors.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.editors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }
}
