//! Unique identifiers for editors and sessions

use core::fmt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Handle for an editor registered in a session
///
/// Editors are owned by a session's registry and addressed by this handle.
/// A snapshot carries the `EditorId` of the editor it was captured from as
/// a non-owning back-reference; the handle names where to restore, it never
/// grants direct access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditorId(Uuid);

impl EditorId {
    /// Creates a new random editor ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an editor ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EditorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EditorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Editor({})", self.0)
    }
}

/// Unique identifier for an editing session
///
/// A session owns one editor registry and one command history. Log entries
/// carry the session they originate from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a session ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Session({})", self.0)
    }
}
