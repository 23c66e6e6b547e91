//! # Edit History Service
//!
//! Reversible command dispatch for editor sessions: clipboard commands,
//! snapshot-backed undo, and the history stack that ties them together.
//!
//! ## Philosophy
//!
//! - **One gate**: Only the session records commands into history;
//!   commands cannot register themselves.
//! - **Snapshot before mutation**: A state-changing command captures its
//!   backup immediately before its own effect, never after.
//! - **Explicit context**: Clipboard and history are owned by the session
//!   and passed to commands; there is no global mutable state.
//! - **Stack discipline**: Commands are recorded in execution order and
//!   undone in exact reverse order.

pub mod clipboard;
pub mod command;
pub mod dispatcher;
pub mod history;
pub mod registry;

pub use clipboard::Clipboard;
pub use command::{Command, CommandKind, DispatchError, DispatchResult};
pub use dispatcher::{EditorSession, UiAction};
pub use history::CommandHistory;
pub use registry::EditorRegistry;
