//! Command history stack

use crate::command::{Command, CommandKind};

/// LIFO stack of recorded, state-changing commands.
///
/// Append-only at the tail, pop-only from the tail; no deduplication and
/// no capacity bound, so a long-lived session keeps every recorded command
/// until it is undone.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    stack: Vec<Command>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command at the tail
    pub fn push(&mut self, command: Command) {
        self.stack.push(command);
    }

    /// Remove and return the tail command; `None` when the history is
    /// empty (an empty history is not an error)
    pub fn pop(&mut self) -> Option<Command> {
        self.stack.pop()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Kinds of the recorded commands, oldest first
    pub fn kinds(&self) -> Vec<CommandKind> {
        self.stack.iter().map(Command::kind).collect()
    }
}
