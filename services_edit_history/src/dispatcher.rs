//! Editor session and command dispatch

use core_types::{EditorId, SessionId};
use editor_core::Editor;
use services_logger::{LogEntry, LogLevel, Logger};

use crate::clipboard::Clipboard;
use crate::command::{Command, DispatchError, DispatchResult};
use crate::history::CommandHistory;
use crate::registry::EditorRegistry;

/// UI action bound to a session entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Copy,
    Cut,
    Paste,
    Undo,
}

/// One editing session: a registry of editors together with the clipboard,
/// command history, and log they share.
///
/// The session is the single gate deciding what is undoable: a command is
/// recorded into history only when its execution reports a state change.
/// Each session owns an independent registry/history pair; nothing here is
/// global.
#[derive(Debug)]
pub struct EditorSession {
    id: SessionId,
    editors: EditorRegistry,
    active: Option<EditorId>,
    clipboard: Clipboard,
    history: CommandHistory,
    log: Logger,
}

impl EditorSession {
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            editors: EditorRegistry::new(),
            active: None,
            clipboard: Clipboard::new(),
            history: CommandHistory::new(),
            log: Logger::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Create an editor holding `content`, register it, and make it the
    /// active editor
    pub fn open_editor(&mut self, content: &str) -> EditorId {
        let id = self.editors.open(content);
        self.active = Some(id);
        id
    }

    /// Switch the active editor
    pub fn set_active(&mut self, id: EditorId) -> DispatchResult<()> {
        if !self.editors.contains(id) {
            return Err(DispatchError::UnknownEditor(id));
        }
        self.active = Some(id);
        Ok(())
    }

    pub fn active(&self) -> Option<EditorId> {
        self.active
    }

    pub fn active_editor(&self) -> Option<&Editor> {
        self.editors.get(self.active?)
    }

    pub fn editor(&self, id: EditorId) -> Option<&Editor> {
        self.editors.get(id)
    }

    pub fn editor_mut(&mut self, id: EditorId) -> Option<&mut Editor> {
        self.editors.get_mut(id)
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn clipboard_mut(&mut self) -> &mut Clipboard {
        &mut self.clipboard
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn log(&self) -> &Logger {
        &self.log
    }

    /// Execute `command` and record it in history iff it reported a state
    /// change. This is the only path into the history stack.
    pub fn execute_command(&mut self, mut command: Command) -> DispatchResult<bool> {
        let kind = command.kind();
        let changed = command.execute(&mut self.editors, &mut self.clipboard, &mut self.history)?;
        if changed {
            self.history.push(command);
        }

        self.log.log(
            LogEntry::new(LogLevel::Info, "command dispatched")
                .with_source(self.id)
                .with_field("command", kind.as_str())
                .with_field("changed", changed.to_string())
                .with_field("history_depth", self.history.len().to_string()),
        );
        Ok(changed)
    }

    /// Pop the most recent recorded command and reverse it. A well-defined
    /// no-op when the history is empty.
    pub fn undo(&mut self) -> DispatchResult<bool> {
        self.execute_command(Command::Undo)
    }

    pub fn trigger_copy(&mut self) -> DispatchResult<bool> {
        let id = self.active_id()?;
        self.execute_command(Command::copy(id))
    }

    pub fn trigger_cut(&mut self) -> DispatchResult<bool> {
        let id = self.active_id()?;
        self.execute_command(Command::cut(id))
    }

    pub fn trigger_paste(&mut self) -> DispatchResult<bool> {
        let id = self.active_id()?;
        self.execute_command(Command::paste(id))
    }

    pub fn trigger_undo(&mut self) -> DispatchResult<bool> {
        self.undo()
    }

    /// Dispatch a UI action against the active editor
    pub fn dispatch(&mut self, action: UiAction) -> DispatchResult<bool> {
        match action {
            UiAction::Copy => self.trigger_copy(),
            UiAction::Cut => self.trigger_cut(),
            UiAction::Paste => self.trigger_paste(),
            UiAction::Undo => self.trigger_undo(),
        }
    }

    fn active_id(&self) -> DispatchResult<EditorId> {
        self.active.ok_or(DispatchError::NoActiveEditor)
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
