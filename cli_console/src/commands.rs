//! Action parsing for the demo console

use services_edit_history::UiAction;
use thiserror::Error;

/// Action parsing error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionParseError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Invalid syntax: {0}")]
    InvalidSyntax(String),
}

/// Action parser
pub struct ActionParser;

impl ActionParser {
    /// Parse an action name ("copy", "cut", "paste", "undo")
    pub fn parse(input: &str) -> Result<UiAction, ActionParseError> {
        let trimmed = input.trim();

        match trimmed {
            "copy" => Ok(UiAction::Copy),
            "cut" => Ok(UiAction::Cut),
            "paste" => Ok(UiAction::Paste),
            "undo" => Ok(UiAction::Undo),
            "" => Err(ActionParseError::InvalidSyntax("Empty action".to_string())),
            _ => Err(ActionParseError::UnknownAction(trimmed.to_string())),
        }
    }
}
