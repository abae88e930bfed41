/*
[INPUT]:  Local validation failures and accessor errors
[OUTPUT]: CommandError plus the single user-facing message policy
[POS]:    Error handling layer - shared classification for every command
[UPDATE]: When adding commands or changing displayed messages
*/

use tasklist_adapter::{FailureKind, TasklistError};
use thiserror::Error;

pub const NO_RESPONSE_MESSAGE: &str = "No response from server";

/// Why a screen command failed
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Task title cannot be empty")]
    EmptyTitle,

    #[error("No task selected for editing")]
    NoActiveEdit,

    #[error(transparent)]
    Accessor(#[from] TasklistError),
}

impl CommandError {
    /// Local failures never reach the network
    pub fn is_validation(&self) -> bool {
        matches!(self, CommandError::EmptyTitle | CommandError::NoActiveEdit)
    }
}

/// Screen commands, each with its own fallback message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchAll,
    Create,
    UpdateTitle,
    ToggleCompletion,
    Delete,
}

impl Operation {
    pub fn default_message(self) -> &'static str {
        match self {
            Operation::FetchAll => "An error occurred",
            Operation::Create => "Failed to add task",
            Operation::UpdateTitle => "Failed to update task",
            Operation::ToggleCompletion => "Failed to toggle task completion",
            Operation::Delete => "Failed to delete task",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::FetchAll => "fetch_all",
            Operation::Create => "create",
            Operation::UpdateTitle => "update_title",
            Operation::ToggleCompletion => "toggle_completion",
            Operation::Delete => "delete",
        }
    }
}

/// Map a failure to the text shown in the error slot.
pub fn error_message(error: &CommandError, operation: Operation) -> String {
    let fallback = operation.default_message();
    match error {
        CommandError::EmptyTitle | CommandError::NoActiveEdit => error.to_string(),
        CommandError::Accessor(err) => match err.kind() {
            FailureKind::Application => err.server_message().unwrap_or(fallback).to_string(),
            FailureKind::Transport => NO_RESPONSE_MESSAGE.to_string(),
            FailureKind::Construction => {
                let description = err.to_string();
                if description.is_empty() {
                    fallback.to_string()
                } else {
                    description
                }
            }
        },
    }
}
