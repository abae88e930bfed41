/*
[INPUT]:  Error sources (HTTP transport, API responses, request construction)
[OUTPUT]: Structured error types with failure-kind classification
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the task service adapter
#[derive(Error, Debug)]
pub enum TasklistError {
    /// Server answered with a non-success status
    #[error("API error (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api { status: u16, message: Option<String> },

    /// Server answered with a success status but an unusable body
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request was sent but no response arrived (connect failure, timeout, reset)
    #[error("No response from server: {0}")]
    NoResponse(#[source] reqwest::Error),

    /// Request could not be built or sent
    #[error("{0}")]
    Request(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Coarse failure classes used to pick a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A response was received
    Application,
    /// No response was received
    Transport,
    /// Nothing was sent
    Construction,
}

impl TasklistError {
    pub fn kind(&self) -> FailureKind {
        match self {
            TasklistError::Api { .. } | TasklistError::InvalidResponse(_) => {
                FailureKind::Application
            }
            TasklistError::NoResponse(_) => FailureKind::Transport,
            TasklistError::Request(_) | TasklistError::UrlParse(_) => FailureKind::Construction,
        }
    }

    /// Message supplied by the server in the error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            TasklistError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Create an API error from status code and optional server message
    pub fn api_error(status: StatusCode, message: Option<String>) -> Self {
        TasklistError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

impl From<reqwest::Error> for TasklistError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            TasklistError::Request(err.to_string())
        } else if err.is_decode() || err.is_body() {
            TasklistError::InvalidResponse(err.to_string())
        } else {
            TasklistError::NoResponse(err)
        }
    }
}

/// Result type alias for task service operations
pub type Result<T> = std::result::Result<T, TasklistError>;
