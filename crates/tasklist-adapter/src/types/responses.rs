/*
[INPUT]:  Task service error payloads
[OUTPUT]: Typed error body with the optional server message
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the service error schema changes
*/

use serde::{Deserialize, Serialize};

/// Body of a non-success response. Only `message` is consulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extract a non-empty server message from a raw response body.
    pub fn message_from_bytes(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.is_empty())
    }
}
