/*
[INPUT]:  Task service schema definitions and serde requirements
[OUTPUT]: Typed Task model with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::TaskId;

/// A task as stored by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed,
        }
    }
}
