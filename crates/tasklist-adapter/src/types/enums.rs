/*
[INPUT]:  Task identifiers as emitted by the task service
[OUTPUT]: TaskId enum accepting integer or string ids
[POS]:    Data layer - identifier types
[UPDATE]: When the service changes its id representation
*/

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Server-assigned task identifier.
///
/// The service may hand out either numeric or textual ids. Ids compare equal
/// only when both the representation and the value match, so `1` and `"1"`
/// are different tasks. Numeric ids keep the JSON number as sent, so ids
/// beyond the `i64` range or with a fractional part still decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(Number),
    Text(String),
}

impl TaskId {
    pub fn int(value: i64) -> Self {
        TaskId::Number(Number::from(value))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(value) => write!(f, "{value}"),
            TaskId::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for TaskId {
    fn from(value: i64) -> Self {
        TaskId::int(value)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        TaskId::Number(Number::from(value))
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        TaskId::Text(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        TaskId::Text(value)
    }
}
