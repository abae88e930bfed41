/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public task service adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod accessor;
pub mod http;
pub mod types;

pub use accessor::TaskAccessor;

// Re-export commonly used types from http
pub use http::{ClientConfig, FailureKind, Result, TasklistClient, TasklistError};

// Re-export all types
pub use types::*;
