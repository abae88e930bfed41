/*
[INPUT]:  Public API exports for tasklist-screen crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod error;
pub mod render;
pub mod screen;
pub mod state;

// Re-export main types for convenience
pub use config::ScreenConfig;
pub use error::{CommandError, Operation, error_message};
pub use render::render;
pub use screen::TaskListScreen;
pub use state::{EditBuffer, TaskListState};
