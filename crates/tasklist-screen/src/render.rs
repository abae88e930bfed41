/*
[INPUT]:  TaskListState snapshot
[OUTPUT]: Styled terminal lines for the task list screen
[POS]:    Presentation layer - text rendering of the screen
[UPDATE]: When the screen layout changes
*/

use console::style;

use crate::state::TaskListState;

/// Render the screen top to bottom: error banner, new-task input, edit form,
/// then one line per task.
pub fn render(state: &TaskListState) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(message) = state.error() {
        lines.push(style(format!("Error: {message}")).white().on_red().bold().to_string());
    }

    lines.push(format!("New task: {}", input_text(state.new_title(), "New Task Title")));

    if let Some(edit) = state.edit() {
        lines.push(format!(
            "Editing #{}: {}",
            edit.id,
            input_text(&edit.title, "Edit Task Title")
        ));
    }

    if state.tasks().is_empty() {
        lines.push(style("No tasks").dim().to_string());
        return lines;
    }

    for task in state.tasks() {
        let line = if task.completed {
            format!(
                "[x] {} {}",
                style(&task.title).strikethrough().dim(),
                style(format!("(#{})", task.id)).dim()
            )
        } else {
            format!("[ ] {} {}", task.title, style(format!("(#{})", task.id)).dim())
        };
        lines.push(line);
    }

    lines
}

fn input_text(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        style(placeholder).dim().italic().to_string()
    } else {
        value.to_string()
    }
}
