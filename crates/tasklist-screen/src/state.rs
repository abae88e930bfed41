/*
[INPUT]:  Tasks returned by the accessor and user edits
[OUTPUT]: Owned screen state (collection, input, edit buffer, error slot)
[POS]:    State layer - local mirror of the remote task collection
[UPDATE]: When the screen gains new transient fields
*/

use tasklist_adapter::{Task, TaskId};

/// In-progress title edit for a single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub id: TaskId,
    pub title: String,
}

/// Everything the task list screen displays.
///
/// The collection is a cached view of the server and may go stale when other
/// clients mutate the same tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListState {
    tasks: Vec<Task>,
    new_title: String,
    edit: Option<EditBuffer>,
    error: Option<String>,
}

impl TaskListState {
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn new_title(&self) -> &str {
        &self.new_title
    }

    pub fn edit(&self) -> Option<&EditBuffer> {
        self.edit.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn set_new_title(&mut self, title: String) {
        self.new_title = title;
    }

    pub(crate) fn clear_new_title(&mut self) {
        self.new_title.clear();
    }

    pub(crate) fn begin_edit(&mut self, id: TaskId, title: String) {
        self.edit = Some(EditBuffer { id, title });
    }

    pub(crate) fn edit_mut(&mut self) -> Option<&mut EditBuffer> {
        self.edit.as_mut()
    }

    pub(crate) fn finish_edit(&mut self) {
        self.edit = None;
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }

    pub(crate) fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = dedup_by_id(tasks);
    }

    /// Append a newly created task. A task whose id is already present is
    /// replaced in place instead so ids stay unique.
    pub(crate) fn append(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|existing| existing.id == task.id) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
    }

    pub(crate) fn replace(&mut self, task: Task) {
        if let Some(existing) = self.tasks.iter_mut().find(|existing| existing.id == task.id) {
            *existing = task;
        }
    }

    pub(crate) fn set_completed(&mut self, id: &TaskId, completed: bool) {
        if let Some(existing) = self.tasks.iter_mut().find(|existing| &existing.id == id) {
            existing.completed = completed;
        }
    }

    pub(crate) fn remove(&mut self, id: &TaskId) {
        self.tasks.retain(|task| &task.id != id);
    }
}

// Keeps the first occurrence of each id.
fn dedup_by_id(tasks: Vec<Task>) -> Vec<Task> {
    let mut unique: Vec<Task> = Vec::with_capacity(tasks.len());
    for task in tasks {
        if !unique.iter().any(|existing| existing.id == task.id) {
            unique.push(task);
        }
    }
    unique
}
