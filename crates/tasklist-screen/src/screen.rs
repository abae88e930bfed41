/*
[INPUT]:  User commands and a TaskAccessor implementation
[OUTPUT]: Reconciled TaskListState after each remote call
[POS]:    Command layer - fetch, create, edit, toggle, delete
[UPDATE]: When adding commands or changing reconciliation rules
*/

use tasklist_adapter::{TaskAccessor, TaskId, TaskPatch};
use tracing::{debug, error, info};

use crate::error::{CommandError, Operation, error_message};
use crate::state::TaskListState;

/// The task list screen: an injected accessor plus the state it mirrors.
///
/// Commands take `&mut self`, so a screen never has two commands in flight.
/// Local state changes only after the remote call for a command succeeds;
/// a failure leaves the collection as it was and records a message.
pub struct TaskListScreen<A> {
    accessor: A,
    state: TaskListState,
}

impl<A: TaskAccessor> TaskListScreen<A> {
    pub fn new(accessor: A) -> Self {
        Self {
            accessor,
            state: TaskListState::default(),
        }
    }

    pub fn state(&self) -> &TaskListState {
        &self.state
    }

    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    /// Load the collection when the screen is first shown
    pub async fn activate(&mut self) -> Result<(), CommandError> {
        info!("activating task list screen");
        self.fetch_all().await
    }

    /// Replace the whole collection with the server's list
    pub async fn fetch_all(&mut self) -> Result<(), CommandError> {
        let outcome = self.accessor.list().await.map_err(CommandError::from);
        let tasks = self.settle(Operation::FetchAll, outcome)?;
        debug!(count = tasks.len(), "fetched tasks");
        self.state.replace_all(tasks);
        Ok(())
    }

    pub fn set_new_title(&mut self, title: impl Into<String>) {
        self.state.set_new_title(title.into());
    }

    /// Create a task from the new-task input
    pub async fn add_task(&mut self) -> Result<(), CommandError> {
        let title = self.state.new_title().trim().to_string();
        if title.is_empty() {
            return self.settle(Operation::Create, Err(CommandError::EmptyTitle));
        }

        let outcome = self.accessor.create(&title).await.map_err(CommandError::from);
        let task = self.settle(Operation::Create, outcome)?;
        info!(task_id = %task.id, "task created");
        self.state.append(task);
        self.state.clear_new_title();
        Ok(())
    }

    /// Open the edit buffer for a task, replacing any edit in progress
    pub fn start_edit(&mut self, id: TaskId, title: impl Into<String>) {
        debug!(task_id = %id, "editing task");
        self.state.begin_edit(id, title.into());
    }

    /// Change the working title. Returns false when no edit is active.
    pub fn set_edit_title(&mut self, title: impl Into<String>) -> bool {
        match self.state.edit_mut() {
            Some(edit) => {
                edit.title = title.into();
                true
            }
            None => false,
        }
    }

    /// Submit the edit buffer and adopt the server's copy of the task
    pub async fn update_task(&mut self) -> Result<(), CommandError> {
        let Some(edit) = self.state.edit().cloned() else {
            return self.settle(Operation::UpdateTitle, Err(CommandError::NoActiveEdit));
        };
        let title = edit.title.trim().to_string();
        if title.is_empty() {
            return self.settle(Operation::UpdateTitle, Err(CommandError::EmptyTitle));
        }

        let outcome = self
            .accessor
            .replace(&edit.id, TaskPatch::title(title))
            .await
            .map_err(CommandError::from);
        let task = self.settle(Operation::UpdateTitle, outcome)?;
        info!(task_id = %edit.id, "task updated");
        self.state.replace(task);
        self.state.finish_edit();
        Ok(())
    }

    /// Flip completion. Only the local flag is updated; the response body
    /// is ignored until the next fetch.
    pub async fn toggle_completion(
        &mut self,
        id: &TaskId,
        completed: bool,
    ) -> Result<(), CommandError> {
        let target = !completed;
        let outcome = self
            .accessor
            .apply_patch(id, TaskPatch::completed(target))
            .await
            .map_err(CommandError::from);
        self.settle(Operation::ToggleCompletion, outcome)?;
        info!(task_id = %id, completed = target, "task completion toggled");
        self.state.set_completed(id, target);
        Ok(())
    }

    pub async fn delete_task(&mut self, id: &TaskId) -> Result<(), CommandError> {
        let outcome = self.accessor.delete(id).await.map_err(CommandError::from);
        self.settle(Operation::Delete, outcome)?;
        info!(task_id = %id, "task deleted");
        self.state.remove(id);
        Ok(())
    }

    // Every command ends here: success clears the error slot, failure fills it.
    fn settle<T>(
        &mut self,
        operation: Operation,
        outcome: Result<T, CommandError>,
    ) -> Result<T, CommandError> {
        match outcome {
            Ok(value) => {
                self.state.clear_error();
                Ok(value)
            }
            Err(err) => {
                let message = error_message(&err, operation);
                error!(operation = operation.name(), error = %err, %message, "command failed");
                self.state.set_error(message);
                Err(err)
            }
        }
    }
}
