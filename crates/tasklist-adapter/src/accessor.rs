/*
[INPUT]:  Task CRUD calls from the screen layer
[OUTPUT]: Remote task state or classified failures
[POS]:    Crate seam - the contract the screen consumes
[UPDATE]: When the set of remote task operations changes
*/

use async_trait::async_trait;

use crate::http::{Result, TasklistClient};
use crate::types::{Task, TaskId, TaskPatch};

/// Remote collection of tasks.
///
/// Each call suspends the caller until the service answers or the transport
/// gives up.
#[async_trait]
pub trait TaskAccessor: Send + Sync {
    async fn list(&self) -> Result<Vec<Task>>;
    async fn create(&self, title: &str) -> Result<Task>;
    async fn replace(&self, id: &TaskId, patch: TaskPatch) -> Result<Task>;
    /// Like `replace`, but any success response is accepted and its body
    /// is not read
    async fn apply_patch(&self, id: &TaskId, patch: TaskPatch) -> Result<()>;
    async fn delete(&self, id: &TaskId) -> Result<()>;
}

#[async_trait]
impl TaskAccessor for TasklistClient {
    async fn list(&self) -> Result<Vec<Task>> {
        self.list_tasks().await
    }

    async fn create(&self, title: &str) -> Result<Task> {
        self.create_task(title).await
    }

    async fn replace(&self, id: &TaskId, patch: TaskPatch) -> Result<Task> {
        self.update_task(id, &patch).await
    }

    async fn apply_patch(&self, id: &TaskId, patch: TaskPatch) -> Result<()> {
        self.patch_task(id, &patch).await
    }

    async fn delete(&self, id: &TaskId) -> Result<()> {
        self.delete_task(id).await
    }
}
