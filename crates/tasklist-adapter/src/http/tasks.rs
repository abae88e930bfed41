/*
[INPUT]:  Task titles, ids and partial task fields
[OUTPUT]: Remote task representations
[POS]:    HTTP layer - task collection endpoints
[UPDATE]: When adding task endpoints or changing request bodies
*/

use crate::http::{Result, TasklistClient};
use crate::types::{CreateTaskRequest, Task, TaskId, TaskPatch};
use reqwest::Method;

const TASKS: &str = "tasks";

impl TasklistClient {
    /// List all tasks
    ///
    /// GET /tasks
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let builder = self.request(Method::GET, &[TASKS])?;
        self.send_json(builder).await
    }

    /// Create a task; the service assigns the id and defaults
    ///
    /// POST /tasks
    pub async fn create_task(&self, title: &str) -> Result<Task> {
        let body = CreateTaskRequest {
            title: title.to_string(),
        };
        let builder = self.request(Method::POST, &[TASKS])?.json(&body);
        self.send_json(builder).await
    }

    /// Merge partial fields into a task
    ///
    /// PUT /tasks/{id}
    pub async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> Result<Task> {
        let id = id.to_string();
        let builder = self.request(Method::PUT, &[TASKS, id.as_str()])?.json(patch);
        self.send_json(builder).await
    }

    /// Merge partial fields into a task, accepting any success body
    ///
    /// PUT /tasks/{id}
    pub async fn patch_task(&self, id: &TaskId, patch: &TaskPatch) -> Result<()> {
        let id = id.to_string();
        let builder = self.request(Method::PUT, &[TASKS, id.as_str()])?.json(patch);
        self.send_empty(builder).await
    }

    /// Delete a task
    ///
    /// DELETE /tasks/{id}
    pub async fn delete_task(&self, id: &TaskId) -> Result<()> {
        let id = id.to_string();
        let builder = self.request(Method::DELETE, &[TASKS, id.as_str()])?;
        self.send_empty(builder).await
    }
}
