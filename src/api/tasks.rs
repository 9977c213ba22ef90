//! Task Endpoints
//!
//! Tasks and their subtasks.

use serde::Serialize;

use crate::models::{Subtask, Task};
use super::{get_list, send_json, ApiError, Method};

/// Body for `POST /api/tasks/`; blank optional fields go out as `null`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    pub status: String,
    pub assigned_to: Option<String>,
    pub due_date: Option<String>,
    pub project: Option<String>,
    pub created_by: Option<String>,
}

pub async fn list_tasks() -> Result<Vec<Task>, ApiError> {
    get_list("/api/tasks/").await
}

pub async fn create_task(request: &CreateTaskRequest) -> Result<Task, ApiError> {
    send_json(Method::Post, "/api/tasks/", request).await
}

pub async fn list_subtasks(task_id: u32) -> Result<Vec<Subtask>, ApiError> {
    get_list(&format!("/api/tasks/{}/subtasks/", task_id)).await
}
