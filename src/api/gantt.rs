//! Gantt Endpoints

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{GanttChart, GanttTask};
use super::{get_json, get_list, send_json, ApiError, Method};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGanttTask {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub progress: u32,
    pub dependencies: Vec<u32>,
    pub gantt_chart: u32,
}

pub async fn get_gantt_chart(project_id: u32) -> Result<GanttChart, ApiError> {
    get_json(&format!("/api/projects/{}/gantt-chart/", project_id)).await
}

pub async fn list_gantt_tasks(project_id: u32) -> Result<Vec<GanttTask>, ApiError> {
    get_list(&format!("/api/projects/{}/gantt-tasks/", project_id)).await
}

pub async fn create_gantt_task(project_id: u32, task: &NewGanttTask) -> Result<GanttTask, ApiError> {
    send_json(Method::Post, &format!("/api/projects/{}/gantt-tasks/", project_id), task).await
}
