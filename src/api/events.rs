//! Calendar Event Endpoints

use crate::models::CalendarEvent;
use super::{get_list, ApiError};

pub async fn list_project_events(project_id: u32) -> Result<Vec<CalendarEvent>, ApiError> {
    get_list(&format!("/api/projects/{}/events/", project_id)).await
}
