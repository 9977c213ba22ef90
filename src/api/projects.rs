//! Project Endpoints

use crate::models::Project;
use super::{get_list, ApiError};

pub async fn list_projects() -> Result<Vec<Project>, ApiError> {
    get_list("/api/projects/").await
}
