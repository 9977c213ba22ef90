//! Recent Projects
//!
//! "Recent" lists and the read-only project detail views.

use crate::api::ApiError;
use crate::models::{display_value, Project};

/// How many projects the recent lists show
pub const RECENT_LIMIT: usize = 3;

/// Newest `RECENT_LIMIT` projects by `created_at`, newest first.
/// Projects without a parseable timestamp sort after dated ones.
pub fn recent_projects(mut projects: Vec<Project>) -> Vec<Project> {
    projects.sort_by_cached_key(|p| std::cmp::Reverse(p.created()));
    projects.truncate(RECENT_LIMIT);
    projects
}

/// Fields shown in the project details modal, defaults filled in
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetails {
    pub name: String,
    pub description: String,
    pub manager: String,
    pub start_date: String,
    pub deadline: String,
    pub status: String,
    pub team: Vec<String>,
    pub created_at: String,
    pub created_by: String,
}

fn or_default(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

impl ProjectDetails {
    /// `missing_status` fills in a project that has no status
    pub fn from_project(project: &Project, missing_status: &str) -> Self {
        let manager = project.manager.as_ref().map(display_value);
        Self {
            name: project.name.clone(),
            description: or_default(project.description.as_deref(), "No description available"),
            manager: or_default(manager.as_deref(), "Not assigned"),
            start_date: or_default(project.start_date.as_deref(), "N/A"),
            deadline: or_default(project.deadline.as_deref(), "N/A"),
            status: or_default(project.status.as_deref(), missing_status),
            team: project.team.iter().map(display_value).filter(|m| !m.is_empty()).collect(),
            created_at: project
                .created()
                .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            created_by: or_default(project.creator_email().as_deref(), "N/A"),
        }
    }
}

/// Status label used on project cards, where missing means active
pub fn card_status(project: &Project) -> String {
    or_default(project.status.as_deref(), "Active")
}

/// Toast text for a failed project fetch
pub fn fetch_error(err: &ApiError) -> &'static str {
    if err.is_network() {
        "Error fetching projects"
    } else {
        "Failed to fetch projects"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project(id: u32, created_at: Option<&str>) -> Project {
        Project { id, name: format!("Project {}", id), created_at: created_at.map(str::to_string), ..Default::default() }
    }

    #[test]
    fn test_top_three_newest_first() {
        let projects = vec![
            project(1, Some("2025-01-10T08:00:00Z")),
            project(2, Some("2025-03-01T08:00:00Z")),
            project(3, Some("2024-12-24T08:00:00Z")),
            project(4, Some("2025-02-14T08:00:00Z")),
            project(5, Some("2025-03-01T07:59:59Z")),
        ];
        let ids: Vec<u32> = recent_projects(projects).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 5, 4]);
    }

    #[test]
    fn test_undated_sort_last() {
        let projects = vec![project(1, None), project(2, Some("garbage")), project(3, Some("2025-01-01"))];
        let recent = recent_projects(projects);
        assert_eq!(recent[0].id, 3);
        assert_eq!(recent.len(), 3);
    }

    #[test]
    fn test_fewer_than_limit() {
        assert!(recent_projects(Vec::new()).is_empty());
        assert_eq!(recent_projects(vec![project(9, None)]).len(), 1);
    }

    #[test]
    fn test_details_defaults() {
        let details = ProjectDetails::from_project(&project(1, None), "Unknown");
        assert_eq!(details.description, "No description available");
        assert_eq!(details.manager, "Not assigned");
        assert_eq!(details.start_date, "N/A");
        assert_eq!(details.deadline, "N/A");
        assert_eq!(details.status, "Unknown");
        assert!(details.team.is_empty());
        assert_eq!(details.created_by, "N/A");
    }

    #[test]
    fn test_details_filled() {
        let project: Project = serde_json::from_value(json!({
            "id": 1, "name": "Apollo", "description": "Moonshot",
            "manager": {"email": "pm@example.com"}, "status": "Active",
            "team": ["Ada", {"email": "grace@example.com"}],
            "created_at": "2025-04-02T10:15:00Z",
            "created_by": {"email": "owner@example.com"}
        }))
        .unwrap();
        let details = ProjectDetails::from_project(&project, "Unknown");
        assert_eq!(details.manager, "pm@example.com");
        assert_eq!(details.team, vec!["Ada".to_string(), "grace@example.com".to_string()]);
        assert_eq!(details.created_at, "2025-04-02 10:15");
        assert_eq!(details.created_by, "owner@example.com");
        assert_eq!(card_status(&project), "Active");
    }

    #[test]
    fn test_missing_status_default_is_per_screen() {
        let bare = project(1, None);
        assert_eq!(ProjectDetails::from_project(&bare, "Active").status, "Active");
        assert_eq!(card_status(&bare), "Active");
        assert_eq!(ProjectDetails::from_project(&bare, "Unknown").status, "Unknown");

        let paused = Project { status: Some("Paused".into()), ..bare };
        assert_eq!(ProjectDetails::from_project(&paused, "Active").status, "Paused");
    }

    #[test]
    fn test_fetch_error_wording() {
        assert_eq!(fetch_error(&ApiError::Network("offline".into())), "Error fetching projects");
        assert_eq!(fetch_error(&ApiError::ServerError { status: 500 }), "Failed to fetch projects");
    }
}
