//! Task Form State
//!
//! Create-task draft shared by the dashboards.

use chrono::NaiveDate;

use crate::api::CreateTaskRequest;

/// Status options offered by the create-task form
pub const STATUSES: [&str; 3] = ["To Do", "In Progress", "Done"];

#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub project: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub assigned_to: String,
    pub due_date: String,
    pub created_by: String,
}

impl TaskDraft {
    /// Empty draft due on `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            project: String::new(),
            title: String::new(),
            description: String::new(),
            status: STATUSES[0].to_string(),
            assigned_to: String::new(),
            due_date: today.format("%Y-%m-%d").to_string(),
            created_by: String::new(),
        }
    }

    /// Required-field check before anything is sent
    pub fn validate(&self, require_project: bool) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        if require_project && self.project.trim().is_empty() {
            return Err("Project is required".to_string());
        }
        Ok(())
    }

    pub fn to_request(&self) -> CreateTaskRequest {
        fn optional(value: &str) -> Option<String> {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        }
        CreateTaskRequest {
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            status: self.status.clone(),
            assigned_to: optional(&self.assigned_to),
            due_date: optional(&self.due_date),
            project: optional(&self.project),
            created_by: optional(&self.created_by),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 12).unwrap()
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = TaskDraft::new(today());
        assert_eq!(draft.status, "To Do");
        assert_eq!(draft.due_date, "2025-05-12");
        assert!(draft.title.is_empty());
    }

    #[test]
    fn test_validate() {
        let mut draft = TaskDraft::new(today());
        assert_eq!(draft.validate(false), Err("Title is required".to_string()));

        draft.title = "Draft agenda".into();
        assert_eq!(draft.validate(false), Ok(()));
        assert_eq!(draft.validate(true), Err("Project is required".to_string()));
    }

    #[test]
    fn test_blank_optionals_become_null() {
        let mut draft = TaskDraft::new(today());
        draft.title = "Book venue".into();
        draft.project = "4".into();
        draft.due_date = String::new();

        let body = serde_json::to_value(draft.to_request()).unwrap();
        assert_eq!(
            body,
            json!({
                "title": "Book venue",
                "description": "",
                "status": "To Do",
                "assigned_to": null,
                "due_date": null,
                "project": "4",
                "created_by": null
            })
        );
    }
}
