//! Frontend Models
//!
//! Data structures mirroring backend JSON. Backend shapes are loose, so
//! most fields default when absent.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Foreign key as sent by the backend: usually a number, sometimes text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RefId {
    Num(u64),
    Text(String),
}

impl fmt::Display for RefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefId::Num(n) => write!(f, "{}", n),
            RefId::Text(s) => f.write_str(s),
        }
    }
}

impl RefId {
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            RefId::Num(n) => u32::try_from(*n).ok(),
            RefId::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Human label for a loosely typed JSON value (user objects, ids, names)
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Object(map) => ["email", "name", "username", "id"]
            .iter()
            .find_map(|key| map.get(*key))
            .map(display_value)
            .unwrap_or_default(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// User role chosen at registration / sign-in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Head,
    ProgramManager,
    CommitteeMember,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Head, Role::ProgramManager, Role::CommitteeMember];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Head => "head",
            Role::ProgramManager => "program_manager",
            Role::CommitteeMember => "committee_member",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "program_manager" => Role::ProgramManager,
            "committee_member" => Role::CommitteeMember,
            _ => Role::Head,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Head => "Head of Committee",
            Role::ProgramManager => "Program Manager",
            Role::CommitteeMember => "Committee Member",
        }
    }

    /// Landing route after choosing this role
    pub fn home(&self) -> &'static str {
        match self {
            Role::Head => "/managerdashboard",
            Role::ProgramManager => "/dashboard2",
            Role::CommitteeMember => "/projects",
        }
    }
}

/// Project data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_by: Option<Value>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub manager: Option<Value>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub team: Vec<Value>,
    #[serde(default)]
    pub task_count: Option<u32>,
}

impl Project {
    /// Parsed creation time; accepts RFC 3339 or a bare date
    pub fn created(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.created_at.as_deref()?.trim();
        DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc().fixed_offset())
        })
    }

    pub fn creator_email(&self) -> Option<String> {
        match self.created_by.as_ref()? {
            Value::Object(map) => map.get("email").and_then(Value::as_str).map(str::to_string),
            _ => None,
        }
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub assigned_to: Option<RefId>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub project: Option<RefId>,
    #[serde(default)]
    pub created_by: Option<RefId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: u32,
    #[serde(default)]
    pub parent_task: Option<u32>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Kanban card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    #[serde(default)]
    pub title: String,
}

/// Kanban column as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardList {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// File previously uploaded through `/api/upload-files/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    #[serde(default)]
    pub id: Option<u32>,
    /// Download URL
    pub file: String,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
}

/// Body returned by the upload endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttChart {
    pub id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttTask {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Percent complete, 0..=100
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub dependencies: Vec<u32>,
}

/// Project calendar event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: DateTime<FixedOffset>,
    pub end_date: DateTime<FixedOffset>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_created_parses_rfc3339_and_date() {
        let mut project = Project { id: 1, created_at: Some("2025-05-12T09:30:00Z".into()), ..Default::default() };
        assert!(project.created().is_some());

        project.created_at = Some("2025-05-12".into());
        assert_eq!(project.created().unwrap().date_naive(), NaiveDate::from_ymd_opt(2025, 5, 12).unwrap());

        project.created_at = Some("yesterday".into());
        assert!(project.created().is_none());
    }

    #[test]
    fn test_creator_email() {
        let project: Project = serde_json::from_value(json!({
            "id": 3, "name": "Apollo", "created_by": {"id": 9, "email": "lead@example.com"}
        }))
        .unwrap();
        assert_eq!(project.creator_email().as_deref(), Some("lead@example.com"));

        let bare: Project = serde_json::from_value(json!({"id": 4, "created_by": 9})).unwrap();
        assert_eq!(bare.creator_email(), None);
    }

    #[test]
    fn test_task_accepts_numeric_and_text_refs() {
        let task: Task = serde_json::from_value(json!({
            "id": 1, "title": "Write report", "status": "to do",
            "assigned_to": 7, "project": "12", "due_date": null
        }))
        .unwrap();
        assert_eq!(task.assigned_to, Some(RefId::Num(7)));
        assert_eq!(task.project.as_ref().and_then(RefId::as_u32), Some(12));
        assert_eq!(task.project.unwrap().to_string(), "12");
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("Dana")), "Dana");
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!({"id": 5, "email": "a@b.co"})), "a@b.co");
        assert_eq!(display_value(&Value::Null), "");
    }

    #[test]
    fn test_role_round_trip_and_home() {
        for role in Role::ALL {
            assert_eq!(Role::from_str(role.as_str()), role);
        }
        assert_eq!(Role::from_str("unknown"), Role::Head);
        assert_eq!(Role::ProgramManager.home(), "/dashboard2");
    }

    #[test]
    fn test_gantt_task_dates() {
        let task: GanttTask = serde_json::from_value(json!({
            "id": 1, "name": "Design", "start_date": "2025-05-01", "end_date": "2025-05-04",
            "progress": 40, "dependencies": [2, 3]
        }))
        .unwrap();
        assert_eq!(task.start_date, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        assert_eq!(task.dependencies, vec![2, 3]);
    }
}
