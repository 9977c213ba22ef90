//! Gantt Chart Layout
//!
//! Converts backend gantt tasks into timeline rows and bar geometry.

use chrono::NaiveDate;

use crate::api::NewGanttTask;
use crate::models::GanttTask;

/// One rendered row
#[derive(Debug, Clone, PartialEq)]
pub struct GanttRow {
    pub id: u32,
    pub text: String,
    pub start_date: NaiveDate,
    /// Whole days from start to end, never negative
    pub duration: i64,
    /// Fraction complete, 0.0..=1.0
    pub progress: f64,
    /// Comma-separated predecessor ids
    pub dependencies: String,
}

impl From<&GanttTask> for GanttRow {
    fn from(task: &GanttTask) -> Self {
        Self {
            id: task.id,
            text: task.name.clone(),
            start_date: task.start_date,
            duration: (task.end_date - task.start_date).num_days().max(0),
            progress: f64::from(task.progress.min(100)) / 100.0,
            dependencies: task
                .dependencies
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl GanttRow {
    pub fn progress_label(&self) -> String {
        format!("{}%", (self.progress * 100.0).round() as u32)
    }
}

pub fn rows(tasks: &[GanttTask]) -> Vec<GanttRow> {
    tasks.iter().map(GanttRow::from).collect()
}

/// Horizontal extent shared by all bars
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    pub origin: NaiveDate,
    /// Days covered, at least one
    pub span_days: i64,
}

impl Timeline {
    pub fn for_rows(rows: &[GanttRow]) -> Option<Self> {
        let origin = rows.iter().map(|r| r.start_date).min()?;
        let end = rows
            .iter()
            .map(|r| r.start_date + chrono::Duration::days(r.duration))
            .max()?;
        Some(Self { origin, span_days: (end - origin).num_days().max(1) })
    }

    /// Bar start as a percentage of the timeline width
    pub fn offset_pct(&self, row: &GanttRow) -> f64 {
        (row.start_date - self.origin).num_days() as f64 * 100.0 / self.span_days as f64
    }

    /// Bar length as a percentage; zero-day tasks still get a sliver
    pub fn width_pct(&self, row: &GanttRow) -> f64 {
        (row.duration.max(1) as f64 * 100.0 / self.span_days as f64).min(100.0 - self.offset_pct(row))
    }
}

/// Add-task form state, all fields as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GanttDraft {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub progress: String,
}

impl GanttDraft {
    /// Form-level check; the chart id plays no part in it
    pub fn validate(&self) -> Result<(), String> {
        self.to_request(0).map(|_| ())
    }

    pub fn to_request(&self, gantt_chart: u32) -> Result<NewGanttTask, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Task name is required".to_string());
        }
        let parse = |raw: &str, label: &str| {
            NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| format!("{} is required", label))
        };
        let start_date = parse(&self.start_date, "Start date")?;
        let end_date = parse(&self.end_date, "End date")?;
        if end_date < start_date {
            return Err("End date must not be before start date".to_string());
        }
        let progress = match self.progress.trim() {
            "" => 0,
            raw => raw
                .parse::<u32>()
                .ok()
                .filter(|p| *p <= 100)
                .ok_or_else(|| "Progress must be between 0 and 100".to_string())?,
        };
        Ok(NewGanttTask {
            name: name.to_string(),
            start_date,
            end_date,
            progress,
            dependencies: Vec::new(),
            gantt_chart,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
    }

    fn task(id: u32, start: u32, end: u32, progress: u32, deps: Vec<u32>) -> GanttTask {
        GanttTask { id, name: format!("Task {}", id), start_date: date(start), end_date: date(end), progress, dependencies: deps }
    }

    #[test]
    fn test_row_mapping() {
        let row = GanttRow::from(&task(1, 1, 4, 40, vec![2, 3]));
        assert_eq!(row.text, "Task 1");
        assert_eq!(row.duration, 3);
        assert!((row.progress - 0.4).abs() < f64::EPSILON);
        assert_eq!(row.dependencies, "2,3");
        assert_eq!(row.progress_label(), "40%");
    }

    #[test]
    fn test_inverted_dates_clamp_to_zero() {
        let row = GanttRow::from(&task(1, 10, 5, 150, vec![]));
        assert_eq!(row.duration, 0);
        assert_eq!(row.progress, 1.0);
        assert_eq!(row.dependencies, "");
    }

    #[test]
    fn test_timeline_geometry() {
        let rows = rows(&[task(1, 1, 5, 0, vec![]), task(2, 5, 11, 0, vec![1])]);
        let timeline = Timeline::for_rows(&rows).unwrap();
        assert_eq!(timeline.origin, date(1));
        assert_eq!(timeline.span_days, 10);
        assert_eq!(timeline.offset_pct(&rows[0]), 0.0);
        assert_eq!(timeline.width_pct(&rows[0]), 40.0);
        assert_eq!(timeline.offset_pct(&rows[1]), 40.0);
        assert_eq!(timeline.width_pct(&rows[1]), 60.0);

        assert!(Timeline::for_rows(&[]).is_none());
    }

    #[test]
    fn test_draft_to_request() {
        let draft = GanttDraft {
            name: " Design ".into(),
            start_date: "2025-05-01".into(),
            end_date: "2025-05-03".into(),
            progress: "25".into(),
        };
        let request = draft.to_request(8).unwrap();
        assert_eq!(request.name, "Design");
        assert_eq!(request.progress, 25);
        assert_eq!(request.gantt_chart, 8);

        let missing = GanttDraft { start_date: String::new(), ..draft.clone() };
        assert_eq!(missing.to_request(8).unwrap_err(), "Start date is required");

        let backwards = GanttDraft { end_date: "2025-04-30".into(), ..draft.clone() };
        assert!(backwards.to_request(8).is_err());

        let too_much = GanttDraft { progress: "101".into(), ..draft.clone() };
        assert_eq!(too_much.to_request(8).unwrap_err(), "Progress must be between 0 and 100");

        assert_eq!(draft.validate(), Ok(()));
        assert_eq!(GanttDraft::default().validate(), Err("Task name is required".to_string()));
    }
}
