use chrono::{Days, NaiveDate};
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use super::{clamp_progress, decode_error, require_text, Priority, TaskStatus};
use crate::error::StoreResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub assigned_to: Option<i64>,
    pub progress: f64,
}

impl Task {
    /// Planned length in days, `due_date - start_date`.
    pub fn duration_days(&self) -> i64 {
        (self.due_date - self.start_date).num_days()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub project_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub assigned_to: Option<i64>,
    pub progress: f64,
}

impl TaskDraft {
    /// An unassigned, not-started task due a week from `today`.
    pub fn new(project_id: i64, name: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            project_id,
            name: name.into(),
            description: None,
            status: TaskStatus::NotStarted,
            priority: Priority::Medium,
            start_date: today,
            due_date: today.checked_add_days(Days::new(7)).unwrap_or(NaiveDate::MAX),
            assigned_to: None,
            progress: 0.0,
        }
    }

    pub fn validated(&self) -> StoreResult<Self> {
        require_text("task name", &self.name)?;
        Ok(Self {
            progress: clamp_progress(self.progress)?,
            ..self.clone()
        })
    }
}

/// Optional filters for task listings; set filters combine with AND.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub project_name: Option<String>,
    pub status: Option<TaskStatus>,
}

/// A task joined with the display names of its project and assignee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskListing {
    #[serde(flatten)]
    pub task: Task,
    pub project_name: Option<String>,
    pub assignee_name: Option<String>,
}

impl<'r> FromRow<'r, SqliteRow> for Task {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let status: String = row.try_get("status")?;
        let priority: String = row.try_get("priority")?;
        Ok(Self {
            id: row.try_get("id")?,
            project_id: row.try_get("project_id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            status: status.parse().map_err(decode_error)?,
            priority: priority.parse().map_err(decode_error)?,
            start_date: row.try_get("start_date")?,
            due_date: row.try_get("due_date")?,
            assigned_to: row.try_get("assigned_to")?,
            progress: row.try_get("progress")?,
        })
    }
}

impl<'r> FromRow<'r, SqliteRow> for TaskListing {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            task: Task::from_row(row)?,
            project_name: row.try_get("project_name")?,
            assignee_name: row.try_get("assignee_name")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_counts_calendar_days() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        let mut draft = TaskDraft::new(1, "Spike", today);
        draft.due_date = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let task = Task {
            id: 1,
            project_id: draft.project_id,
            name: draft.name,
            description: None,
            status: draft.status,
            priority: draft.priority,
            start_date: draft.start_date,
            due_date: draft.due_date,
            assigned_to: None,
            progress: 0.0,
        };
        assert_eq!(task.duration_days(), 4);
    }

    #[test]
    fn default_due_date_saturates_at_calendar_end() {
        let draft = TaskDraft::new(1, "Someday", NaiveDate::MAX - Days::new(2));
        assert_eq!(draft.due_date, NaiveDate::MAX);
    }

    #[test]
    fn negative_progress_clamps_to_zero() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut draft = TaskDraft::new(1, "Write docs", today);
        draft.progress = -12.0;
        assert_eq!(draft.validated().unwrap().progress, 0.0);
    }

    #[test]
    fn blank_task_name_is_rejected() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(TaskDraft::new(1, "  ", today).validated().is_err());
    }
}
