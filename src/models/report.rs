use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use super::{decode_error, Project, ProjectStatus, Task, TaskListing, TaskStatus};

/// Number of tasks assigned to one team member.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadRow {
    pub assignee_name: String,
    pub task_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberStatusCount {
    pub assignee_name: String,
    pub status: TaskStatus,
    pub task_count: i64,
}

impl<'r> FromRow<'r, SqliteRow> for MemberStatusCount {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let status: String = row.try_get("status")?;
        Ok(Self {
            assignee_name: row.try_get("assignee_name")?,
            status: status.parse().map_err(decode_error)?,
            task_count: row.try_get("task_count")?,
        })
    }
}

/// Number of projects in one status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: ProjectStatus,
    pub count: i64,
}

impl<'r> FromRow<'r, SqliteRow> for StatusCount {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let status: String = row.try_get("status")?;
        Ok(Self {
            status: status.parse().map_err(decode_error)?,
            count: row.try_get("count")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_projects: i64,
    pub open_tasks: i64,
    pub team_members: i64,
    pub average_progress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectTimeline {
    pub project: Project,
    pub tasks: Vec<TaskListing>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskCompletion {
    pub completed: i64,
    pub total: i64,
    pub percent: f64,
}

/// The longest-duration task of a project, a stand-in for a critical path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongestTask {
    #[serde(flatten)]
    pub task: Task,
    pub duration_days: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum ScheduleVerdict {
    OnTime,
    Late { days: i64 },
}

impl fmt::Display for ScheduleVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleVerdict::OnTime => write!(f, "on time"),
            ScheduleVerdict::Late { days: 1 } => write!(f, "late by 1 day"),
            ScheduleVerdict::Late { days } => write!(f, "late by {days} days"),
        }
    }
}

/// Linear extrapolation of a project's finish date from its recorded progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "estimate", rename_all = "snake_case")]
pub enum CompletionEstimate {
    InsufficientData,
    Estimated {
        elapsed_days: i64,
        estimated_total_days: f64,
        estimated_completion: NaiveDate,
        end_date: NaiveDate,
        verdict: ScheduleVerdict,
    },
}

impl fmt::Display for CompletionEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionEstimate::InsufficientData => write!(f, "no estimate available: insufficient data"),
            CompletionEstimate::Estimated {
                estimated_completion,
                verdict,
                ..
            } => write!(f, "estimated completion {estimated_completion}, {verdict}"),
        }
    }
}
