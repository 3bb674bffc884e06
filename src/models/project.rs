use chrono::{Days, NaiveDate};
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use super::{clamp_progress, decode_error, require_text, ProjectStatus};
use crate::error::StoreResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ProjectStatus,
    pub progress: f64,
}

/// Every editable field of a project; used for both insert and full overwrite.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ProjectStatus,
    pub progress: f64,
}

impl ProjectDraft {
    /// A new project starting today, planned for thirty days.
    pub fn new(name: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            name: name.into(),
            description: None,
            start_date: today,
            end_date: today.checked_add_days(Days::new(30)).unwrap_or(NaiveDate::MAX),
            status: ProjectStatus::Planning,
            progress: 0.0,
        }
    }

    /// Check required fields and return a copy ready to persist.
    pub fn validated(&self) -> StoreResult<Self> {
        require_text("project name", &self.name)?;
        Ok(Self {
            progress: clamp_progress(self.progress)?,
            ..self.clone()
        })
    }
}

impl From<&Project> for ProjectDraft {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            start_date: project.start_date,
            end_date: project.end_date,
            status: project.status,
            progress: project.progress,
        }
    }
}

impl<'r> FromRow<'r, SqliteRow> for Project {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let status: String = row.try_get("status")?;
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
            status: status.parse().map_err(decode_error)?,
            progress: row.try_get("progress")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn default_end_date_saturates_at_calendar_end() {
        let draft = ProjectDraft::new("Forever", NaiveDate::MAX);
        assert_eq!(draft.end_date, NaiveDate::MAX);
    }

    #[test]
    fn empty_name_is_rejected() {
        let draft = ProjectDraft::new("", today());
        assert!(matches!(draft.validated(), Err(StoreError::Validation(_))));
    }

    #[test]
    fn validation_clamps_progress_and_keeps_the_rest() {
        let mut draft = ProjectDraft::new("Website", today());
        draft.progress = 140.0;
        let valid = draft.validated().unwrap();
        assert_eq!(valid.progress, 100.0);
        assert_eq!(valid.name, "Website");
        assert_eq!(valid.end_date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    }
}
