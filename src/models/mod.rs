mod project;
mod report;
mod status;
mod task;
mod team_member;

pub use project::{Project, ProjectDraft};
pub use report::{
    CompletionEstimate, DashboardSummary, LongestTask, MemberStatusCount, ProjectTimeline,
    ScheduleVerdict, StatusCount, TaskCompletion, WorkloadRow,
};
pub use status::{Priority, ProjectStatus, TaskStatus};
pub use task::{Task, TaskDraft, TaskFilter, TaskListing};
pub use team_member::{TeamMember, TeamMemberDraft};

use crate::error::{StoreError, StoreResult};

fn require_text(field: &str, value: &str) -> StoreResult<()> {
    if value.trim().is_empty() {
        return Err(StoreError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// Clamp a percentage into [0, 100]; NaN and infinities are rejected.
fn clamp_progress(value: f64) -> StoreResult<f64> {
    if !value.is_finite() {
        return Err(StoreError::validation(format!(
            "progress must be a number, got {value}"
        )));
    }
    Ok(value.clamp(0.0, 100.0))
}

fn decode_error(err: StoreError) -> sqlx::Error {
    sqlx::Error::Decode(Box::new(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(clamp_progress(-5.0).unwrap(), 0.0);
        assert_eq!(clamp_progress(42.5).unwrap(), 42.5);
        assert_eq!(clamp_progress(180.0).unwrap(), 100.0);
        assert!(clamp_progress(f64::NAN).is_err());
    }

    #[test]
    fn whitespace_only_text_is_missing() {
        assert!(require_text("name", "   ").is_err());
        assert!(require_text("name", "").is_err());
        assert!(require_text("name", " x ").is_ok());
    }
}
