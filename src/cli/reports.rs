use anyhow::Result;
use chrono::NaiveDate;
use clap::Subcommand;

use devtrack::Database;

use super::output::Output;

#[derive(Subcommand, Debug)]
pub enum ReportAction {
    /// Open tasks due within the next few days
    Upcoming {
        /// Window length in days; defaults to UPCOMING_WINDOW_DAYS
        #[arg(long)]
        days: Option<u32>,
    },
    /// Open tasks already past their due date
    Overdue,
    /// Assigned tasks per team member
    Workload,
    /// Assigned tasks per team member and status
    WorkloadStatus,
    /// Number of projects in each status
    Status,
    /// Headline counts for the dashboard
    Summary,
    /// A project with all of its tasks
    Timeline { project_id: i64 },
    /// Extrapolated finish date from the project's progress
    Estimate { project_id: i64 },
    /// The project's longest task
    Critical { project_id: i64 },
    /// Completed versus total tasks of a project
    Completion { project_id: i64 },
}

pub async fn run(
    db: &Database,
    action: ReportAction,
    today: NaiveDate,
    default_window: u32,
    out: &Output,
) -> Result<()> {
    match action {
        ReportAction::Upcoming { days } => {
            let tasks = db.upcoming_tasks(today, days.unwrap_or(default_window)).await?;
            out.rows(&tasks)
        }
        ReportAction::Overdue => out.rows(&db.overdue_tasks(today).await?),
        ReportAction::Workload => out.rows(&db.workload_by_member().await?),
        ReportAction::WorkloadStatus => out.rows(&db.workload_by_member_and_status().await?),
        ReportAction::Status => out.rows(&db.project_status_distribution().await?),
        ReportAction::Summary => out.record(&db.dashboard_summary().await?),
        ReportAction::Timeline { project_id } => {
            let timeline = db.project_timeline(project_id).await?;
            out.record(&timeline.project)?;
            out.rows(&timeline.tasks)
        }
        ReportAction::Estimate { project_id } => {
            out.summary(&db.estimate_completion(project_id, today).await?)
        }
        ReportAction::Critical { project_id } => {
            let longest = db.longest_task(project_id).await?;
            out.optional(longest.as_ref(), "project has no tasks")
        }
        ReportAction::Completion { project_id } => {
            let completion = db.task_completion(project_id).await?;
            out.optional(completion.as_ref(), "project has no tasks")
        }
    }
}
