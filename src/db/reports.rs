//! Derived read-only views over the stored rows. Nothing here writes.

use chrono::{Days, NaiveDate};
use tracing::debug;

use super::tasks::TASK_LISTING_SELECT;
use super::Database;
use crate::error::StoreResult;
use crate::models::{
    CompletionEstimate, DashboardSummary, LongestTask, MemberStatusCount, ProjectTimeline,
    StatusCount, TaskCompletion, TaskListing, TaskStatus, WorkloadRow,
};
use crate::schedule;

const COMPLETED: &str = "Completed";

impl Database {
    /// Open tasks due between `today` and `today + within_days`, soonest first
    pub async fn upcoming_tasks(&self, today: NaiveDate, within_days: u32) -> StoreResult<Vec<TaskListing>> {
        let horizon = today
            .checked_add_days(Days::new(u64::from(within_days)))
            .unwrap_or(NaiveDate::MAX);

        let sql = format!(
            "{TASK_LISTING_SELECT} WHERE t.status != ? AND t.due_date >= ? AND t.due_date <= ? ORDER BY t.due_date ASC, t.id ASC"
        );
        let tasks = sqlx::query_as::<_, TaskListing>(&sql)
            .bind(COMPLETED)
            .bind(today)
            .bind(horizon)
            .fetch_all(self.get_pool())
            .await?;

        debug!(%today, within_days, count = tasks.len(), "upcoming tasks");
        Ok(tasks)
    }

    /// Open tasks whose due date has already passed, oldest first
    pub async fn overdue_tasks(&self, today: NaiveDate) -> StoreResult<Vec<TaskListing>> {
        let sql = format!(
            "{TASK_LISTING_SELECT} WHERE t.status != ? AND t.due_date < ? ORDER BY t.due_date ASC, t.id ASC"
        );
        let tasks = sqlx::query_as::<_, TaskListing>(&sql)
            .bind(COMPLETED)
            .bind(today)
            .fetch_all(self.get_pool())
            .await?;
        Ok(tasks)
    }

    /// Assigned task count per member name; members without tasks are absent
    pub async fn workload_by_member(&self) -> StoreResult<Vec<WorkloadRow>> {
        let rows = sqlx::query_as::<_, WorkloadRow>(
            r#"
            SELECT tm.name AS assignee_name, COUNT(t.id) AS task_count
            FROM tasks t
            JOIN team_members tm ON t.assigned_to = tm.id
            GROUP BY tm.name
            ORDER BY tm.name ASC
            "#,
        )
        .fetch_all(self.get_pool())
        .await?;
        Ok(rows)
    }

    pub async fn workload_by_member_and_status(&self) -> StoreResult<Vec<MemberStatusCount>> {
        let rows = sqlx::query_as::<_, MemberStatusCount>(
            r#"
            SELECT tm.name AS assignee_name, t.status AS status, COUNT(t.id) AS task_count
            FROM tasks t
            JOIN team_members tm ON t.assigned_to = tm.id
            GROUP BY tm.name, t.status
            ORDER BY tm.name ASC, t.status ASC
            "#,
        )
        .fetch_all(self.get_pool())
        .await?;
        Ok(rows)
    }

    pub async fn project_status_distribution(&self) -> StoreResult<Vec<StatusCount>> {
        let rows = sqlx::query_as::<_, StatusCount>(
            r#"
            SELECT status, COUNT(*) AS count
            FROM projects
            GROUP BY status
            ORDER BY count DESC, status ASC
            "#,
        )
        .fetch_all(self.get_pool())
        .await?;
        Ok(rows)
    }

    pub async fn dashboard_summary(&self) -> StoreResult<DashboardSummary> {
        let total_projects = self.count("SELECT COUNT(*) FROM projects").await?;
        let (open_tasks,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks WHERE status != ?")
            .bind(COMPLETED)
            .fetch_one(self.get_pool())
            .await?;
        let team_members = self.count("SELECT COUNT(*) FROM team_members").await?;
        let (average_progress,): (Option<f64>,) = sqlx::query_as("SELECT AVG(progress) FROM projects")
            .fetch_one(self.get_pool())
            .await?;

        Ok(DashboardSummary {
            total_projects,
            open_tasks,
            team_members,
            average_progress: average_progress.unwrap_or(0.0),
        })
    }

    /// The project with each of its tasks, in insertion order
    pub async fn project_timeline(&self, project_id: i64) -> StoreResult<ProjectTimeline> {
        let project = self.get_project(project_id).await?;

        let sql = format!("{TASK_LISTING_SELECT} WHERE t.project_id = ? ORDER BY t.id ASC");
        let tasks = sqlx::query_as::<_, TaskListing>(&sql)
            .bind(project_id)
            .fetch_all(self.get_pool())
            .await?;

        Ok(ProjectTimeline { project, tasks })
    }

    pub async fn estimate_completion(&self, project_id: i64, today: NaiveDate) -> StoreResult<CompletionEstimate> {
        let project = self.get_project(project_id).await?;
        let estimate = schedule::estimate_completion(&project, today);
        debug!(project_id, %estimate, "completion estimate");
        Ok(estimate)
    }

    /// `None` when the project has no tasks
    pub async fn longest_task(&self, project_id: i64) -> StoreResult<Option<LongestTask>> {
        self.get_project(project_id).await?;
        let tasks = self.list_project_tasks(project_id).await?;
        Ok(schedule::longest_task(&tasks))
    }

    /// Completed versus total tasks; `None` when the project has no tasks
    pub async fn task_completion(&self, project_id: i64) -> StoreResult<Option<TaskCompletion>> {
        self.get_project(project_id).await?;
        let tasks = self.list_project_tasks(project_id).await?;
        if tasks.is_empty() {
            return Ok(None);
        }

        let total = tasks.len() as i64;
        let completed = tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Completed)
            .count() as i64;

        Ok(Some(TaskCompletion {
            completed,
            total,
            percent: completed as f64 / total as f64 * 100.0,
        }))
    }
}
