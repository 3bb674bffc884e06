use tracing::{debug, info};

use super::Database;
use crate::error::{StoreError, StoreResult};
use crate::models::{Task, TaskDraft, TaskFilter, TaskListing};

/// Task columns plus the joined project and assignee names.
pub(super) const TASK_LISTING_SELECT: &str = r#"
    SELECT t.id, t.project_id, t.name, t.description, t.status, t.priority,
           t.start_date, t.due_date, t.assigned_to, t.progress,
           p.name AS project_name, tm.name AS assignee_name
    FROM tasks t
    LEFT JOIN projects p ON t.project_id = p.id
    LEFT JOIN team_members tm ON t.assigned_to = tm.id
"#;

impl Database {
    // References are checked up front so a bad id reads as not-found, not a constraint failure.
    async fn check_task_references(&self, task: &TaskDraft) -> StoreResult<()> {
        self.exists("projects", "project", task.project_id).await?;
        if let Some(member_id) = task.assigned_to {
            self.exists("team_members", "team member", member_id).await?;
        }
        Ok(())
    }

    pub async fn create_task(&self, draft: &TaskDraft) -> StoreResult<i64> {
        let task = draft.validated()?;
        self.check_task_references(&task).await?;

        let id = sqlx::query(
            r#"
            INSERT INTO tasks (project_id, name, description, status, priority, start_date, due_date, assigned_to, progress)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(task.project_id)
        .bind(task.name.as_str())
        .bind(task.description.as_deref())
        .bind(task.status.as_str())
        .bind(task.priority.as_str())
        .bind(task.start_date)
        .bind(task.due_date)
        .bind(task.assigned_to)
        .bind(task.progress)
        .execute(self.get_pool())
        .await?
        .last_insert_rowid();

        info!(id, project_id = task.project_id, name = %task.name, "created task");
        Ok(id)
    }

    /// Overwrite every field of an existing task
    pub async fn update_task(&self, id: i64, draft: &TaskDraft) -> StoreResult<()> {
        let task = draft.validated()?;
        self.exists("tasks", "task", id).await?;
        self.check_task_references(&task).await?;

        sqlx::query(
            r#"
            UPDATE tasks
            SET project_id = ?, name = ?, description = ?, status = ?, priority = ?,
                start_date = ?, due_date = ?, assigned_to = ?, progress = ?
            WHERE id = ?
            "#,
        )
        .bind(task.project_id)
        .bind(task.name.as_str())
        .bind(task.description.as_deref())
        .bind(task.status.as_str())
        .bind(task.priority.as_str())
        .bind(task.start_date)
        .bind(task.due_date)
        .bind(task.assigned_to)
        .bind(task.progress)
        .bind(id)
        .execute(self.get_pool())
        .await?;

        info!(id, "updated task");
        Ok(())
    }

    /// List tasks, narrowed by project name and/or exact status
    pub async fn list_tasks(&self, filter: &TaskFilter) -> StoreResult<Vec<TaskListing>> {
        let sql = format!(
            "{TASK_LISTING_SELECT} WHERE (?1 IS NULL OR p.name = ?1) AND (?2 IS NULL OR t.status = ?2) ORDER BY t.id ASC"
        );
        let tasks = sqlx::query_as::<_, TaskListing>(&sql)
            .bind(filter.project_name.as_deref())
            .bind(filter.status.map(|s| s.as_str()))
            .fetch_all(self.get_pool())
            .await?;

        debug!(count = tasks.len(), ?filter, "listed tasks");
        Ok(tasks)
    }

    pub async fn get_task(&self, id: i64) -> StoreResult<Task> {
        sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(self.get_pool())
            .await?
            .ok_or_else(|| StoreError::not_found("task", id))
    }

    pub async fn list_project_tasks(&self, project_id: i64) -> StoreResult<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE project_id = ? ORDER BY id ASC")
            .bind(project_id)
            .fetch_all(self.get_pool())
            .await?;
        Ok(tasks)
    }
}
