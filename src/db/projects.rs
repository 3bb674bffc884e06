use tracing::{debug, info};

use super::Database;
use crate::error::{StoreError, StoreResult};
use crate::models::{Project, ProjectDraft};

impl Database {
    pub async fn create_project(&self, draft: &ProjectDraft) -> StoreResult<i64> {
        let project = draft.validated()?;

        let id = sqlx::query(
            r#"
            INSERT INTO projects (name, description, start_date, end_date, status, progress)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.name.as_str())
        .bind(project.description.as_deref())
        .bind(project.start_date)
        .bind(project.end_date)
        .bind(project.status.as_str())
        .bind(project.progress)
        .execute(self.get_pool())
        .await?
        .last_insert_rowid();

        info!(id, name = %project.name, "created project");
        Ok(id)
    }

    /// Overwrite every field of an existing project
    pub async fn update_project(&self, id: i64, draft: &ProjectDraft) -> StoreResult<()> {
        let project = draft.validated()?;

        let result = sqlx::query(
            r#"
            UPDATE projects
            SET name = ?, description = ?, start_date = ?, end_date = ?, status = ?, progress = ?
            WHERE id = ?
            "#,
        )
        .bind(project.name.as_str())
        .bind(project.description.as_deref())
        .bind(project.start_date)
        .bind(project.end_date)
        .bind(project.status.as_str())
        .bind(project.progress)
        .bind(id)
        .execute(self.get_pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("project", id));
        }

        info!(id, "updated project");
        Ok(())
    }

    pub async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY id ASC")
            .fetch_all(self.get_pool())
            .await?;

        debug!(count = projects.len(), "listed projects");
        Ok(projects)
    }

    pub async fn get_project(&self, id: i64) -> StoreResult<Project> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(self.get_pool())
            .await?
            .ok_or_else(|| StoreError::not_found("project", id))
    }
}
