use tracing::{debug, info};

use super::Database;
use crate::error::{StoreError, StoreResult};
use crate::models::{TeamMember, TeamMemberDraft};

impl Database {
    pub async fn create_team_member(&self, draft: &TeamMemberDraft) -> StoreResult<i64> {
        let member = draft.validated()?;

        let id = sqlx::query("INSERT INTO team_members (name, role, email) VALUES (?, ?, ?)")
            .bind(member.name.as_str())
            .bind(member.role.as_str())
            .bind(member.email.as_deref())
            .execute(self.get_pool())
            .await?
            .last_insert_rowid();

        info!(id, name = %member.name, "created team member");
        Ok(id)
    }

    pub async fn update_team_member(&self, id: i64, draft: &TeamMemberDraft) -> StoreResult<()> {
        let member = draft.validated()?;

        let result = sqlx::query("UPDATE team_members SET name = ?, role = ?, email = ? WHERE id = ?")
            .bind(member.name.as_str())
            .bind(member.role.as_str())
            .bind(member.email.as_deref())
            .bind(id)
            .execute(self.get_pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("team member", id));
        }

        info!(id, "updated team member");
        Ok(())
    }

    pub async fn list_team_members(&self) -> StoreResult<Vec<TeamMember>> {
        let members = sqlx::query_as::<_, TeamMember>("SELECT * FROM team_members ORDER BY id ASC")
            .fetch_all(self.get_pool())
            .await?;

        debug!(count = members.len(), "listed team members");
        Ok(members)
    }

    pub async fn get_team_member(&self, id: i64) -> StoreResult<TeamMember> {
        sqlx::query_as::<_, TeamMember>("SELECT * FROM team_members WHERE id = ?")
            .bind(id)
            .fetch_optional(self.get_pool())
            .await?
            .ok_or_else(|| StoreError::not_found("team member", id))
    }
}
