use serde::Serialize;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Serialize)]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMemberDraft {
    pub name: String,
    pub role: String,
    pub email: Option<String>,
}

impl TeamMemberDraft {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            email: None,
        }
    }

    pub fn validated(&self) -> crate::error::StoreResult<Self> {
        super::require_text("team member name", &self.name)?;
        super::require_text("team member role", &self.role)?;
        Ok(self.clone())
    }
}
