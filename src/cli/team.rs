use anyhow::Result;
use clap::{Args, Subcommand};

use devtrack::models::TeamMemberDraft;
use devtrack::Database;

use super::output::Output;

#[derive(Args, Debug)]
pub struct MemberFields {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub role: String,
    #[arg(long)]
    pub email: Option<String>,
}

impl From<MemberFields> for TeamMemberDraft {
    fn from(fields: MemberFields) -> Self {
        Self {
            name: fields.name,
            role: fields.role,
            email: fields.email,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum MemberAction {
    /// Add a team member
    Add(MemberFields),
    /// Overwrite every field of a team member
    Edit {
        id: i64,
        #[command(flatten)]
        fields: MemberFields,
    },
    List,
    Show { id: i64 },
}

pub async fn run(db: &Database, action: MemberAction, out: &Output) -> Result<()> {
    match action {
        MemberAction::Add(fields) => {
            let id = db.create_team_member(&fields.into()).await?;
            out.created("team member", id)
        }
        MemberAction::Edit { id, fields } => {
            db.update_team_member(id, &fields.into()).await?;
            out.updated("team member", id)
        }
        MemberAction::List => out.rows(&db.list_team_members().await?),
        MemberAction::Show { id } => out.record(&db.get_team_member(id).await?),
    }
}
