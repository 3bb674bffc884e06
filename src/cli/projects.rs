use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use devtrack::models::{ProjectDraft, ProjectStatus};
use devtrack::Database;

use super::output::Output;

#[derive(Args, Debug)]
pub struct ProjectFields {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Start date, YYYY-MM-DD
    #[arg(long)]
    pub start: NaiveDate,
    /// End date, YYYY-MM-DD
    #[arg(long)]
    pub end: NaiveDate,
    /// Planning, In Progress, On Hold, Completed or Cancelled
    #[arg(long, default_value = "Planning")]
    pub status: ProjectStatus,
    /// Percent complete; clamped to 0-100
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub progress: f64,
}

impl From<ProjectFields> for ProjectDraft {
    fn from(fields: ProjectFields) -> Self {
        Self {
            name: fields.name,
            description: fields.description,
            start_date: fields.start,
            end_date: fields.end,
            status: fields.status,
            progress: fields.progress,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ProjectAction {
    /// Create a project
    Add(ProjectFields),
    /// Overwrite every field of a project
    Edit {
        id: i64,
        #[command(flatten)]
        fields: ProjectFields,
    },
    List,
    Show { id: i64 },
}

pub async fn run(db: &Database, action: ProjectAction, out: &Output) -> Result<()> {
    match action {
        ProjectAction::Add(fields) => {
            let id = db.create_project(&fields.into()).await?;
            out.created("project", id)
        }
        ProjectAction::Edit { id, fields } => {
            db.update_project(id, &fields.into()).await?;
            out.updated("project", id)
        }
        ProjectAction::List => out.rows(&db.list_projects().await?),
        ProjectAction::Show { id } => out.record(&db.get_project(id).await?),
    }
}
