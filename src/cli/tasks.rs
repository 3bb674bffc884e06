use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use devtrack::models::{Priority, TaskDraft, TaskFilter, TaskStatus};
use devtrack::Database;

use super::output::Output;

#[derive(Args, Debug)]
pub struct TaskFields {
    #[arg(long)]
    pub project_id: i64,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Not Started, In Progress, Blocked or Completed
    #[arg(long, default_value = "Not Started")]
    pub status: TaskStatus,
    /// Low, Medium or High
    #[arg(long, default_value = "Medium")]
    pub priority: Priority,
    #[arg(long)]
    pub start: NaiveDate,
    #[arg(long)]
    pub due: NaiveDate,
    /// Team member id; omit to leave the task unassigned
    #[arg(long)]
    pub assignee: Option<i64>,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub progress: f64,
}

impl From<TaskFields> for TaskDraft {
    fn from(fields: TaskFields) -> Self {
        Self {
            project_id: fields.project_id,
            name: fields.name,
            description: fields.description,
            status: fields.status,
            priority: fields.priority,
            start_date: fields.start,
            due_date: fields.due,
            assigned_to: fields.assignee,
            progress: fields.progress,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum TaskAction {
    /// Create a task under a project
    Add(TaskFields),
    /// Overwrite every field of a task
    Edit {
        id: i64,
        #[command(flatten)]
        fields: TaskFields,
    },
    /// List tasks with their project and assignee names
    List {
        /// Only tasks of the project with exactly this name
        #[arg(long)]
        project: Option<String>,
        /// Only tasks with exactly this status
        #[arg(long)]
        status: Option<TaskStatus>,
    },
    Show { id: i64 },
}

pub async fn run(db: &Database, action: TaskAction, out: &Output) -> Result<()> {
    match action {
        TaskAction::Add(fields) => {
            let id = db.create_task(&fields.into()).await?;
            out.created("task", id)
        }
        TaskAction::Edit { id, fields } => {
            db.update_task(id, &fields.into()).await?;
            out.updated("task", id)
        }
        TaskAction::List { project, status } => {
            let filter = TaskFilter {
                project_name: project,
                status,
            };
            out.rows(&db.list_tasks(&filter).await?)
        }
        TaskAction::Show { id } => out.record(&db.get_task(id).await?),
    }
}
