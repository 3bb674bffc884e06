pub mod output;
pub mod projects;
pub mod reports;
pub mod tasks;
pub mod team;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use self::projects::ProjectAction;
use self::reports::ReportAction;
use self::tasks::TaskAction;
use self::team::MemberAction;

#[derive(Parser, Debug)]
#[command(name = "devtrack", version, about = "Track projects, tasks and team workload")]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    /// Log store activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(subcommand)]
    Project(ProjectAction),
    #[command(subcommand)]
    Member(MemberAction),
    #[command(subcommand)]
    Task(TaskAction),
    #[command(subcommand)]
    Report(ReportAction),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use devtrack::models::{ProjectDraft, TaskDraft, TaskStatus};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_task_filters_exactly() {
        let cli = Cli::try_parse_from([
            "devtrack", "task", "list", "--project", "Website", "--status", "In Progress",
        ])
        .unwrap();
        match cli.command {
            Command::Task(TaskAction::List { project, status }) => {
                assert_eq!(project.as_deref(), Some("Website"));
                assert_eq!(status, Some(TaskStatus::InProgress));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(Cli::try_parse_from(["devtrack", "task", "list", "--status", "completed"]).is_err());
    }

    #[test]
    fn negative_progress_reaches_the_store_clamp() {
        let cli = Cli::try_parse_from([
            "devtrack", "project", "add", "--name", "X", "--start", "2024-01-01", "--end",
            "2024-02-01", "--progress", "-5",
        ])
        .unwrap();
        let Command::Project(ProjectAction::Add(fields)) = cli.command else {
            panic!("expected project add");
        };
        assert_eq!(fields.progress, -5.0);
        let draft = ProjectDraft::from(fields).validated().unwrap();
        assert_eq!(draft.progress, 0.0);

        let cli = Cli::try_parse_from([
            "devtrack", "task", "add", "--project-id", "1", "--name", "Y", "--start",
            "2024-01-01", "--due", "2024-01-08", "--progress", "-20",
        ])
        .unwrap();
        let Command::Task(TaskAction::Add(fields)) = cli.command else {
            panic!("expected task add");
        };
        assert_eq!(TaskDraft::from(fields).validated().unwrap().progress, 0.0);
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from([
            "devtrack", "report", "estimate", "3", "--today", "2024-01-11", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 1, 11));
        assert!(matches!(
            cli.command,
            Command::Report(ReportAction::Estimate { project_id: 3 })
        ));
    }
}
