mod cli;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use devtrack::{config, db};

use crate::cli::output::Output;
use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays parseable
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = config::init()?;

    // Open the database, creating tables on first run
    let db = db::init(&config).await?;

    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let out = Output::new(cli.json);
    info!(%today, "running command");

    match cli.command {
        Command::Project(action) => cli::projects::run(&db, action, &out).await?,
        Command::Member(action) => cli::team::run(&db, action, &out).await?,
        Command::Task(action) => cli::tasks::run(&db, action, &out).await?,
        Command::Report(action) => {
            cli::reports::run(&db, action, today, config.upcoming_window_days, &out).await?
        }
    }

    Ok(())
}
