use crate::demo::{run_demo, run_rank, run_schema_check, RankArgs, SchemaCheckArgs};
use candidate_ranking::config::AppConfig;
use candidate_ranking::error::AppError;
use candidate_ranking::telemetry;
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "candidate-ranking",
    about = "Rank scored candidates and summarize the result",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank candidates loaded from a CSV or JSON file
    Rank(RankArgs),
    /// Rank the built-in sample candidates
    Demo,
    /// Validate experiment artifacts against their schemas
    SchemaCheck(SchemaCheckArgs),
}

/// Parse arguments, run the selected command, and return the process exit code.
pub(crate) fn run() -> Result<i32, AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, "configuration loaded");

    match cli.command {
        Command::Rank(args) => run_rank(args, &config).map(|()| 0),
        Command::Demo => run_demo(&config).map(|()| 0),
        Command::SchemaCheck(args) => Ok(run_schema_check(args)),
    }
}
