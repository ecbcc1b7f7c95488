//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fpl_draft::{
    cli::{Commands, FplDraft},
    commands::{
        calculate::handle_calculate, pull::handle_pull, squads::handle_squads,
        table::handle_table,
    },
    Result,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = FplDraft::parse();

    // RUST_LOG wins over --verbose
    let default_level = if app.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let data_dir = app.data_dir;
    match app.command {
        Commands::Pull { league_id } => handle_pull(league_id, data_dir, app.verbose).await?,

        Commands::Calculate { league_id, through } => {
            // The fold is CPU-bound and runs its builds on the rayon pool
            tokio::task::block_in_place(|| {
                handle_calculate(league_id, data_dir, through, app.verbose)
            })?
        }

        Commands::Table {
            league_id,
            gameweek,
            optimal,
        } => handle_table(league_id, data_dir, gameweek, optimal)?,

        Commands::Squads {
            league_id,
            gameweek,
        } => handle_squads(league_id, data_dir, gameweek)?,
    }

    Ok(())
}
