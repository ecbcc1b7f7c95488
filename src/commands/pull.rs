//! Pull command: fetch every document the engine needs into the data directory.
//!
//! Documents are stored exactly as the API serves them. A failure on one
//! document is logged and counted rather than aborting the pull, so a rerun
//! only has to fill the gaps.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

use crate::{
    cli::types::{Gameweek, LeagueId},
    fpl::http::FplClient,
    storage::JsonStore,
    Result,
};

use super::{resolve_data_dir, resolve_league_id};

/// Outcome of a pull.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PullSummary {
    pub successful: usize,
    pub failed: usize,
    /// Last finished gameweek according to the provider
    pub current_gameweek: Option<Gameweek>,
}

impl PullSummary {
    fn record(&mut self, ok: bool) {
        if ok {
            self.successful += 1;
        } else {
            self.failed += 1;
        }
    }
}

async fn fetch_and_save<F>(store: &JsonStore, path: &Path, fetch: F) -> bool
where
    F: std::future::Future<Output = Result<Value>>,
{
    let result = match fetch.await {
        Ok(value) => store.write_json(path, &value),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            info!(path = %path.display(), "saved");
            true
        }
        Err(e) => {
            warn!(path = %path.display(), "fetch failed: {e}");
            false
        }
    }
}

/// Fetch global documents, league details, live scores and every team's picks.
pub async fn pull_league_data(
    client: &FplClient,
    store: &JsonStore,
    league_id: LeagueId,
) -> Result<PullSummary> {
    let layout = store.layout();
    let mut summary = PullSummary::default();

    let ok = fetch_and_save(store, &layout.bootstrap_path(), client.bootstrap_static()).await;
    summary.record(ok);
    let ok = fetch_and_save(store, &layout.game_path(), client.game()).await;
    summary.record(ok);
    let ok = fetch_and_save(
        store,
        &layout.league_details_path(league_id),
        client.league_details(league_id),
    )
    .await;
    summary.record(ok);

    // A stale game.json or details file from an earlier pull is still usable
    let current = store.load_game_status()?.last_finished_gameweek();
    summary.current_gameweek = current;
    let Some(current) = current else {
        info!("no finished gameweek yet");
        return Ok(summary);
    };

    for gameweek in current.up_to() {
        let ok = fetch_and_save(
            store,
            &layout.live_gameweek_path(gameweek),
            client.live_gameweek(gameweek),
        )
        .await;
        summary.record(ok);
    }

    let team_ids = store.load_league_details(league_id)?.team_ids();
    for gameweek in current.up_to() {
        for &team_id in &team_ids {
            let ok = fetch_and_save(
                store,
                &layout.entry_event_path(league_id, team_id, gameweek),
                client.entry_event(team_id, gameweek),
            )
            .await;
            summary.record(ok);
        }
    }

    Ok(summary)
}

/// Handle the pull command
pub async fn handle_pull(
    league_id: Option<LeagueId>,
    data_dir: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let data_dir = resolve_data_dir(data_dir);
    let store = JsonStore::new(&data_dir);

    println!("Starting FPL Draft data fetch for League ID: {}", league_id);
    if verbose {
        println!("Data directory: {}", data_dir.display());
    }

    let summary = pull_league_data(&FplClient::new(), &store, league_id).await?;

    match summary.current_gameweek {
        Some(gw) => println!("Current Gameweek: {}", gw),
        None => println!("No gameweek has finished yet"),
    }
    println!(
        "Complete! {} successful, {} failed",
        summary.successful, summary.failed
    );

    Ok(())
}
