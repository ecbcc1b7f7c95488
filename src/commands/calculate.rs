//! Calculate command: run the season fold over the stored data.

use std::path::PathBuf;

use tracing::info;

use crate::{
    cli::types::{Gameweek, LeagueId},
    engine::{standings::table_order, GameweekRecord, SeasonRunner},
    storage::{JsonStore, StoredSeason},
    Result,
};

use super::{resolve_data_dir, resolve_gameweek, resolve_league_id};

/// Build and rank every team's record for gameweeks `1..=through`.
///
/// `through` defaults to the last finished gameweek in `game.json`. Returns
/// the ranked records of the final gameweek processed (empty when no
/// gameweek has finished).
pub fn calculate_season(
    store: &JsonStore,
    league_id: LeagueId,
    through: Option<Gameweek>,
) -> Result<Vec<GameweekRecord>> {
    let Some(through) = resolve_gameweek(store, through)? else {
        info!(league = %league_id, "no finished gameweek to calculate");
        return Ok(Vec::new());
    };

    let season = StoredSeason::open(store, league_id)?;
    info!(
        league = %season.league_id(),
        teams = season.details().league_entries.len(),
        through = %through,
        "calculating season"
    );

    SeasonRunner::new(&season, &season).run(through)
}

/// Handle the calculate command
pub fn handle_calculate(
    league_id: Option<LeagueId>,
    data_dir: Option<PathBuf>,
    through: Option<Gameweek>,
    verbose: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let store = JsonStore::new(resolve_data_dir(data_dir));

    let records = calculate_season(&store, league_id, through)?;

    match records.first() {
        Some(first) => {
            println!(
                "✓ Calculated {} teams through gameweek {}",
                records.len(),
                first.gameweek
            );
            if verbose {
                for record in table_order(&records, false) {
                    println!(
                        "  {:>2}. {} - {} pts ({} optimal)",
                        record.league_rank,
                        record.team_name,
                        record.total_points,
                        record.total_optimal_points
                    );
                }
            }
        }
        None => println!("No finished gameweek to calculate yet"),
    }

    Ok(())
}
