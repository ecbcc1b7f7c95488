//! League standings aggregator.
//!
//! Ranks every team's record for one gameweek twice: once by season points
//! and once by season optimal points. Ties are broken by ascending team id so
//! that repeated runs over the same data produce the same table.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::{
    cli::types::{Gameweek, TeamId},
    error::DraftError,
    Result,
};

use super::record::GameweekRecord;


/// Indices of `records` ordered best first by `key`, ties by team id.
fn ranking_order<F>(records: &[GameweekRecord], key: F) -> Vec<usize>
where
    F: Fn(&GameweekRecord) -> i32,
{
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by_key(|&i| (Reverse(key(&records[i])), records[i].team_id));
    order
}

/// Assign `league_rank` and `optimal_league_rank` for `gameweek`.
///
/// Every team in `team_ids` must have exactly one record for `gameweek`;
/// otherwise nothing is ranked and `IncompleteStandings` is returned.
/// Records for teams outside `team_ids` are ignored. The result follows the
/// order of `team_ids`.
pub fn rank_standings(
    gameweek: Gameweek,
    team_ids: &[TeamId],
    records: Vec<GameweekRecord>,
) -> Result<Vec<GameweekRecord>> {
    let mut by_team: HashMap<TeamId, GameweekRecord> = records
        .into_iter()
        .filter(|r| r.gameweek == gameweek)
        .map(|r| (r.team_id, r))
        .collect();

    let missing: Vec<TeamId> = team_ids
        .iter()
        .filter(|id| !by_team.contains_key(id))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(DraftError::IncompleteStandings { gameweek, missing });
    }

    let mut ranked: Vec<GameweekRecord> = team_ids
        .iter()
        .filter_map(|id| by_team.remove(id))
        .collect();

    for (rank, idx) in ranking_order(&ranked, |r| r.total_points)
        .into_iter()
        .enumerate()
    {
        ranked[idx].league_rank = rank as u32 + 1;
    }

    for (rank, idx) in ranking_order(&ranked, |r| r.total_optimal_points)
        .into_iter()
        .enumerate()
    {
        ranked[idx].optimal_league_rank = rank as u32 + 1;
    }

    Ok(ranked)
}

/// Records sorted into table order by actual or optimal rank.
pub fn table_order(records: &[GameweekRecord], optimal: bool) -> Vec<&GameweekRecord> {
    let mut table: Vec<&GameweekRecord> = records.iter().collect();
    if optimal {
        table.sort_by_key(|r| (r.optimal_league_rank, r.team_id));
    } else {
        table.sort_by_key(|r| (r.league_rank, r.team_id));
    }
    table
}
