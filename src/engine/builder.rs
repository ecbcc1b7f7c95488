//! Gameweek record builder.
//!
//! One step of the season fold: the previous gameweek's finalised record plus
//! this gameweek's roster and scores in, this gameweek's (unranked) record out.

use tracing::debug;

use crate::{error::DraftError, Result};

use super::{
    directory::PlayerDirectory,
    record::{GameweekRecord, PlayerGameweekStats, SeasonTotals},
    roster::RosterSnapshot,
    scores::ScoreIndex,
    solver::optimal_points,
};


/// Check that `previous` is the record this gameweek must be folded onto and
/// return the totals to seed from.
fn seed_totals(
    roster: &RosterSnapshot,
    previous: Option<&GameweekRecord>,
) -> Result<(i32, i32, SeasonTotals)> {
    let team_id = roster.team_id;
    let gameweek = roster.gameweek;

    if gameweek.as_u16() == 0 {
        return Err(DraftError::InvalidGameweek { gameweek });
    }

    match (gameweek.previous(), previous) {
        (None, None) => Ok((0, 0, SeasonTotals::new())),
        (Some(_), None) => Err(DraftError::MissingPreviousRecord { team_id, gameweek }),
        (expected, Some(prev)) => {
            if expected != Some(prev.gameweek) || prev.team_id != team_id {
                return Err(DraftError::PreviousRecordMismatch {
                    team_id,
                    gameweek,
                    found_team: prev.team_id,
                    found_gameweek: prev.gameweek,
                });
            }
            Ok((
                prev.total_points,
                prev.total_optimal_points,
                prev.total_player_stats.clone(),
            ))
        }
    }
}

/// Build the record for `roster.team_id` in `roster.gameweek`.
///
/// `previous` must be the same team's record for the gameweek before, and
/// must be `None` for gameweek 1. The formation is reported as picked; no
/// legality check is made on the input roster.
pub fn build_gameweek_record(
    roster: &RosterSnapshot,
    directory: &PlayerDirectory,
    scores: &ScoreIndex,
    previous: Option<&GameweekRecord>,
) -> Result<GameweekRecord> {
    let (total_points, total_optimal_points, total_player_stats) =
        seed_totals(roster, previous)?;

    let mut record = GameweekRecord::seeded(
        roster.team_id,
        roster.team_name.clone(),
        roster.captain_name.clone(),
        roster.gameweek,
        total_points,
        total_optimal_points,
        total_player_stats,
    );

    for slot in &roster.slots {
        let (entry, category) = directory.lookup(slot.player_id)?;
        let points = scores.points(slot.player_id);

        let stats = PlayerGameweekStats {
            element: slot.player_id,
            position: slot.position,
            first_name: entry.first_name.clone(),
            second_name: entry.second_name.clone(),
            true_position: category,
            points,
            benched: !slot.is_starter(),
        };

        if stats.benched {
            record.benched_points += points;
        } else {
            let count = &mut record.team_formation[category.index()];
            *count = count.saturating_add(1);
            record.week_points += points;
            record.total_points += points;
        }

        record.total_player_stats.add(&stats);
        record.player_stats.push(stats);
    }

    record.total_player_stats.rank();
    record.optimal_points = optimal_points(&record.player_stats);
    record.total_optimal_points += record.optimal_points;

    debug!(
        team = %record.team_id,
        gameweek = %record.gameweek,
        formation = %record.formation_label(),
        week_points = record.week_points,
        optimal_points = record.optimal_points,
        "built gameweek record"
    );

    Ok(record)
}
