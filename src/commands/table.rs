//! Table command: league standings for a gameweek.

use std::fmt::Write as _;
use std::path::PathBuf;

use crate::{
    cli::types::{Gameweek, LeagueId},
    engine::{standings::table_order, GameweekRecord},
    storage::JsonStore,
    Result,
};

use super::{resolve_data_dir, resolve_gameweek, resolve_league_id};

/// Render the standings as a code-fenced table under a bold title.
///
/// Rows follow the stored ranks, so `optimal` switches both the ordering and
/// the points column to season optimal totals.
pub fn format_table(gameweek: Gameweek, records: &[GameweekRecord], optimal: bool) -> String {
    let title = if optimal {
        format!("**Gameweek {} Optimal Table**", gameweek)
    } else {
        format!("**Gameweek {} Table**", gameweek)
    };

    let rows: Vec<(&str, i32)> = table_order(records, optimal)
        .into_iter()
        .map(|r| {
            let points = if optimal {
                r.total_optimal_points
            } else {
                r.total_points
            };
            (r.team_name.as_str(), points)
        })
        .collect();

    let name_width = rows
        .iter()
        .map(|(name, _)| name.chars().count())
        .chain(std::iter::once("Team".len()))
        .max()
        .unwrap_or(0);
    let points_width = rows
        .iter()
        .map(|(_, points)| points.to_string().len())
        .chain(std::iter::once("Points".len()))
        .max()
        .unwrap_or(0);

    let mut output = format!("{title}\n```\n");
    let _ = writeln!(
        output,
        "{:<4} {:<name_width$} {:>points_width$}",
        "Pos", "Team", "Points"
    );
    let _ = writeln!(
        output,
        "{} {} {}",
        "-".repeat(4),
        "-".repeat(name_width),
        "-".repeat(points_width)
    );
    for (pos, (name, points)) in rows.iter().enumerate() {
        let _ = writeln!(
            output,
            "{:<4} {:<name_width$} {:>points_width$}",
            pos + 1,
            name,
            points
        );
    }
    output.push_str("```");
    output
}

/// Handle the table command
pub fn handle_table(
    league_id: Option<LeagueId>,
    data_dir: Option<PathBuf>,
    gameweek: Option<Gameweek>,
    optimal: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let store = JsonStore::new(resolve_data_dir(data_dir));
    let Some(gameweek) = resolve_gameweek(&store, gameweek)? else {
        println!("No gameweek has finished yet");
        return Ok(());
    };

    let team_ids = store.load_league_details(league_id)?.team_ids();
    let records = store.load_gameweek_records(league_id, &team_ids, gameweek)?;

    println!("{}", format_table(gameweek, &records, optimal));
    Ok(())
}
