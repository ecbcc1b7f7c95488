//! Squads command: every team's lineup for a gameweek.

use std::fmt::Write as _;
use std::path::PathBuf;

use crate::{
    cli::types::{Category, Gameweek, LeagueId},
    engine::{GameweekRecord, PlayerGameweekStats},
    storage::JsonStore,
    Result,
};

use super::{resolve_data_dir, resolve_gameweek, resolve_league_id};

fn push_section<'a>(
    output: &mut String,
    heading: &str,
    players: impl Iterator<Item = &'a PlayerGameweekStats>,
) {
    let _ = writeln!(output, "\n{heading}:");
    for player in players {
        let _ = writeln!(output, " - {}\n\tPoints: {}", player.full_name(), player.points);
    }
}

/// Starters grouped by category, then the bench, then the points summary.
pub fn format_squad(record: &GameweekRecord) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Team: {} - Gameweek: {}",
        record.team_name, record.gameweek
    );
    let _ = writeln!(output, "\tCaptain: {}", record.team_captain);
    let _ = writeln!(output, "\tFormation: {}", record.formation_label());
    output.push_str(&"-".repeat(40));
    output.push('\n');

    for category in Category::ALL {
        push_section(&mut output, category.plural(), record.players_in(category));
    }
    push_section(&mut output, "Bench", record.bench());

    let _ = writeln!(output);
    let _ = writeln!(output, "Week Points: {}", record.week_points);
    let _ = writeln!(output, "Total Points: {}", record.total_points);
    let _ = writeln!(output, "Benched Points: {}", record.benched_points);
    let _ = write!(output, "Optimal Points: {}", record.optimal_points);
    output
}

/// Handle the squads command
pub fn handle_squads(
    league_id: Option<LeagueId>,
    data_dir: Option<PathBuf>,
    gameweek: Option<Gameweek>,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let store = JsonStore::new(resolve_data_dir(data_dir));
    let Some(gameweek) = resolve_gameweek(&store, gameweek)? else {
        println!("No gameweek has finished yet");
        return Ok(());
    };

    let team_ids = store.load_league_details(league_id)?.team_ids();
    for record in store.load_gameweek_records(league_id, &team_ids, gameweek)? {
        println!("\n{}", format_squad(&record));
    }

    Ok(())
}
