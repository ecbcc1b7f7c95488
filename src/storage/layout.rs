//! On-disk layout of the data directory

use std::path::{Path, PathBuf};

use crate::cli::types::{Gameweek, LeagueId, TeamId};

/// Where every document lives relative to the data directory root.
///
/// ```text
/// bootstrap-static.json
/// game.json
/// global/gw_{gw}.json
/// {league}_data/league-{league}-details.json
/// {league}_data/{team}/gw_{gw}_complete.json
/// {league}_data/{team}/gw_{gw}_adjusted.json
/// ```
#[derive(Debug, Clone)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bootstrap_path(&self) -> PathBuf {
        self.root.join("bootstrap-static.json")
    }

    pub fn game_path(&self) -> PathBuf {
        self.root.join("game.json")
    }

    pub fn live_gameweek_path(&self, gameweek: Gameweek) -> PathBuf {
        self.root.join("global").join(format!("gw_{}.json", gameweek))
    }

    pub fn league_dir(&self, league_id: LeagueId) -> PathBuf {
        self.root.join(format!("{}_data", league_id))
    }

    pub fn league_details_path(&self, league_id: LeagueId) -> PathBuf {
        self.league_dir(league_id)
            .join(format!("league-{}-details.json", league_id))
    }

    pub fn team_dir(&self, league_id: LeagueId, team_id: TeamId) -> PathBuf {
        self.league_dir(league_id).join(team_id.to_string())
    }

    /// Picks for a team in a gameweek, as served by the API.
    pub fn entry_event_path(
        &self,
        league_id: LeagueId,
        team_id: TeamId,
        gameweek: Gameweek,
    ) -> PathBuf {
        self.team_dir(league_id, team_id)
            .join(format!("gw_{}_complete.json", gameweek))
    }

    /// The engine's gameweek record for a team.
    pub fn record_path(&self, league_id: LeagueId, team_id: TeamId, gameweek: Gameweek) -> PathBuf {
        self.team_dir(league_id, team_id)
            .join(format!("gw_{}_adjusted.json", gameweek))
    }
}
