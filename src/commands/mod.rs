//! Command implementations for the FPL Draft CLI

pub mod calculate;
pub mod pull;
pub mod squads;
pub mod table;

use std::path::PathBuf;

use crate::{
    core::default_data_dir, error::DraftError, storage::JsonStore, Gameweek, LeagueId, Result,
    DATA_DIR_ENV_VAR, LEAGUE_ID_ENV_VAR,
};


/// Resolve league ID from option or environment variable
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    if let Some(id) = league_id {
        return Ok(id);
    }

    match std::env::var(LEAGUE_ID_ENV_VAR) {
        Ok(raw) => raw.trim().parse::<LeagueId>(),
        Err(_) => Err(DraftError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        }),
    }
}

/// Resolve the data directory: option, then environment variable, then the platform cache dir
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> PathBuf {
    data_dir
        .or_else(|| std::env::var_os(DATA_DIR_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(default_data_dir)
}

/// Use the requested gameweek, else the last finished one from `game.json`
pub fn resolve_gameweek(store: &JsonStore, gameweek: Option<Gameweek>) -> Result<Option<Gameweek>> {
    match gameweek {
        Some(gw) => Ok(Some(gw)),
        None => Ok(store.load_game_status()?.last_finished_gameweek()),
    }
}
