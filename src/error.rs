//! Error types for the FPL Draft points engine

use thiserror::Error;

use crate::cli::types::{Gameweek, PlayerId, TeamId};


pub type Result<T> = std::result::Result<T, DraftError>;

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse numeric id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Missing input {path}: run `fpl-draft pull` first to fetch the data")]
    MissingInput { path: String },

    #[error("Missing gameweek record {path}: run `fpl-draft calculate` first")]
    MissingRecord { path: String },

    #[error("Player not found in player directory: {player_id}")]
    PlayerNotFound { player_id: PlayerId },

    #[error("Player {player_id} has unrecognised category code {code}")]
    UnknownCategory { player_id: PlayerId, code: u8 },

    #[error("Team {team_id} not found in league")]
    TeamNotFound { team_id: TeamId },

    #[error("Invalid gameweek: {gameweek}")]
    InvalidGameweek { gameweek: Gameweek },

    #[error("Team {team_id} gameweek {gameweek}: previous gameweek record is missing")]
    MissingPreviousRecord { team_id: TeamId, gameweek: Gameweek },

    #[error(
        "Team {team_id} gameweek {gameweek}: previous record belongs to team {found_team} gameweek {found_gameweek}"
    )]
    PreviousRecordMismatch {
        team_id: TeamId,
        gameweek: Gameweek,
        found_team: TeamId,
        found_gameweek: Gameweek,
    },

    #[error("Gameweek {gameweek}: cannot rank standings, missing records for teams {missing:?}")]
    IncompleteStandings {
        gameweek: Gameweek,
        missing: Vec<TeamId>,
    },
}

impl From<anyhow::Error> for DraftError {
    fn from(err: anyhow::Error) -> Self {
        DraftError::Storage {
            message: format!("{err:#}"),
        }
    }
}
