//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use types::{Gameweek, LeagueId};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download league, player and gameweek data from the FPL Draft API.
    ///
    /// Fetches every finished gameweek's live scores and each team's picks
    /// into the data directory.
    Pull {
        /// League ID (or set `FPL_DRAFT_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,
    },

    /// Calculate gameweek records, optimal points and league ranks.
    Calculate {
        /// League ID (or set `FPL_DRAFT_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Last gameweek to calculate (defaults to the last finished one).
        #[clap(long, short)]
        through: Option<Gameweek>,
    },

    /// Print the league table for a gameweek.
    Table {
        /// League ID (or set `FPL_DRAFT_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Gameweek (defaults to the last finished one).
        #[clap(long = "gw", short)]
        gameweek: Option<Gameweek>,

        /// Rank by optimal points instead of actual points.
        #[clap(long)]
        optimal: bool,
    },

    /// Print every team's squad for a gameweek.
    Squads {
        /// League ID (or set `FPL_DRAFT_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Gameweek (defaults to the last finished one).
        #[clap(long = "gw", short)]
        gameweek: Option<Gameweek>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "fpl-draft", about = "FPL Draft league points and optimal lineups")]
pub struct FplDraft {
    /// Data directory (or set `FPL_DRAFT_DATA_DIR` env var).
    #[clap(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Debug logging and extra output.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
