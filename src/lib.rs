//! FPL Draft League Library
//!
//! Gameweek points, optimal lineups and league standings for Fantasy Premier
//! League Draft leagues.
//!
//! ## Features
//!
//! - **Data Retrieval**: Pull league, player and gameweek documents from the FPL Draft API
//! - **Gameweek Records**: Actual, benched and season-to-date points for every team
//! - **Optimal Lineups**: The best score any legal formation could have produced
//! - **Standings**: League ranks by actual and by optimal points
//!
//! ## Quick Start
//!
//! ```rust
//! use fpl_draft::{optimal_points, Category};
//!
//! // Best legal eleven out of a 15-man squad, given each player's category and points
//! let squad = [
//!     (Category::Goalkeeper, 6), (Category::Goalkeeper, 1),
//!     (Category::Defender, 6), (Category::Defender, 2), (Category::Defender, 2),
//!     (Category::Defender, 1), (Category::Defender, 1),
//!     (Category::Midfielder, 12), (Category::Midfielder, 8), (Category::Midfielder, 5),
//!     (Category::Midfielder, 3), (Category::Midfielder, 2),
//!     (Category::Forward, 9), (Category::Forward, 6), (Category::Forward, 2),
//! ];
//!
//! // 3-5-2 and 3-4-3 both reach 61
//! assert_eq!(optimal_points(&squad), 61);
//! ```
//!
//! ## Environment Configuration
//!
//! Set your league ID and data directory to avoid passing them in every command:
//! ```bash
//! export FPL_DRAFT_LEAGUE_ID=15937
//! export FPL_DRAFT_DATA_DIR=~/fpl-data
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod engine;
pub mod error;
pub mod fpl;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{Category, Formation, Gameweek, LeagueId, PlayerId, TeamId};
pub use engine::{
    build_gameweek_record, optimal_points, rank_standings, GameweekRecord, PlayerDirectory,
    RosterSnapshot, ScoreIndex, SeasonRunner,
};
pub use error::{DraftError, Result};

pub const LEAGUE_ID_ENV_VAR: &str = "FPL_DRAFT_LEAGUE_ID";
pub const DATA_DIR_ENV_VAR: &str = "FPL_DRAFT_DATA_DIR";
