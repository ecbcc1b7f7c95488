//! Points aggregation and optimal-lineup engine
//!
//! - `directory`: player id -> name and category
//! - `scores`: per-gameweek points lookup
//! - `roster`: a team's 15 picks for a gameweek
//! - `record`: the gameweek record the engine produces
//! - `builder`: roster + scores + previous record -> next record
//! - `solver`: best legal-formation score for a squad
//! - `standings`: league and optimal-league ranks for a gameweek
//! - `season`: the ordered fold over gameweeks

pub mod builder;
pub mod directory;
pub mod record;
pub mod roster;
pub mod scores;
pub mod season;
pub mod solver;
pub mod standings;

pub use builder::build_gameweek_record;
pub use directory::{DirectoryEntry, PlayerDirectory};
pub use record::{GameweekRecord, PlayerGameweekStats, PlayerSeasonTotals, SeasonTotals};
pub use roster::{RosterSlot, RosterSnapshot};
pub use scores::ScoreIndex;
pub use season::{RecordSink, SeasonData, SeasonRunner};
pub use solver::{optimal_points, LEGAL_FORMATIONS};
pub use standings::rank_standings;
