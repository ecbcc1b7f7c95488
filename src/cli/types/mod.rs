//! Type-safe wrappers and enums for FPL Draft data.

pub mod ids;
pub mod position;
pub mod time;

pub use ids::{LeagueId, PlayerId, TeamId};
pub use position::{Category, Formation, CATEGORY_COUNT, MAX_FORMATION, MIN_FORMATION};
pub use time::Gameweek;
