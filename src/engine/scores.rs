//! Gameweek score index: player id -> points scored in one gameweek.

use std::collections::HashMap;

use crate::{
    cli::types::{Gameweek, PlayerId},
    fpl::types::LiveGameweek,
};

/// Points every featuring player scored in a single gameweek.
///
/// A player missing from the index did not feature and scored zero.
#[derive(Debug, Clone, Default)]
pub struct ScoreIndex {
    gameweek: Gameweek,
    points: HashMap<PlayerId, i32>,
}

impl ScoreIndex {
    pub fn new(gameweek: Gameweek, points: HashMap<PlayerId, i32>) -> Self {
        Self { gameweek, points }
    }

    pub fn from_live(gameweek: Gameweek, live: &LiveGameweek) -> Self {
        let points = live
            .elements
            .iter()
            .map(|(id, element)| (*id, element.stats.total_points))
            .collect();
        Self { gameweek, points }
    }

    pub fn gameweek(&self) -> Gameweek {
        self.gameweek
    }

    pub fn points(&self, player_id: PlayerId) -> i32 {
        self.points.get(&player_id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
