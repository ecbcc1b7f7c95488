//! The per-team, per-gameweek scoring record and its building blocks.

use serde::{Deserialize, Serialize};

use crate::cli::types::{
    Category, Formation, Gameweek, PlayerId, TeamId, MAX_FORMATION, MIN_FORMATION,
};

/// One roster entry enriched with this gameweek's facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerGameweekStats {
    pub element: PlayerId,
    /// Squad slot, 1..=15
    pub position: u8,
    pub first_name: String,
    pub second_name: String,
    pub true_position: Category,
    pub points: i32,
    pub benched: bool,
}

impl PlayerGameweekStats {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.second_name)
    }
}

/// Season-to-date contribution of one player to one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSeasonTotals {
    pub player_id: PlayerId,
    pub first_name: String,
    pub second_name: String,
    /// Points scored while starting
    pub total_points: i32,
    /// Points scored while on the bench
    pub total_benched_points: i32,
}

/// Per-player season totals, kept ranked by `total_points` descending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonTotals(Vec<PlayerSeasonTotals>);

impl SeasonTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player_id: PlayerId) -> Option<&PlayerSeasonTotals> {
        self.0.iter().find(|p| p.player_id == player_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlayerSeasonTotals> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Add one gameweek's points for a player, creating the entry on first appearance.
    pub fn add(&mut self, stats: &PlayerGameweekStats) {
        let idx = match self.0.iter().position(|p| p.player_id == stats.element) {
            Some(idx) => idx,
            None => {
                self.0.push(PlayerSeasonTotals {
                    player_id: stats.element,
                    first_name: stats.first_name.clone(),
                    second_name: stats.second_name.clone(),
                    total_points: 0,
                    total_benched_points: 0,
                });
                self.0.len() - 1
            }
        };

        let entry = &mut self.0[idx];
        if stats.benched {
            entry.total_benched_points += stats.points;
        } else {
            entry.total_points += stats.points;
        }
    }

    /// Stable sort by starting points, highest first.
    pub fn rank(&mut self) {
        self.0.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    }
}

impl<'a> IntoIterator for &'a SeasonTotals {
    type Item = &'a PlayerSeasonTotals;
    type IntoIter = std::slice::Iter<'a, PlayerSeasonTotals>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<PlayerSeasonTotals> for SeasonTotals {
    fn from_iter<I: IntoIterator<Item = PlayerSeasonTotals>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Normalised scoring record for one team in one gameweek.
///
/// Created once by the builder, then mutated exactly once more by the
/// standings pass to fill in `league_rank` and `optimal_league_rank`.
/// A rank of 0 means the standings pass has not run yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameweekRecord {
    pub team_id: TeamId,
    pub team_name: String,
    pub team_captain: String,
    pub gameweek: Gameweek,
    pub team_formation: Formation,
    pub max_formation: Formation,
    pub min_formation: Formation,
    pub week_points: i32,
    pub benched_points: i32,
    pub optimal_points: i32,
    pub league_rank: u32,
    pub optimal_league_rank: u32,
    pub total_points: i32,
    pub total_optimal_points: i32,
    pub player_stats: Vec<PlayerGameweekStats>,
    pub total_player_stats: SeasonTotals,
}

impl GameweekRecord {
    /// Empty record for a team and gameweek, seeded with the given totals.
    pub fn seeded(
        team_id: TeamId,
        team_name: String,
        team_captain: String,
        gameweek: Gameweek,
        total_points: i32,
        total_optimal_points: i32,
        total_player_stats: SeasonTotals,
    ) -> Self {
        Self {
            team_id,
            team_name,
            team_captain,
            gameweek,
            team_formation: [0; 4],
            max_formation: MAX_FORMATION,
            min_formation: MIN_FORMATION,
            week_points: 0,
            benched_points: 0,
            optimal_points: 0,
            league_rank: 0,
            optimal_league_rank: 0,
            total_points,
            total_optimal_points,
            player_stats: Vec::new(),
            total_player_stats,
        }
    }

    pub fn is_ranked(&self) -> bool {
        self.league_rank > 0 && self.optimal_league_rank > 0
    }

    /// Formation in the usual "DEF-MID-FWD" notation, goalkeeper implied.
    pub fn formation_label(&self) -> String {
        let [_, def, mid, fwd] = self.team_formation;
        format!("{def}-{mid}-{fwd}")
    }

    /// Whether the starting eleven respects the formation bounds.
    pub fn formation_is_legal(&self) -> bool {
        let total: u32 = self.team_formation.iter().map(|&n| n as u32).sum();
        total == 11
            && (0..self.team_formation.len()).all(|i| {
                self.team_formation[i] >= self.min_formation[i]
                    && self.team_formation[i] <= self.max_formation[i]
            })
    }

    pub fn players_in(&self, category: Category) -> impl Iterator<Item = &PlayerGameweekStats> {
        self.player_stats
            .iter()
            .filter(move |p| !p.benched && p.true_position == category)
    }

    pub fn bench(&self) -> impl Iterator<Item = &PlayerGameweekStats> {
        self.player_stats.iter().filter(|p| p.benched)
    }
}
