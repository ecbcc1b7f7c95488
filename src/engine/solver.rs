//! Optimal lineup solver.
//!
//! Finds the best score a squad could have produced in a gameweek had the
//! manager picked the right eleven. The search is a fixed enumeration of the
//! eight legal formations, each filled greedily per category.

use crate::cli::types::{Category, Formation, CATEGORY_COUNT};

use super::record::PlayerGameweekStats;


/// Every legal starting formation as [GK, DEF, MID, FWD].
///
/// Formations with fewer than three defenders or no forward are not legal
/// even though they would satisfy the eleven-player total.
pub const LEGAL_FORMATIONS: [Formation; 8] = [
    [1, 3, 5, 2],
    [1, 3, 4, 3],
    [1, 4, 5, 1],
    [1, 4, 4, 2],
    [1, 4, 3, 3],
    [1, 5, 4, 1],
    [1, 5, 3, 2],
    [1, 5, 2, 3],
];

/// Anything with a category and a gameweek score can be fed to the solver.
pub trait Scored {
    fn category(&self) -> Category;
    fn points(&self) -> i32;
}

impl Scored for PlayerGameweekStats {
    fn category(&self) -> Category {
        self.true_position
    }

    fn points(&self) -> i32 {
        self.points
    }
}

impl Scored for (Category, i32) {
    fn category(&self) -> Category {
        self.0
    }

    fn points(&self) -> i32 {
        self.1
    }
}

/// Scores grouped by category, each bucket sorted highest first.
fn buckets<P: Scored>(players: &[P]) -> [Vec<i32>; CATEGORY_COUNT] {
    let mut squad: [Vec<i32>; CATEGORY_COUNT] = Default::default();
    for p in players {
        squad[p.category().index()].push(p.points());
    }
    for bucket in squad.iter_mut() {
        bucket.sort_unstable_by(|a, b| b.cmp(a));
    }
    squad
}

/// Score of one formation: the top `k` of each bucket.
///
/// A bucket holding fewer than `k` players contributes everything it has.
fn formation_points(squad: &[Vec<i32>; CATEGORY_COUNT], formation: &Formation) -> i32 {
    squad
        .iter()
        .zip(formation)
        .map(|(bucket, &k)| bucket.iter().take(k as usize).sum::<i32>())
        .sum()
}

/// Best achievable score and the formation that achieves it.
///
/// Ties go to the first formation in [`LEGAL_FORMATIONS`] order.
pub fn best_formation<P: Scored>(players: &[P]) -> (Formation, i32) {
    let squad = buckets(players);
    let mut best = (LEGAL_FORMATIONS[0], formation_points(&squad, &LEGAL_FORMATIONS[0]));
    for formation in &LEGAL_FORMATIONS[1..] {
        let points = formation_points(&squad, formation);
        if points > best.1 {
            best = (*formation, points);
        }
    }
    best
}

/// Maximum points obtainable from `players` under the formation rules.
pub fn optimal_points<P: Scored>(players: &[P]) -> i32 {
    best_formation(players).1
}
