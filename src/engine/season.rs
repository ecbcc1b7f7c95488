//! Season driver: the gameweek-by-gameweek fold.
//!
//! For each gameweek in order: build every team's record in parallel from the
//! previous gameweek's ranked records, rank them together, hand the ranked set
//! to the sink, and carry it forward as the next gameweek's input.

use std::collections::HashMap;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{error, info};

use crate::{
    cli::types::{Gameweek, TeamId},
    Result,
};

use super::{
    builder::build_gameweek_record,
    directory::PlayerDirectory,
    record::GameweekRecord,
    roster::RosterSnapshot,
    scores::ScoreIndex,
    standings::rank_standings,
};

/// Read-only inputs the fold consumes. Shared across the parallel build phase.
pub trait SeasonData: Sync {
    fn team_ids(&self) -> Vec<TeamId>;
    fn directory(&self) -> &PlayerDirectory;
    fn score_index(&self, gameweek: Gameweek) -> Result<Arc<ScoreIndex>>;
    fn roster(&self, team_id: TeamId, gameweek: Gameweek) -> Result<RosterSnapshot>;
}

/// Receives each gameweek's complete, ranked record set.
pub trait RecordSink {
    fn persist_gameweek(&self, gameweek: Gameweek, records: &[GameweekRecord]) -> Result<()>;
}

pub struct SeasonRunner<'a, D: SeasonData, S: RecordSink> {
    data: &'a D,
    sink: &'a S,
}

impl<'a, D: SeasonData, S: RecordSink> SeasonRunner<'a, D, S> {
    pub fn new(data: &'a D, sink: &'a S) -> Self {
        Self { data, sink }
    }

    /// Build and rank one gameweek on top of `previous` (keyed by team).
    pub fn process_gameweek(
        &self,
        gameweek: Gameweek,
        team_ids: &[TeamId],
        previous: &HashMap<TeamId, GameweekRecord>,
    ) -> Result<Vec<GameweekRecord>> {
        let data = self.data;
        let scores = data.score_index(gameweek)?;
        let directory = data.directory();

        let records = team_ids
            .par_iter()
            .map(|&team_id| {
                let roster = data.roster(team_id, gameweek)?;
                build_gameweek_record(&roster, directory, &scores, previous.get(&team_id))
                    .inspect_err(|e| {
                        error!(team = %team_id, gameweek = %gameweek, "build failed: {e}")
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        rank_standings(gameweek, team_ids, records)
    }

    /// Run gameweeks `1..=through` and return the final gameweek's ranked records.
    pub fn run(&self, through: Gameweek) -> Result<Vec<GameweekRecord>> {
        let team_ids = self.data.team_ids();
        let mut previous: HashMap<TeamId, GameweekRecord> = HashMap::new();
        let mut latest = Vec::new();

        for gameweek in through.up_to() {
            info!(gameweek = %gameweek, teams = team_ids.len(), "processing gameweek");

            let ranked = self.process_gameweek(gameweek, &team_ids, &previous)?;
            self.sink.persist_gameweek(gameweek, &ranked)?;

            previous = ranked.iter().map(|r| (r.team_id, r.clone())).collect();
            latest = ranked;
        }

        Ok(latest)
    }
}
