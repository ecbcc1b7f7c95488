//! Season inputs and output sink backed by the JSON store

use std::sync::Arc;

use tracing::{debug, warn};

use super::store::JsonStore;
use crate::{
    cli::types::{Gameweek, LeagueId, TeamId},
    engine::{
        GameweekRecord, PlayerDirectory, RecordSink, RosterSnapshot, ScoreIndex, SeasonData,
    },
    error::DraftError,
    fpl::types::LeagueDetails,
    Result,
};

/// One league's season as stored in the data directory.
pub struct StoredSeason<'a> {
    store: &'a JsonStore,
    league_id: LeagueId,
    details: LeagueDetails,
    directory: PlayerDirectory,
}

impl<'a> StoredSeason<'a> {
    /// Load the player directory and league details; per-gameweek
    /// documents are read on demand.
    pub fn open(store: &'a JsonStore, league_id: LeagueId) -> Result<Self> {
        let directory = PlayerDirectory::from_bootstrap(&store.load_bootstrap()?);
        if directory.is_empty() {
            warn!(league = %league_id, "bootstrap lists no players");
        }
        let details = store.load_league_details(league_id)?;
        debug!(
            league = %league_id,
            players = directory.len(),
            teams = details.league_entries.len(),
            "opened stored season"
        );
        Ok(Self {
            store,
            league_id,
            details,
            directory,
        })
    }

    pub fn league_id(&self) -> LeagueId {
        self.league_id
    }

    pub fn details(&self) -> &LeagueDetails {
        &self.details
    }
}

impl SeasonData for StoredSeason<'_> {
    fn team_ids(&self) -> Vec<TeamId> {
        self.details.team_ids()
    }

    fn directory(&self) -> &PlayerDirectory {
        &self.directory
    }

    fn score_index(&self, gameweek: Gameweek) -> Result<Arc<ScoreIndex>> {
        self.store.score_index(gameweek)
    }

    fn roster(&self, team_id: TeamId, gameweek: Gameweek) -> Result<RosterSnapshot> {
        let entry = self
            .details
            .entry(team_id)
            .ok_or(DraftError::TeamNotFound { team_id })?;
        let event = self
            .store
            .load_entry_event(self.league_id, team_id, gameweek)?;
        Ok(RosterSnapshot::from_entry_event(entry, gameweek, &event))
    }
}

impl RecordSink for StoredSeason<'_> {
    fn persist_gameweek(&self, gameweek: Gameweek, records: &[GameweekRecord]) -> Result<()> {
        self.store
            .save_gameweek_records(self.league_id, gameweek, records)
    }
}
