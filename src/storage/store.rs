//! JSON document store over the data directory

use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::{debug, warn};

use super::layout::DataLayout;
use crate::{
    cli::types::{Gameweek, LeagueId, TeamId},
    core::{
        backup_path, stage_string, staging_path, try_read_to_string, write_string, MemoryCache,
    },
    engine::{GameweekRecord, ScoreIndex},
    error::DraftError,
    fpl::types::{BootstrapStatic, EntryEvent, GameStatus, LeagueDetails, LiveGameweek},
    Result,
};

/// Parsed score indexes kept in memory; a season has 38 gameweeks.
const SCORE_CACHE_CAPACITY: usize = 38;

/// Reads provider documents and reads/writes gameweek records.
pub struct JsonStore {
    layout: DataLayout,
    scores: MemoryCache<Gameweek, Arc<ScoreIndex>>,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            layout: DataLayout::new(root),
            scores: MemoryCache::new(SCORE_CACHE_CAPACITY),
        }
    }

    pub fn layout(&self) -> &DataLayout {
        &self.layout
    }

    /// Read and decode a required document.
    pub fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let contents = try_read_to_string(path).ok_or_else(|| DraftError::MissingInput {
            path: path.display().to_string(),
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Pretty-print `value` to `path`, replacing any existing file atomically.
    pub fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        let contents = serde_json::to_string_pretty(value)?;
        write_string(path, &contents)?;
        debug!(path = %path.display(), "saved");
        Ok(())
    }

    pub fn load_bootstrap(&self) -> Result<BootstrapStatic> {
        self.read_json(&self.layout.bootstrap_path())
    }

    pub fn load_game_status(&self) -> Result<GameStatus> {
        self.read_json(&self.layout.game_path())
    }

    pub fn load_league_details(&self, league_id: LeagueId) -> Result<LeagueDetails> {
        self.read_json(&self.layout.league_details_path(league_id))
    }

    pub fn load_live_gameweek(&self, gameweek: Gameweek) -> Result<LiveGameweek> {
        self.read_json(&self.layout.live_gameweek_path(gameweek))
    }

    pub fn load_entry_event(
        &self,
        league_id: LeagueId,
        team_id: TeamId,
        gameweek: Gameweek,
    ) -> Result<EntryEvent> {
        self.read_json(&self.layout.entry_event_path(league_id, team_id, gameweek))
    }

    /// Score index for a gameweek, parsed once and then served from memory.
    pub fn score_index(&self, gameweek: Gameweek) -> Result<Arc<ScoreIndex>> {
        if let Some(index) = self.scores.get(&gameweek) {
            return Ok(index);
        }

        let live = self.load_live_gameweek(gameweek)?;
        let index = Arc::new(ScoreIndex::from_live(gameweek, &live));
        if index.is_empty() {
            warn!(gameweek = %gameweek, "no player featured in live scores");
        }
        debug!(gameweek = %index.gameweek(), players = index.len(), "parsed live scores");
        self.scores.put(gameweek, Arc::clone(&index));
        Ok(index)
    }

    /// Every team's record for a gameweek; a missing one is `MissingRecord`.
    pub fn load_gameweek_records(
        &self,
        league_id: LeagueId,
        team_ids: &[TeamId],
        gameweek: Gameweek,
    ) -> Result<Vec<GameweekRecord>> {
        team_ids
            .iter()
            .map(|&team_id| {
                let path = self.layout.record_path(league_id, team_id, gameweek);
                let contents =
                    try_read_to_string(&path).ok_or_else(|| DraftError::MissingRecord {
                        path: path.display().to_string(),
                    })?;
                Ok(serde_json::from_str(&contents)?)
            })
            .collect()
    }

    /// Persist a gameweek's ranked records as one unit.
    ///
    /// All records are staged first and existing files backed up; only then
    /// are they renamed into place. If any step fails, files already renamed
    /// are restored from their backups, so either every record is final or
    /// none of the previous files changed.
    pub fn save_gameweek_records(
        &self,
        league_id: LeagueId,
        gameweek: Gameweek,
        records: &[GameweekRecord],
    ) -> Result<()> {
        if let Some(stray) = records.iter().find(|r| r.gameweek != gameweek) {
            return Err(DraftError::Storage {
                message: format!(
                    "record for team {} is gameweek {}, expected {}",
                    stray.team_id, stray.gameweek, gameweek
                ),
            });
        }

        let mut batch: Vec<StagedFile> = Vec::with_capacity(records.len());
        let outcome = stage_records(&self.layout, league_id, records, &mut batch)
            .and_then(|()| commit(&mut batch));
        discard_leftovers(&batch);
        outcome?;

        debug!(gameweek = %gameweek, records = records.len(), "saved gameweek records");
        Ok(())
    }
}

/// One record of a batch on its way to its final path.
struct StagedFile {
    target: PathBuf,
    staged: PathBuf,
    backup: Option<PathBuf>,
}

fn stage_records(
    layout: &DataLayout,
    league_id: LeagueId,
    records: &[GameweekRecord],
    batch: &mut Vec<StagedFile>,
) -> anyhow::Result<()> {
    for record in records {
        let target = layout.record_path(league_id, record.team_id, record.gameweek);
        batch.push(StagedFile {
            staged: staging_path(&target),
            target: target.clone(),
            backup: None,
        });

        let contents = serde_json::to_string_pretty(record)
            .with_context(|| format!("encoding record for team {}", record.team_id))?;
        stage_string(&target, &contents)
            .with_context(|| format!("staging {}", target.display()))?;
    }
    Ok(())
}

fn commit(batch: &mut [StagedFile]) -> anyhow::Result<()> {
    for file in batch.iter_mut() {
        if file.target.is_file() {
            let backup = backup_path(&file.target);
            fs::copy(&file.target, &backup)
                .with_context(|| format!("backing up {}", file.target.display()))?;
            file.backup = Some(backup);
        }
    }

    for (idx, file) in batch.iter().enumerate() {
        if let Err(e) = fs::rename(&file.staged, &file.target) {
            roll_back(&batch[..idx]);
            return Err(e)
                .with_context(|| format!("renaming {} into place", file.target.display()));
        }
    }
    Ok(())
}

/// Put back whatever was at each target before the batch renamed over it.
fn roll_back(committed: &[StagedFile]) {
    for file in committed.iter().rev() {
        let restored = match &file.backup {
            Some(backup) => fs::rename(backup, &file.target),
            None => fs::remove_file(&file.target),
        };
        if let Err(e) = restored {
            warn!(path = %file.target.display(), "could not roll back: {e}");
        }
    }
}

fn discard_leftovers(batch: &[StagedFile]) {
    for path in batch
        .iter()
        .flat_map(|f| std::iter::once(&f.staged).chain(f.backup.as_ref()))
    {
        if path.exists() {
            if let Err(e) = fs::remove_file(path) {
                warn!(path = %path.display(), "could not remove leftover file: {e}");
            }
        }
    }
}
