//! Team roster snapshot: the 15 picks of one team for one gameweek.

use crate::{
    cli::types::{Gameweek, PlayerId, TeamId},
    fpl::types::{EntryEvent, LeagueEntry},
};

/// Squad slots 1..=STARTING_SLOTS start, the rest sit on the bench.
pub const STARTING_SLOTS: u8 = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterSlot {
    pub player_id: PlayerId,
    /// Squad position, 1..=15
    pub position: u8,
}

impl RosterSlot {
    pub fn new(player_id: PlayerId, position: u8) -> Self {
        Self {
            player_id,
            position,
        }
    }

    pub fn is_starter(&self) -> bool {
        self.position <= STARTING_SLOTS
    }
}

#[derive(Debug, Clone)]
pub struct RosterSnapshot {
    pub team_id: TeamId,
    pub team_name: String,
    pub captain_name: String,
    pub gameweek: Gameweek,
    pub slots: Vec<RosterSlot>,
}

impl RosterSnapshot {
    pub fn from_entry_event(entry: &LeagueEntry, gameweek: Gameweek, event: &EntryEvent) -> Self {
        Self {
            team_id: entry.entry_id,
            team_name: entry.entry_name.clone(),
            captain_name: entry.captain_name(),
            gameweek,
            slots: event
                .picks
                .iter()
                .map(|p| RosterSlot::new(p.element, p.position))
                .collect(),
        }
    }
}
