//! Deserialised shapes of the FPL Draft API documents the engine reads.
//!
//! Only the fields the engine needs are modelled; everything else in the
//! payloads is ignored so that provider additions do not break parsing.

use crate::cli::types::{Gameweek, PlayerId, TeamId};
use serde::{de::Error, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;


fn de_str_key_map_player_id<'de, D, V>(deserializer: D) -> Result<BTreeMap<PlayerId, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    let raw: BTreeMap<String, V> = Deserialize::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(k, v)| {
            k.parse::<u32>()
                .map(|id| (PlayerId::new(id), v))
                .map_err(D::Error::custom)
        })
        .collect()
}

/// `bootstrap-static`: the season-wide player list.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BootstrapStatic {
    pub elements: Vec<Element>,
}

/// One player in `bootstrap-static`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Element {
    pub id: PlayerId,
    pub first_name: String,
    pub second_name: String,
    /// Category code, 1 = GK .. 4 = FWD
    pub element_type: u8,
}

/// `game`: status of the running gameweek.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameStatus {
    pub current_event: u16,
    pub current_event_finished: bool,
}

impl GameStatus {
    /// The most recent gameweek whose scores are final.
    ///
    /// Returns `None` before the first gameweek has finished.
    pub fn last_finished_gameweek(&self) -> Option<Gameweek> {
        let gw = if self.current_event_finished {
            self.current_event
        } else {
            self.current_event.saturating_sub(1)
        };
        (gw > 0).then_some(Gameweek::new(gw))
    }
}

/// `league/{id}/details`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueDetails {
    pub league_entries: Vec<LeagueEntry>,
}

impl LeagueDetails {
    pub fn team_ids(&self) -> Vec<TeamId> {
        self.league_entries.iter().map(|e| e.entry_id).collect()
    }

    pub fn entry(&self, team_id: TeamId) -> Option<&LeagueEntry> {
        self.league_entries.iter().find(|e| e.entry_id == team_id)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueEntry {
    pub entry_id: TeamId,
    pub entry_name: String,
    pub player_first_name: String,
    pub player_last_name: String,
}

impl LeagueEntry {
    /// Full name of the manager running this team.
    pub fn captain_name(&self) -> String {
        format!("{} {}", self.player_first_name, self.player_last_name)
    }
}

/// `event/{gw}/live`: per-player points for one gameweek.
///
/// The API keys `elements` by stringified player id; players who did not
/// feature are simply absent.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LiveGameweek {
    #[serde(deserialize_with = "de_str_key_map_player_id", default)]
    pub elements: BTreeMap<PlayerId, LiveElement>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LiveElement {
    pub stats: LiveStats,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LiveStats {
    #[serde(default)]
    pub total_points: i32,
}

/// `entry/{team}/event/{gw}`: the squad a team picked for a gameweek.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EntryEvent {
    pub picks: Vec<Pick>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Pick {
    pub element: PlayerId,
    /// Squad slot, 1..=15
    pub position: u8,
}
