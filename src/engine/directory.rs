//! Player directory: id -> name and category, built from `bootstrap-static`.

use std::collections::HashMap;

use crate::{
    cli::types::{Category, PlayerId},
    error::DraftError,
    fpl::types::BootstrapStatic,
    Result,
};

/// Immutable facts about one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub first_name: String,
    pub second_name: String,
    /// Raw category code as served by the API. Checked when the player is used.
    pub category_code: u8,
}

impl DirectoryEntry {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.second_name)
    }
}

/// Read-only lookup of every player in the game.
#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    players: HashMap<PlayerId, DirectoryEntry>,
}

impl PlayerDirectory {
    pub fn from_bootstrap(bootstrap: &BootstrapStatic) -> Self {
        bootstrap
            .elements
            .iter()
            .map(|e| {
                (
                    e.id,
                    DirectoryEntry {
                        first_name: e.first_name.clone(),
                        second_name: e.second_name.clone(),
                        category_code: e.element_type,
                    },
                )
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, player_id: PlayerId) -> Result<&DirectoryEntry> {
        self.players
            .get(&player_id)
            .ok_or(DraftError::PlayerNotFound { player_id })
    }

    /// Entry and validated category for a rostered player.
    pub fn lookup(&self, player_id: PlayerId) -> Result<(&DirectoryEntry, Category)> {
        let entry = self.get(player_id)?;
        let category = Category::for_player(player_id, entry.category_code)?;
        Ok((entry, category))
    }
}

impl FromIterator<(PlayerId, DirectoryEntry)> for PlayerDirectory {
    fn from_iter<I: IntoIterator<Item = (PlayerId, DirectoryEntry)>>(iter: I) -> Self {
        Self {
            players: iter.into_iter().collect(),
        }
    }
}
