//! Player eligibility categories and formation bounds.

use crate::error::{DraftError, Result};
use crate::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Player eligibility category.
///
/// The draft API reports this as `element_type`, a code from 1 to 4.
/// Formations and formation bounds are always ordered
/// goalkeeper, defender, midfielder, forward.
///
/// # Examples
///
/// ```rust
/// use fpl_draft::Category;
///
/// let mid = Category::from_code(3).unwrap();
/// assert_eq!(mid, Category::Midfielder);
/// assert_eq!(mid.index(), 2);
/// assert_eq!(mid.to_string(), "MID");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Category {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

/// Number of categories in a formation array.
pub const CATEGORY_COUNT: usize = 4;

/// A count of players per category: [GK, DEF, MID, FWD].
pub type Formation = [u8; CATEGORY_COUNT];

/// Fewest starters allowed per category.
pub const MIN_FORMATION: Formation = [1, 3, 2, 1];

/// Most starters allowed per category.
pub const MAX_FORMATION: Formation = [1, 5, 5, 3];

impl Category {
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Goalkeeper,
        Category::Defender,
        Category::Midfielder,
        Category::Forward,
    ];

    /// Convert an API `element_type` code into a category.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Category::Goalkeeper),
            2 => Some(Category::Defender),
            3 => Some(Category::Midfielder),
            4 => Some(Category::Forward),
            _ => None,
        }
    }

    /// Like [`Category::from_code`], but reports which player carried the bad code.
    pub fn for_player(player_id: PlayerId, code: u8) -> Result<Self> {
        Self::from_code(code).ok_or(DraftError::UnknownCategory { player_id, code })
    }

    pub fn code(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Position of this category inside a [`Formation`].
    pub fn index(&self) -> usize {
        match self {
            Category::Goalkeeper => 0,
            Category::Defender => 1,
            Category::Midfielder => 2,
            Category::Forward => 3,
        }
    }

    /// Heading used when printing squads.
    pub fn plural(&self) -> &'static str {
        match self {
            Category::Goalkeeper => "Goalkeepers",
            Category::Defender => "Defenders",
            Category::Midfielder => "Midfielders",
            Category::Forward => "Forwards",
        }
    }
}

impl TryFrom<u8> for Category {
    type Error = String;

    fn try_from(code: u8) -> std::result::Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("Unrecognised category code: {code}"))
    }
}

impl From<Category> for u8 {
    fn from(c: Category) -> u8 {
        c.code()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Goalkeeper => "GK",
            Category::Defender => "DEF",
            Category::Midfielder => "MID",
            Category::Forward => "FWD",
        };
        write!(f, "{}", s)
    }
}
