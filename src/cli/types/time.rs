//! Gameweek numbering.

use crate::error::{DraftError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for gameweek numbers. Gameweeks start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Gameweek(pub u16);

impl Gameweek {
    pub fn new(gameweek: u16) -> Self {
        Self(gameweek)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The gameweek before this one, or `None` for gameweek 1 (and 0).
    pub fn previous(&self) -> Option<Gameweek> {
        if self.0 > 1 {
            Some(Self(self.0 - 1))
        } else {
            None
        }
    }

    /// Gameweeks `1..=self` in processing order.
    pub fn up_to(self) -> impl Iterator<Item = Gameweek> {
        (1..=self.0).map(Gameweek)
    }
}

impl Default for Gameweek {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Gameweek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Gameweek {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self> {
        let gameweek = Self(s.parse()?);
        if gameweek.0 == 0 {
            return Err(DraftError::InvalidGameweek { gameweek });
        }
        Ok(gameweek)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_gameweek() {
        assert_eq!(Gameweek::new(5).previous(), Some(Gameweek::new(4)));
        assert_eq!(Gameweek::new(1).previous(), None);
    }

    #[test]
    fn test_up_to_is_ordered() {
        let weeks: Vec<u16> = Gameweek::new(4).up_to().map(|g| g.as_u16()).collect();
        assert_eq!(weeks, vec![1, 2, 3, 4]);
        assert_eq!(Gameweek::new(0).up_to().count(), 0);
    }

    #[test]
    fn test_parse_rejects_zero() {
        assert_eq!("12".parse::<Gameweek>().unwrap(), Gameweek::new(12));
        match "0".parse::<Gameweek>() {
            Err(DraftError::InvalidGameweek { gameweek }) => assert_eq!(gameweek.as_u16(), 0),
            other => panic!("Expected InvalidGameweek, got {other:?}"),
        }
    }
}
