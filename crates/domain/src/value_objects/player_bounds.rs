use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Seat limits declared by a game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct PlayerBounds {
    min: usize,
    max: usize,
}

impl PlayerBounds {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when `min` exceeds `max`.
    pub fn new(min: usize, max: usize) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::validation(format!(
                "minPlayers ({min}) cannot exceed maxPlayers ({max})"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Whether a seat at `slot` must be filled before the game can be created.
    pub fn requires(&self, slot: usize) -> bool {
        slot < self.min
    }

    pub fn is_satisfied_by(&self, player_count: usize) -> bool {
        player_count >= self.min
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBounds {
    min_players: usize,
    max_players: usize,
}

impl TryFrom<RawBounds> for PlayerBounds {
    type Error = DomainError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Self::new(raw.min_players, raw.max_players)
    }
}

impl From<PlayerBounds> for RawBounds {
    fn from(bounds: PlayerBounds) -> Self {
        Self {
            min_players: bounds.min,
            max_players: bounds.max,
        }
    }
}
