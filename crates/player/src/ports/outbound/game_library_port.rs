//! Game Library Port - the registry of playable games
//!
//! Configurations are resolved on demand because a game may change its
//! options, or their shape, depending on the options already chosen and on
//! how many players are seated.

use thiserror::Error;

use parlor_domain::GameId;
use parlor_shared::GameOptions;

use crate::application::dto::GameConfiguration;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("Unknown game: {0}")]
    UnknownGame(GameId),

    #[error("Invalid configuration for {game}: {reason}")]
    InvalidDefinition { game: GameId, reason: String },
}

/// Port for looking up games and their configurations.
///
/// `player_count` is `None` for display-only lookups (e.g. the game selector
/// label) where no roster context exists.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait GameLibraryPort: Send + Sync {
    /// Game identifiers in display order
    fn list(&self) -> Vec<GameId>;

    fn resolve(
        &self,
        game: &GameId,
        options: &GameOptions,
        player_count: Option<usize>,
    ) -> Result<GameConfiguration, LibraryError>;
}
