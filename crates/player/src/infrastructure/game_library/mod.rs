//! In-memory game library
//!
//! Games are registered as [`GameDefinition`]s, either from a JSON catalog
//! (see [`catalog`]) or in code (see [`builtin`]). Registration order is the
//! order the game selector shows.

pub mod builtin;
pub mod catalog;

use std::sync::{Arc, RwLock};

use parlor_domain::GameId;
use parlor_shared::GameOptions;

use crate::application::dto::GameConfiguration;
use crate::ports::outbound::{GameLibraryPort, LibraryError};

pub use catalog::{Catalog, CatalogGame};

/// Produces a game's configuration for a given form context.
pub trait GameDefinition: Send + Sync {
    fn configure(
        &self,
        options: &GameOptions,
        player_count: Option<usize>,
    ) -> Result<GameConfiguration, LibraryError>;
}

#[derive(Clone, Default)]
pub struct InMemoryGameLibrary {
    games: Arc<RwLock<Vec<(GameId, Arc<dyn GameDefinition>)>>>,
}

impl InMemoryGameLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library preloaded with the games defined in code.
    pub fn with_builtin_games() -> Self {
        let library = Self::new();
        builtin::register_all(&library);
        library
    }

    /// Add or replace a game. Replacing keeps the game's list position.
    pub fn register(&self, id: GameId, definition: Arc<dyn GameDefinition>) {
        match self.games.write() {
            Ok(mut games) => {
                if let Some(entry) = games.iter_mut().find(|(existing, _)| *existing == id) {
                    tracing::debug!(game = %id, "Replacing game definition");
                    entry.1 = definition;
                } else {
                    tracing::debug!(game = %id, "Registering game");
                    games.push((id, definition));
                }
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for game library: {}", e);
            }
        }
    }

    /// Register every game of a catalog, validating each entry first.
    pub fn install_catalog(&self, catalog: Catalog) -> Result<usize, LibraryError> {
        let definitions = catalog.into_definitions()?;
        let count = definitions.len();
        for (id, definition) in definitions {
            self.register(id, definition);
        }
        Ok(count)
    }

    fn definition(&self, id: &GameId) -> Option<Arc<dyn GameDefinition>> {
        match self.games.read() {
            Ok(games) => games
                .iter()
                .find(|(existing, _)| existing == id)
                .map(|(_, definition)| Arc::clone(definition)),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for game library: {}", e);
                None
            }
        }
    }
}

impl GameLibraryPort for InMemoryGameLibrary {
    fn list(&self) -> Vec<GameId> {
        match self.games.read() {
            Ok(games) => games.iter().map(|(id, _)| id.clone()).collect(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for game library: {}", e);
                Vec::new()
            }
        }
    }

    fn resolve(
        &self,
        game: &GameId,
        options: &GameOptions,
        player_count: Option<usize>,
    ) -> Result<GameConfiguration, LibraryError> {
        let definition = self
            .definition(game)
            .ok_or_else(|| LibraryError::UnknownGame(game.clone()))?;
        definition.configure(options, player_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_domain::PlayerBounds;

    struct Fixed(&'static str);

    impl GameDefinition for Fixed {
        fn configure(
            &self,
            _options: &GameOptions,
            _player_count: Option<usize>,
        ) -> Result<GameConfiguration, LibraryError> {
            Ok(GameConfiguration::new(
                self.0,
                PlayerBounds::new(2, 2).map_err(|e| LibraryError::InvalidDefinition {
                    game: GameId::from(self.0),
                    reason: e.to_string(),
                })?,
            ))
        }
    }

    #[test]
    fn lists_games_in_registration_order() {
        let library = InMemoryGameLibrary::new();
        library.register(GameId::from("go"), Arc::new(Fixed("Go")));
        library.register(GameId::from("chess"), Arc::new(Fixed("Chess")));
        library.register(GameId::from("go"), Arc::new(Fixed("Go (19x19)")));

        assert_eq!(
            library.list(),
            vec![GameId::from("go"), GameId::from("chess")]
        );
        let go = library
            .resolve(&GameId::from("go"), &GameOptions::new(), None)
            .expect("registered");
        assert_eq!(go.name, "Go (19x19)");
    }

    #[test]
    fn unknown_games_are_reported() {
        let library = InMemoryGameLibrary::new();
        let err = library
            .resolve(&GameId::from("ghost"), &GameOptions::new(), Some(1))
            .expect_err("not registered");
        assert_eq!(err, LibraryError::UnknownGame(GameId::from("ghost")));
    }

    #[test]
    fn builtin_games_are_listed() {
        let library = InMemoryGameLibrary::with_builtin_games();
        assert!(library.list().contains(&GameId::from(builtin::HOLDEM)));
    }
}
