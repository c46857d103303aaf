//! Shared fixtures for tests across the crate.

use std::sync::Arc;

use parlor_domain::{PlayerBounds, User, UserId};

use crate::application::dto::GameConfiguration;
use crate::application::services::GameCreationService;
use crate::infrastructure::game_library::{Catalog, InMemoryGameLibrary};
use crate::infrastructure::messaging::{ActionBus, ActionReceiver};

pub const SAMPLE_CATALOG: &str = r#"{
    "games": [
        {
            "id": "chess",
            "name": "Chess",
            "minPlayers": 2,
            "maxPlayers": 2,
            "options": [
                { "type": "boolean", "name": "rated", "label": "Rated" },
                { "type": "text", "name": "increment", "label": "Increment (s)",
                  "rule": { "kind": "integer", "min": 0, "max": 60 } }
            ]
        }
    ]
}"#;

pub fn sample_users() -> Vec<User> {
    vec![
        User::new(UserId::new(1), "Ann"),
        User::new(UserId::new(2), "Bo"),
        User::new(UserId::new(3), "Cy"),
    ]
}

pub fn host() -> User {
    User::new(UserId::new(1), "Ann")
}

pub fn chess_configuration() -> GameConfiguration {
    GameConfiguration::new("Chess", PlayerBounds::new(2, 2).expect("valid bounds"))
}

/// Built-in games plus [`SAMPLE_CATALOG`].
pub fn sample_library() -> InMemoryGameLibrary {
    let library = InMemoryGameLibrary::with_builtin_games();
    let catalog = Catalog::from_json(SAMPLE_CATALOG).expect("sample catalog parses");
    library
        .install_catalog(catalog)
        .expect("sample catalog is valid");
    library
}

/// Service over [`sample_library`] with an action bus whose receiver is
/// returned for inspection.
pub fn sample_service() -> (GameCreationService, ActionReceiver) {
    let (bus, receiver) = ActionBus::channel();
    let service = GameCreationService::new(Arc::new(sample_library()), Arc::new(bus));
    (service, receiver)
}
