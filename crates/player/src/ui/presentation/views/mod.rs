//! Top-level screens.

mod lobby_view;

pub use lobby_view::{LobbyView, GAME_CATALOG_ASSET};
