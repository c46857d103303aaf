//! Lobby components - creating and joining games.

mod new_game_form;
pub use new_game_form::NewGameForm;
