//! Infrastructure adapters behind the player ports.

pub mod game_library;
pub mod messaging;
pub mod module_loader;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use game_library::InMemoryGameLibrary;
pub use messaging::{ActionBus, ActionReceiver};
