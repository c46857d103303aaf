//! Parlor domain vocabulary.
//!
//! Pure types shared by every layer of the client: identifiers, users,
//! player rosters and the option vocabulary used by game configurations.
//! No I/O and no async lives here.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::User;
pub use error::DomainError;
pub use ids::{GameId, UserId};
pub use value_objects::{OptionKind, PlayerBounds, PlayerRoster};
