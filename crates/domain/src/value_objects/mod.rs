//! Value objects for game setup.

mod option_kind;
mod player_bounds;
mod roster;

pub use option_kind::OptionKind;
pub use player_bounds::PlayerBounds;
pub use roster::PlayerRoster;
