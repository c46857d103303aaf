//! Application-level data types handed between ports, services and the UI.

mod game_configuration;

pub use game_configuration::{ConfigurationHooks, GameConfiguration, OptionSpec, SelectItem};
pub(crate) use game_configuration::value_key;
