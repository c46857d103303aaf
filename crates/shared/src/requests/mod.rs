mod game;

pub use game::{GameData, GameOptions};
