use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use parlor_domain::{GameId, UserId};

/// Option values keyed by option name.
///
/// Values are whatever the option's control produced: booleans for toggles,
/// the item value for selects, strings for text fields.
pub type GameOptions = BTreeMap<String, Value>;

/// Everything the server needs to create a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    pub game: GameId,
    pub title: String,
    pub players: Vec<UserId>,
    #[serde(default)]
    pub options: GameOptions,
}

impl GameData {
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }
}
