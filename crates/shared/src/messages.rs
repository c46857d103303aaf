//! Actions the client hands to its store for delivery to the server.
//!
//! ## Versioning Policy
//!
//! - New variants can be added at the end (forward compatible)
//! - Renaming the `type` tag of a variant is a breaking change

use serde::{Deserialize, Serialize};

use crate::requests::GameData;

/// Outbound actions, tagged the way the store's reducers expect them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientAction {
    /// Ask the server to create a game
    #[serde(rename = "CREATE_GAME")]
    CreateGame(GameData),
}

impl ClientAction {
    /// The `type` tag as it appears on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CreateGame(_) => "CREATE_GAME",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::GameOptions;
    use parlor_domain::{GameId, UserId};
    use serde_json::json;

    #[test]
    fn create_game_uses_store_action_shape() {
        let action = ClientAction::CreateGame(GameData {
            game: GameId::from("chess"),
            title: "Ann's Game".to_string(),
            players: vec![UserId::new(1), UserId::new(2)],
            options: GameOptions::new(),
        });

        let value = serde_json::to_value(&action).expect("serializes");
        assert_eq!(
            value,
            json!({
                "type": "CREATE_GAME",
                "data": {
                    "game": "chess",
                    "title": "Ann's Game",
                    "players": [1, 2],
                    "options": {}
                }
            })
        );
        assert_eq!(action.kind(), "CREATE_GAME");
    }

    #[test]
    fn options_keep_their_json_values() {
        let raw = json!({
            "type": "CREATE_GAME",
            "data": {
                "game": "poker",
                "title": "Friday",
                "players": [3, 1],
                "options": { "buyIn": "20", "rebuys": true }
            }
        });

        let ClientAction::CreateGame(data) =
            serde_json::from_value::<ClientAction>(raw).expect("deserializes");
        assert_eq!(data.players, vec![UserId::new(3), UserId::new(1)]);
        assert_eq!(data.option("rebuys"), Some(&json!(true)));
        assert_eq!(data.option("buyIn"), Some(&json!("20")));
    }
}
