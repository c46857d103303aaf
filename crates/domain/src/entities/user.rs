//! Users known to the client session.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// A user that can be seated in a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Title a new game hosted by this user starts with, e.g. "Ann's Game".
    pub fn default_game_title(&self) -> String {
        format!("{}'s Game", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_title_uses_possessive_name() {
        let ann = User::new(UserId::new(1), "Ann");
        assert_eq!(ann.default_game_title(), "Ann's Game");
    }
}
