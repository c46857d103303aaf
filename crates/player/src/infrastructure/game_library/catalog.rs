//! JSON game catalog
//!
//! Static game configurations shipped as an asset. Catalog games cannot
//! carry presubmit hooks, but their options may declare simple validation
//! rules and a minimum seated player count below which they are hidden.
//!
//! ```json
//! {
//!   "games": [
//!     {
//!       "id": "chess",
//!       "name": "Chess",
//!       "minPlayers": 2,
//!       "maxPlayers": 2,
//!       "options": [
//!         { "type": "boolean", "name": "rated", "label": "Rated" },
//!         { "type": "text", "name": "increment", "label": "Increment (s)",
//!           "rule": { "kind": "integer", "min": 0, "max": 60 } }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use parlor_domain::{GameId, OptionKind, PlayerBounds};
use parlor_shared::GameOptions;

use super::GameDefinition;
use crate::application::dto::{GameConfiguration, OptionSpec, SelectItem};
use crate::ports::outbound::{LibraryError, OptionValidator, OptionVerdict};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub games: Vec<CatalogGame>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogGame {
    pub id: GameId,
    pub name: String,
    pub min_players: usize,
    pub max_players: usize,
    #[serde(default)]
    pub options: Vec<CatalogOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOption {
    /// Missing or unknown types are edited as text
    #[serde(default, rename = "type")]
    pub kind: OptionKind,
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub items: Vec<SelectItem>,
    /// Hide the option until at least this many players are seated
    #[serde(default)]
    pub requires_players: Option<usize>,
    #[serde(default)]
    pub rule: Option<ValidationRule>,
}

/// Declarative validators available to catalog options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationRule {
    Required,
    Integer {
        #[serde(default)]
        min: Option<i64>,
        #[serde(default)]
        max: Option<i64>,
    },
    MaxLength {
        max: usize,
    },
}

impl ValidationRule {
    fn check(&self, value: &Value) -> OptionVerdict {
        let text = match value {
            Value::String(s) => s.trim().to_string(),
            Value::Null => String::new(),
            other => other.to_string(),
        };

        match self {
            Self::Required if text.is_empty() => OptionVerdict::Invalid("Required".to_string()),
            Self::Required => OptionVerdict::Valid,
            Self::Integer { min, max } => match text.parse::<i64>() {
                Err(_) => OptionVerdict::Invalid("Must be a whole number".to_string()),
                Ok(n) => match (min, max) {
                    (Some(min), _) if n < *min => {
                        OptionVerdict::Invalid(format!("Must be at least {min}"))
                    }
                    (_, Some(max)) if n > *max => {
                        OptionVerdict::Invalid(format!("Must be at most {max}"))
                    }
                    _ => OptionVerdict::Valid,
                },
            },
            Self::MaxLength { max } if text.chars().count() > *max => {
                OptionVerdict::Invalid(format!("Must be at most {max} characters"))
            }
            Self::MaxLength { .. } => OptionVerdict::Valid,
        }
    }
}

#[derive(Debug)]
struct RuleValidator(ValidationRule);

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl OptionValidator for RuleValidator {
    async fn validate(&self, value: Value) -> Result<OptionVerdict, String> {
        Ok(self.0.check(&value))
    }
}

struct CatalogOptionDefinition {
    spec: OptionSpec,
    requires_players: Option<usize>,
}

/// A catalog entry checked and ready to serve configurations.
pub struct CatalogDefinition {
    name: String,
    players: PlayerBounds,
    options: Vec<CatalogOptionDefinition>,
}

impl GameDefinition for CatalogDefinition {
    fn configure(
        &self,
        _options: &GameOptions,
        player_count: Option<usize>,
    ) -> Result<GameConfiguration, LibraryError> {
        let mut config = GameConfiguration::new(self.name.clone(), self.players);
        for option in &self.options {
            let hidden = match (option.requires_players, player_count) {
                (Some(required), Some(count)) => count < required,
                _ => false,
            };
            if !hidden {
                config = config.with_option(option.spec.clone());
            }
        }
        Ok(config)
    }
}

impl CatalogGame {
    fn into_definition(self) -> Result<(GameId, CatalogDefinition), LibraryError> {
        let players = PlayerBounds::new(self.min_players, self.max_players).map_err(|e| {
            LibraryError::InvalidDefinition {
                game: self.id.clone(),
                reason: e.to_string(),
            }
        })?;

        let mut options = Vec::with_capacity(self.options.len());
        for option in self.options {
            if option.kind == OptionKind::Select && option.items.is_empty() {
                return Err(LibraryError::InvalidDefinition {
                    game: self.id.clone(),
                    reason: format!("select option '{}' has no items", option.name),
                });
            }
            let mut keys = HashSet::new();
            if let Some(item) = option.items.iter().find(|item| !keys.insert(item.key())) {
                return Err(LibraryError::InvalidDefinition {
                    game: self.id.clone(),
                    reason: format!(
                        "option '{}' has items sharing the value '{}'",
                        option.name,
                        item.key()
                    ),
                });
            }

            let mut spec = OptionSpec {
                kind: option.kind,
                name: option.name,
                label: option.label,
                disabled: option.disabled,
                items: option.items,
                validate: None,
            };
            if let Some(rule) = option.rule {
                spec = spec.with_validator(Arc::new(RuleValidator(rule)));
            }
            options.push(CatalogOptionDefinition {
                spec,
                requires_players: option.requires_players,
            });
        }

        Ok((
            self.id,
            CatalogDefinition {
                name: self.name,
                players,
                options,
            },
        ))
    }
}

impl Catalog {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Check every entry; a single invalid game rejects the whole catalog.
    pub fn into_definitions(self) -> Result<Vec<(GameId, Arc<dyn GameDefinition>)>, LibraryError> {
        self.games
            .into_iter()
            .map(|game| {
                let (id, definition) = game.into_definition()?;
                Ok((id, Arc::new(definition) as Arc<dyn GameDefinition>))
            })
            .collect()
    }
}
