//! Games defined in code.
//!
//! Unlike catalog games these can react to the options already chosen and
//! carry presubmit hooks.

use std::sync::Arc;

use serde_json::{json, Value};

use parlor_domain::{GameId, PlayerBounds};
use parlor_shared::{GameData, GameOptions};

use super::{GameDefinition, InMemoryGameLibrary};
use crate::application::dto::{GameConfiguration, OptionSpec, SelectItem};
use crate::ports::outbound::{
    HookRejection, LibraryError, OptionValidator, OptionVerdict, PresubmitHook,
};

pub const HOLDEM: &str = "holdem";

const MAX_BUY_IN: u64 = 10_000;
const DEFAULT_BLINDS: &str = "1/2";

pub fn register_all(library: &InMemoryGameLibrary) {
    library.register(GameId::from(HOLDEM), Arc::new(Holdem::new()));
}

/// Texas hold'em table.
///
/// Rebuys are unavailable heads-up; the rebuy limit is only asked for once
/// rebuys are switched on.
pub struct Holdem {
    buy_in: Arc<dyn OptionValidator>,
    presubmit: Arc<dyn PresubmitHook>,
}

impl Holdem {
    pub fn new() -> Self {
        Self {
            buy_in: Arc::new(BuyInValidator),
            presubmit: Arc::new(HoldemPresubmit),
        }
    }
}

impl Default for Holdem {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDefinition for Holdem {
    fn configure(
        &self,
        options: &GameOptions,
        player_count: Option<usize>,
    ) -> Result<GameConfiguration, LibraryError> {
        let players = PlayerBounds::new(2, 9).map_err(|e| LibraryError::InvalidDefinition {
            game: GameId::from(HOLDEM),
            reason: e.to_string(),
        })?;
        let heads_up = player_count == Some(2);
        let rebuys_on = !heads_up && options.get("rebuys") == Some(&Value::Bool(true));

        let mut config = GameConfiguration::new("Texas Hold'em", players)
            .with_option(
                OptionSpec::text("buyIn", "Buy-in").with_validator(Arc::clone(&self.buy_in)),
            )
            .with_option(OptionSpec::select(
                "blinds",
                "Blinds",
                vec![
                    SelectItem::new("1/2", "1 / 2"),
                    SelectItem::new("5/10", "5 / 10"),
                    SelectItem::new("25/50", "25 / 50"),
                ],
            ))
            .with_option(OptionSpec::boolean("rebuys", "Allow rebuys").with_disabled(heads_up))
            .with_presubmit(Arc::clone(&self.presubmit));

        if rebuys_on {
            config = config.with_option(
                OptionSpec::text("maxRebuys", "Rebuys per player")
                    .with_validator(Arc::clone(&self.buy_in)),
            );
        }
        Ok(config)
    }
}

fn parse_amount(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

struct BuyInValidator;

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl OptionValidator for BuyInValidator {
    async fn validate(&self, value: Value) -> Result<OptionVerdict, String> {
        Ok(match parse_amount(&value) {
            None => OptionVerdict::Invalid("Enter a whole number".to_string()),
            Some(0) => OptionVerdict::Invalid("Must be more than zero".to_string()),
            Some(n) if n > MAX_BUY_IN => {
                OptionVerdict::Invalid(format!("Must be at most {MAX_BUY_IN}"))
            }
            Some(_) => OptionVerdict::Valid,
        })
    }
}

/// Requires a buy-in, stores it as a number and fills in default blinds.
struct HoldemPresubmit;

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl PresubmitHook for HoldemPresubmit {
    async fn presubmit(&self, mut data: GameData) -> Result<GameData, HookRejection> {
        let buy_in = data
            .option("buyIn")
            .and_then(parse_amount)
            .filter(|amount| (1..=MAX_BUY_IN).contains(amount))
            .ok_or_else(|| HookRejection::message("Set a valid buy-in before opening the table"))?;

        data.options.insert("buyIn".to_string(), json!(buy_in));
        data.options
            .entry("blinds".to_string())
            .or_insert_with(|| json!(DEFAULT_BLINDS));
        if data.option("rebuys") != Some(&Value::Bool(true)) {
            data.options.remove("maxRebuys");
        }
        Ok(data)
    }
}
