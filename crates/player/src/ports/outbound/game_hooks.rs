//! Game Hooks - asynchronous callbacks a game configuration may carry
//!
//! A game can validate individual option values and transform (or veto) the
//! final game data before it is dispatched.

use serde_json::Value;
use thiserror::Error;

use parlor_shared::GameData;

/// Why a presubmit hook refused the game data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HookRejection {
    /// A human readable reason, shown as-is in the form's error banner
    #[error("{0}")]
    Message(String),

    /// The hook failed without explaining why
    #[error("Error")]
    Unspecified,
}

impl HookRejection {
    pub fn message(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        if msg.trim().is_empty() {
            Self::Unspecified
        } else {
            Self::Message(msg)
        }
    }
}

/// Result of validating one option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionVerdict {
    Valid,
    Invalid(String),
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait PresubmitHook: Send + Sync {
    async fn presubmit(&self, data: GameData) -> Result<GameData, HookRejection>;
}

/// Validator attached to a single option.
///
/// `Err` is a validator failure; its message is shown exactly like an
/// `Invalid` verdict.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait OptionValidator: Send + Sync {
    async fn validate(&self, value: Value) -> Result<OptionVerdict, String>;
}
