//! Dispatch Port - hands actions to the client store
//!
//! The store decides how an action reaches the server; this port only
//! guarantees the action was accepted for delivery.

use thiserror::Error;

use parlor_shared::ClientAction;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The store has shut down and no longer accepts actions
    #[error("Action store is closed")]
    Closed,

    #[error("Dispatch failed: {0}")]
    Failed(String),
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait DispatchPort: Send + Sync {
    fn dispatch(&self, action: ClientAction) -> Result<(), DispatchError>;
}
