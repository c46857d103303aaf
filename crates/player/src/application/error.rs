//! Application error types

use thiserror::Error;

use crate::ports::outbound::{DispatchError, HookRejection, LibraryError};

/// Why a create-game attempt failed after passing the form's own checks.
///
/// The `Display` text is what the form shows in its error banner.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0}")]
    Rejected(#[from] HookRejection),

    #[error("{0}")]
    Configuration(#[from] LibraryError),

    #[error("{0}")]
    Dispatch(#[from] DispatchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_text_prefers_hook_message() {
        let err: SubmitError = HookRejection::message("Need an even number of players").into();
        assert_eq!(err.to_string(), "Need an even number of players");
    }

    #[test]
    fn banner_text_falls_back_to_generic_error() {
        let err: SubmitError = HookRejection::message("  ").into();
        assert_eq!(err.to_string(), "Error");
    }

    #[test]
    fn dispatch_failures_are_reported() {
        let err: SubmitError = DispatchError::Closed.into();
        assert_eq!(err.to_string(), "Action store is closed");
    }
}
