//! Errors raised while building domain values.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value breaks a rule of its type, e.g. inverted player bounds
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Text that names no known value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            DomainError::validation("minPlayers (3) cannot exceed maxPlayers (1)").to_string(),
            "Validation failed: minPlayers (3) cannot exceed maxPlayers (1)"
        );
        assert_eq!(
            DomainError::invalid_id("abc").to_string(),
            "Invalid ID format: abc"
        );
        assert_eq!(
            DomainError::parse("Unknown option type: slider").to_string(),
            "Parse error: Unknown option type: slider"
        );
    }
}
