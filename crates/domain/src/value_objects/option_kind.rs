use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Control used to edit a game option.
///
/// Anything the client does not recognise, a missing type included, is
/// edited as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OptionKind {
    Boolean,
    Select,
    #[default]
    Text,
}

impl OptionKind {
    /// Lenient conversion used when reading catalog data.
    pub fn from_type_name(name: Option<&str>) -> Self {
        name.and_then(|n| n.parse().ok()).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Select => "select",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OptionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OptionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = Option::<String>::deserialize(deserializer)?;
        Ok(Self::from_type_name(name.as_deref()))
    }
}

impl FromStr for OptionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "boolean" => Ok(Self::Boolean),
            "select" => Ok(Self::Select),
            "text" => Ok(Self::Text),
            other => Err(DomainError::parse(format!("Unknown option type: {other}"))),
        }
    }
}
