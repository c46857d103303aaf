//! Resolved game configuration
//!
//! A configuration is produced by the game library for one game under one
//! context (options chosen so far, seated player count). Besides plain data
//! it may carry asynchronous hooks, so it is not serializable; catalog
//! adapters deserialize their own shapes and convert into these types.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use parlor_domain::{OptionKind, PlayerBounds};

use crate::ports::outbound::{OptionValidator, PresubmitHook};

/// One entry of a select option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectItem {
    pub value: Value,
    pub label: String,
}

impl SelectItem {
    pub fn new(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// String form used as the HTML `<option value>`
    pub fn key(&self) -> String {
        value_key(&self.value)
    }
}

/// Stable string form of an option value (strings are not quoted).
pub(crate) fn value_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Declarative description of one configurable field.
#[derive(Clone)]
pub struct OptionSpec {
    pub kind: OptionKind,
    /// Key into the form's options map
    pub name: String,
    pub label: String,
    pub disabled: bool,
    /// Only meaningful for `OptionKind::Select`
    pub items: Vec<SelectItem>,
    pub validate: Option<Arc<dyn OptionValidator>>,
}

impl OptionSpec {
    fn new(kind: OptionKind, name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            label: label.into(),
            disabled: false,
            items: Vec::new(),
            validate: None,
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(OptionKind::Text, name, label)
    }

    pub fn boolean(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(OptionKind::Boolean, name, label)
    }

    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        items: Vec<SelectItem>,
    ) -> Self {
        Self {
            items,
            ..Self::new(OptionKind::Select, name, label)
        }
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_validator(mut self, validator: Arc<dyn OptionValidator>) -> Self {
        self.validate = Some(validator);
        self
    }

    /// Find the select item whose key matches an HTML `<option value>`.
    pub fn item_by_key(&self, key: &str) -> Option<&SelectItem> {
        self.items.iter().find(|item| item.key() == key)
    }
}

impl fmt::Debug for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionSpec")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("label", &self.label)
            .field("disabled", &self.disabled)
            .field("items", &self.items)
            .field("validate", &self.validate.is_some())
            .finish()
    }
}

impl PartialEq for OptionSpec {
    fn eq(&self, other: &Self) -> bool {
        let same_validator = match (&self.validate, &other.validate) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.kind == other.kind
            && self.name == other.name
            && self.label == other.label
            && self.disabled == other.disabled
            && self.items == other.items
            && same_validator
    }
}

#[derive(Clone, Default)]
pub struct ConfigurationHooks {
    pub presubmit: Option<Arc<dyn PresubmitHook>>,
}

impl fmt::Debug for ConfigurationHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationHooks")
            .field("presubmit", &self.presubmit.is_some())
            .finish()
    }
}

impl PartialEq for ConfigurationHooks {
    fn eq(&self, other: &Self) -> bool {
        match (&self.presubmit, &other.presubmit) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Per-game descriptor of player bounds and configurable options.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfiguration {
    /// Display name
    pub name: String,
    pub players: PlayerBounds,
    pub options: Vec<OptionSpec>,
    pub hooks: ConfigurationHooks,
}

impl GameConfiguration {
    pub fn new(name: impl Into<String>, players: PlayerBounds) -> Self {
        Self {
            name: name.into(),
            players,
            options: Vec::new(),
            hooks: ConfigurationHooks::default(),
        }
    }

    pub fn with_option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_presubmit(mut self, hook: Arc<dyn PresubmitHook>) -> Self {
        self.hooks.presubmit = Some(hook);
        self
    }

    pub fn min_players(&self) -> usize {
        self.players.min()
    }

    pub fn max_players(&self) -> usize {
        self.players.max()
    }

    pub fn option(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|option| option.name == name)
    }
}
