//! Application state - single source of truth

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One record returned by the item source.
///
/// The flow never looks inside an item, so it is kept as raw JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Item(pub Value);

impl From<Value> for Item {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Self(Value::String(value.to_string()))
    }
}

impl From<String> for Item {
    fn from(value: String) -> Self {
        Self(Value::String(value))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// State of the item collection
///
/// Request lifecycle: Idle → Loading → Idle (with items or with error).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ItemsState {
    /// Items from the most recent successful fetch
    pub items: Vec<Item>,

    /// Message from the most recent failed fetch (empty = none)
    pub error: String,

    /// Whether a request has been triggered and not yet settled
    pub loading: bool,
}

impl ItemsState {
    pub fn with_items(items: impl IntoIterator<Item = impl Into<Item>>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_idle_and_empty() {
        let state = ItemsState::default();
        assert!(state.items.is_empty());
        assert!(!state.has_error());
        assert!(!state.loading);
    }

    #[test]
    fn test_item_display() {
        assert_eq!(Item::from("apple").to_string(), "apple");
        assert_eq!(
            Item::from(json!({"id": 1, "name": "apple"})).to_string(),
            r#"{"id":1,"name":"apple"}"#
        );
    }

    #[test]
    fn test_state_deserializes_with_missing_fields() {
        let state: ItemsState = serde_json::from_str(r#"{"items": ["a", {"id": 2}]}"#).unwrap();
        assert_eq!(state.items, vec![Item::from("a"), Item::from(json!({"id": 2}))]);
        assert_eq!(state.error, "");
        assert!(!state.loading);
    }
}
