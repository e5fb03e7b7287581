//! Actions - everything that can happen to the item collection

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::Item;

/// Application actions
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum Action {
    // ===== Items =====
    /// Intent: load the item collection (triggers async fetch)
    ItemsRequest,

    /// Result: fetch resolved with these items
    ItemsRequestSuccess(Vec<Item>),

    /// Result: fetch failed with this message
    ItemsRequestFailure(String),

    // ===== Runtime =====
    /// Periodic tick from the host loop
    Tick,

    /// Exit the application
    Quit,
}

impl Action {
    pub fn request_items() -> Self {
        Action::ItemsRequest
    }

    pub fn request_items_success(items: impl IntoIterator<Item = impl Into<Item>>) -> Self {
        Action::ItemsRequestSuccess(items.into_iter().map(Into::into).collect())
    }

    pub fn request_items_failure(error: impl Into<String>) -> Self {
        Action::ItemsRequestFailure(error.into())
    }

    /// True for the load trigger
    pub fn is_request(&self) -> bool {
        matches!(self, Action::ItemsRequest)
    }

    /// True for the success/failure actions that settle a request
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Action::ItemsRequestSuccess(_) | Action::ItemsRequestFailure(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::Action as _;

    #[test]
    fn test_constructors() {
        assert_eq!(Action::request_items(), Action::ItemsRequest);
        assert_eq!(
            Action::request_items_success(["a", "b"]),
            Action::ItemsRequestSuccess(vec![Item::from("a"), Item::from("b")])
        );
        assert_eq!(
            Action::request_items_failure("network down"),
            Action::ItemsRequestFailure("network down".into())
        );
    }

    #[test]
    fn test_terminal_predicates() {
        assert!(Action::request_items().is_request());
        assert!(!Action::request_items().is_terminal());
        assert!(Action::request_items_success(Vec::<Item>::new()).is_terminal());
        assert!(Action::request_items_failure("x").is_terminal());
        assert!(!Action::Tick.is_terminal());
        assert!(!Action::Quit.is_request());
    }

    #[test]
    fn test_action_names_are_distinct() {
        let names = [
            Action::request_items().name(),
            Action::request_items_success(Vec::<Item>::new()).name(),
            Action::request_items_failure("x").name(),
            Action::Tick.name(),
            Action::Quit.name(),
        ];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
