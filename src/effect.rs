//! Effects - side effects declared by the reducer

use tracing::warn;

use crate::action::Action;
use crate::source::ItemSource;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the item collection from the injected source
    FetchItems,
}

/// Run one fetch and turn its outcome into the terminal action.
///
/// Always resolves to exactly one of `ItemsRequestSuccess` or
/// `ItemsRequestFailure`; source errors never escape.
pub async fn load_items(source: &dyn ItemSource) -> Action {
    match source.fetch_items().await {
        Ok(items) => Action::ItemsRequestSuccess(items),
        Err(e) => {
            warn!(error = %e, "item fetch failed");
            Action::ItemsRequestFailure(e.to_string())
        }
    }
}
