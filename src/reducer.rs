//! Reducer - pure function: (state, action) -> next state

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::ItemsState;

/// Compute the next state. Never touches `state`; unknown actions are the identity.
pub fn reduce(state: &ItemsState, action: Action) -> ItemsState {
    match action {
        Action::ItemsRequest => ItemsState {
            loading: true,
            ..state.clone()
        },

        Action::ItemsRequestSuccess(items) => ItemsState {
            items,
            loading: false,
            error: state.error.clone(),
        },

        Action::ItemsRequestFailure(error) => ItemsState {
            error,
            loading: false,
            items: state.items.clone(),
        },

        Action::Tick | Action::Quit => state.clone(),
    }
}

/// Store reducer: swaps in the output of [`reduce`] and declares the fetch effect.
///
/// Every `ItemsRequest` declares its own `FetchItems`, even while a previous
/// request is still loading.
pub fn reducer(state: &mut ItemsState, action: Action) -> DispatchResult<Effect> {
    let fetch = action.is_request();
    let next = reduce(state, action);
    let changed = next != *state;
    *state = next;

    let mut result = if changed {
        DispatchResult::changed()
    } else {
        DispatchResult::unchanged()
    };
    if fetch {
        result.effects.push(Effect::FetchItems);
    }
    result
}
