//! Selectors - read-only projections of state

use serde::Serialize;

use crate::state::{Item, ItemsState};

pub fn select_items(state: &ItemsState) -> &[Item] {
    &state.items
}

pub fn select_loading(state: &ItemsState) -> bool {
    state.loading
}

/// The current error, or `None` when the error field is empty
pub fn select_error(state: &ItemsState) -> Option<&str> {
    if state.error.is_empty() {
        None
    } else {
        Some(&state.error)
    }
}

/// Summary handed to the presentation layer
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemsView {
    pub items: Vec<Item>,
    pub count: usize,
    pub loading: bool,
    pub error: Option<String>,
}

pub fn select_view(state: &ItemsState) -> ItemsView {
    ItemsView {
        items: state.items.clone(),
        count: state.items.len(),
        loading: state.loading,
        error: select_error(state).map(str::to_string),
    }
}

/// Memoized selector: an input projection plus a projector over that input.
///
/// The projector only reruns when the input slice differs from the last one seen.
pub struct Memoized<S, I, O> {
    input: fn(&S) -> &I,
    project: fn(&I) -> O,
    cached: Option<(I, O)>,
    recomputations: usize,
}

impl<S, I, O> Memoized<S, I, O>
where
    I: Clone + PartialEq,
{
    pub fn new(input: fn(&S) -> &I, project: fn(&I) -> O) -> Self {
        Self {
            input,
            project,
            cached: None,
            recomputations: 0,
        }
    }

    pub fn select(&mut self, state: &S) -> &O {
        let input = (self.input)(state);
        if !matches!(&self.cached, Some((last, _)) if last == input) {
            self.cached = None;
        }

        let project = self.project;
        let recomputations = &mut self.recomputations;
        let (_, output) = self.cached.get_or_insert_with(|| {
            *recomputations += 1;
            (input.clone(), project(input))
        });
        output
    }

    /// How many times the projector has run
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

/// Memoized item list, the equivalent of `createSelector(selectState, s => s.items)`
pub fn memoized_items() -> Memoized<ItemsState, Vec<Item>, Vec<Item>> {
    Memoized::new(|state: &ItemsState| &state.items, |items: &Vec<Item>| items.clone())
}
