//! Runtime - owns the state, applies the reducer, runs effects
//!
//! `ItemFlow` holds the only store of [`ItemsState`]. Actions are reduced in the
//! order they are dispatched; fetches run concurrently on tokio and come back
//! in completion order. Nothing is cancelled or de-duplicated: overlapping
//! requests each settle, and whichever terminal action is reduced last wins.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use tui_dispatch::{Action as _, EffectStore};

use crate::action::Action;
use crate::config::Config;
use crate::effect::{load_items, Effect};
use crate::reducer::reducer;
use crate::source::ItemSource;
use crate::state::ItemsState;

/// Sequence number of one load trigger
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Runs declared effects as tokio tasks and hands back their terminal actions
pub struct EffectRunner {
    source: Arc<dyn ItemSource>,
    timeout: Option<Duration>,
    tasks: JoinSet<(RequestId, Action)>,
    next_id: u64,
}

impl EffectRunner {
    pub fn new(source: Arc<dyn ItemSource>) -> Self {
        Self {
            source,
            timeout: None,
            tasks: JoinSet::new(),
            next_id: 1,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Spawn the effect. Must be called from inside a tokio runtime.
    pub fn run(&mut self, effect: Effect) -> RequestId {
        match effect {
            Effect::FetchItems => {
                let request = RequestId(self.next_id);
                self.next_id += 1;

                let source = Arc::clone(&self.source);
                let timeout = self.timeout;
                info!(%request, in_flight = self.tasks.len() + 1, "fetching items");
                self.tasks.spawn(async move {
                    let action = match timeout {
                        Some(limit) => {
                            match tokio::time::timeout(limit, load_items(source.as_ref())).await {
                                Ok(action) => action,
                                Err(_) => Action::ItemsRequestFailure(format!(
                                    "request timed out after {}ms",
                                    limit.as_millis()
                                )),
                            }
                        }
                        None => load_items(source.as_ref()).await,
                    };
                    (request, action)
                });
                request
            }
        }
    }

    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Wait for the next fetch to settle. `None` once nothing is in flight.
    ///
    /// A task that panicked or was aborted still yields a failure action.
    pub async fn next_completion(&mut self) -> Option<Action> {
        let joined = self.tasks.join_next().await?;
        let action = match joined {
            Ok((request, action)) => {
                debug!(%request, action = action.name(), "fetch settled");
                action
            }
            Err(e) => {
                warn!(error = %e, "fetch task did not complete");
                Action::ItemsRequestFailure(format!("fetch task failed: {}", e))
            }
        };
        Some(action)
    }
}

/// The flow: the store holding the single state, plus the effect runner
pub struct ItemFlow {
    store: EffectStore<ItemsState, Action, Effect>,
    effects: EffectRunner,
}

impl ItemFlow {
    pub fn new(source: Arc<dyn ItemSource>) -> Self {
        Self::with_state(ItemsState::default(), EffectRunner::new(source))
    }

    /// Build the source and runner described by `config`
    pub fn from_config(config: &Config) -> Self {
        let effects = EffectRunner::new(config.build_source()).with_timeout(config.timeout);
        Self::with_state(ItemsState::default(), effects)
    }

    pub fn with_state(state: ItemsState, effects: EffectRunner) -> Self {
        Self {
            store: EffectStore::new(state, reducer),
            effects,
        }
    }

    pub fn state(&self) -> &ItemsState {
        self.store.state()
    }

    /// Project the current state through a selector
    pub fn select<'a, O>(&'a self, selector: impl FnOnce(&'a ItemsState) -> O) -> O {
        selector(self.store.state())
    }

    /// Reduce `action` and start any effects it declares. Returns whether the
    /// state changed.
    ///
    /// Must be called from inside a tokio runtime: an `ItemsRequest` spawns its
    /// fetch task immediately.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let name = action.name();
        let result = self.store.dispatch(action);
        let changed = result.changed;
        debug!(action = name, changed, "dispatched");
        for effect in result.effects {
            self.effects.run(effect);
        }
        changed
    }

    pub fn in_flight(&self) -> usize {
        self.effects.in_flight()
    }

    /// Next terminal action from a settled fetch, not yet reduced
    pub async fn next_completion(&mut self) -> Option<Action> {
        self.effects.next_completion().await
    }

    /// Reduce completions as they arrive until nothing is in flight.
    /// Returns the number of terminal actions processed.
    pub async fn settle(&mut self) -> usize {
        let mut processed = 0;
        while let Some(action) = self.next_completion().await {
            self.dispatch(action);
            processed += 1;
        }
        let state = self.store.state();
        info!(
            processed,
            items = state.items.len(),
            error = %state.error,
            "flow settled"
        );
        processed
    }
}
