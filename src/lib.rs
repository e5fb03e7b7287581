//! Item flow - unidirectional state management for a remote item collection
//!
//! Actions go in, the reducer produces the next state, effects run the fetch
//! and feed their terminal action back in, selectors read the result.

pub mod action;
pub mod config;
pub mod effect;
pub mod error;
pub mod reducer;
pub mod runtime;
pub mod schema;
pub mod selector;
pub mod source;
pub mod state;
