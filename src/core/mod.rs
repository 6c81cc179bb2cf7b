//! Core state machine types and logic.
//!
//! This module contains the pure part of the state machine:
//! - State definitions via the `State` trait
//! - Table lookups through the `transition_table!` macro
//! - History of processed events
//!
//! Nothing here performs I/O; entering a state writes through a
//! caller-supplied `StatusSink`.

mod history;
pub(crate) mod macros;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::{State, TransitionResult};
