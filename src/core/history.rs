//! State transition history tracking.
//!
//! Every event a machine accepts is recorded, including events the current
//! state had no entry for, so a run can be replayed and inspected afterwards.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single processed event.
///
/// For an unhandled event `from == to` and `handled` is `false`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state the event arrived in
    pub from: S,
    /// The state held after the event
    pub to: S,
    /// The event that was processed
    pub event: S::Event,
    /// Whether the transition table had an entry for the event
    pub handled: bool,
    /// When the event was processed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of processed events, starting from the machine's
/// initial state.
///
/// # Example
///
/// ```rust
/// use mousetrap::effects::Recorder;
/// use mousetrap::trap::{new_trap, MouseAction, TrapState};
///
/// let mut trap = new_trap(Recorder::new());
/// assert_eq!(trap.history().get_path(), vec![&TrapState::Waiting]);
///
/// trap.accept(MouseAction::Appear);
/// trap.accept(MouseAction::Enter);
///
/// let path = trap.history().get_path();
/// assert_eq!(path.len(), 3); // Waiting -> Luring -> Trapping
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    initial: S,
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> StateHistory<S> {
    /// Create a history for a machine that started in `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            initial,
            transitions: Vec::new(),
        }
    }

    /// Append a processed event.
    pub fn record(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the initial state, then
    /// the `to` state of each recorded event. Unhandled events repeat
    /// the state they arrived in.
    pub fn get_path(&self) -> Vec<&S> {
        std::iter::once(&self.initial)
            .chain(self.transitions.iter().map(|t| &t.to))
            .collect()
    }

    /// Events in the order they were processed.
    pub fn events(&self) -> Vec<S::Event> {
        self.transitions.iter().map(|t| t.event).collect()
    }

    /// Number of events the transition table had no entry for.
    pub fn unhandled_count(&self) -> usize {
        self.transitions.iter().filter(|t| !t.handled).count()
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
