//! Core State trait for table-driven state machines.
//!
//! A state knows its own name, what it does while current, and where each
//! event takes it. `next` is pure; the side effect of entering a state is
//! routed through a [`StatusSink`] so the caller decides where it goes.

use crate::effects::StatusSink;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Outcome of looking up `(state, event)` in a transition table.
///
/// Both variants carry the state the machine should hold afterwards, so a
/// lookup never fails. `Unhandled` marks an event the current state has no
/// entry for; the machine stays put and emits a warning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum TransitionResult<S: State> {
    /// The table has an entry; move to this state.
    Success(S),

    /// No entry for the event; stay in `current_state`.
    Unhandled { current_state: S },
}

impl<S: State> TransitionResult<S> {
    /// The state to hold after this step, whether or not the event was handled.
    pub fn into_state(self) -> S {
        match self {
            Self::Success(state) => state,
            Self::Unhandled { current_state } => current_state,
        }
    }

    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the history
/// - `PartialEq`: no-op transitions compare equal to their source
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: history and run reports are emitted as JSON
///
/// # Example
///
/// ```rust
/// use mousetrap::core::{State, TransitionResult};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
/// enum Switch {
///     Off,
///     On,
/// }
///
/// impl State for Switch {
///     type Event = ();
///
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
///
///     fn activity(&self) -> &str {
///         match self {
///             Self::Off => "Dark",
///             Self::On => "Shining",
///         }
///     }
///
///     fn next(&self, _event: ()) -> TransitionResult<Self> {
///         match self {
///             Self::Off => TransitionResult::Success(Self::On),
///             Self::On => TransitionResult::Success(Self::Off),
///         }
///     }
/// }
///
/// assert_eq!(Switch::Off.next(()).into_state(), Switch::On);
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync
{
    /// Input signal this state reacts to.
    type Event: Copy + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync;

    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Short description of what the state does while it is current.
    fn activity(&self) -> &str;

    /// Pure transition function. Total over every event.
    fn next(&self, event: Self::Event) -> TransitionResult<Self>;

    /// Action run whenever this state becomes current, including the
    /// initial state.
    fn on_enter<O: StatusSink + ?Sized>(&self, sink: &mut O) {
        sink.status(&format!("{}: {}", self.name(), self.activity()));
    }
}
