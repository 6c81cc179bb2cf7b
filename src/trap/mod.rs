//! The mouse trap: four states, six actions.
//!
//! ```rust
//! use mousetrap::effects::Recorder;
//! use mousetrap::trap::{new_trap, MouseAction, TrapState};
//!
//! let mut trap = new_trap(Recorder::new());
//! trap.accept(MouseAction::Appear);
//! trap.accept(MouseAction::Enter);
//! assert_eq!(trap.current_state(), &TrapState::Trapping);
//! ```

mod event;
mod state;

pub use event::MouseAction;
pub use state::TrapState;

use crate::effects::{StateMachine, StatusSink};

/// A trap state machine.
pub type MouseTrap<O> = StateMachine<TrapState, O>;

/// Build a trap in the `Waiting` state, running its on-enter action.
pub fn new_trap<O: StatusSink>(sink: O) -> MouseTrap<O> {
    StateMachine::new(TrapState::Waiting, sink)
}
