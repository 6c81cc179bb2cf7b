//! Mousetrap: a table-driven state machine
//!
//! A mouse trap modeled as four states reacting to six mouse actions. The
//! transition function is pure; entering a state writes a status line
//! through a sink the caller chooses, and events normally arrive from a
//! script file.
//!
//! # Core Concepts
//!
//! - **State**: Type-safe state representation via the `State` trait
//! - **Transition table**: Declared once with `transition_table!`
//! - **State machine**: Applies events, runs on-enter actions, keeps history
//! - **Script**: Lines whose third field is an event code
//!
//! # Example
//!
//! ```rust
//! use mousetrap::effects::Recorder;
//! use mousetrap::trap::{new_trap, MouseAction, TrapState};
//!
//! let mut trap = new_trap(Recorder::new());
//! trap.accept(MouseAction::Appear);
//! trap.accept(MouseAction::Enter);
//! trap.accept(MouseAction::Trapped);
//! trap.accept(MouseAction::Removed);
//!
//! assert_eq!(trap.current_state(), &TrapState::Waiting);
//! assert_eq!(trap.sink().lines()[0], "Waiting: Broadcasting cheese smell");
//! ```

pub mod core;
pub mod effects;
pub mod script;
pub mod trap;

// Re-export commonly used types
pub use self::core::{State, StateHistory, StateTransition, TransitionResult};
pub use self::effects::{Console, Recorder, StateMachine, StatusSink};
pub use self::script::{
    InvalidEventError, RunOptions, RunReport, Script, ScriptError, ScriptRunner,
};
pub use self::trap::{new_trap, MouseAction, MouseTrap, TrapState};
