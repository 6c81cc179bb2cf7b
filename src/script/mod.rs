//! Script-driven runs.
//!
//! A script is a text file with one event per line. Lines are split on
//! whitespace and the field at [`EVENT_FIELD`] holds the event code:
//!
//! ```text
//! Mouse action 0
//! Mouse action 2
//! ```
//!
//! Blank lines are ignored. A line whose event field is missing or does not
//! decode is an [`InvalidEventError`]; by default it ends the run.
//!
//! # Example
//!
//! ```rust
//! use mousetrap::effects::Recorder;
//! use mousetrap::trap::{new_trap, TrapState};
//! use mousetrap::script::{Script, ScriptRunner};
//!
//! let script = Script::parse("Mouse action 0\nMouse action 1\n");
//! let mut trap = new_trap(Recorder::new());
//!
//! let report = ScriptRunner::default().run(&mut trap, &script).unwrap();
//! assert_eq!(report.final_state, TrapState::Waiting);
//! ```

pub mod error;
mod runner;

pub use error::{InvalidEventError, ScriptError};
pub use runner::{
    parse_line, MalformedLines, RunOptions, RunReport, Script, ScriptRunner, EVENT_FIELD,
};
