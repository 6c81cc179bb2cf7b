//! Side-effecting half of the state machine.
//!
//! The core decides where an event leads; this module applies that decision,
//! records it, and writes status lines through a [`StatusSink`].
//!
//! # Key Concepts
//!
//! - **State Machine**: Owns the current state and its history
//! - **Status Sinks**: Where on-enter actions and warnings are written
//!   (`Console` for stdout, `Recorder` for tests)

mod machine;
mod sink;

pub use machine::{StateMachine, UNEXPECTED_STATUS};
pub use sink::{Console, Recorder, StatusSink};
