//! Trap states and the transition table between them.

use super::event::MouseAction;
use crate::core::{State, TransitionResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mode the trap is in. Carries no data beyond the variant.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TrapState {
    Waiting,
    Luring,
    Trapping,
    Holding,
}

impl TrapState {
    pub const ALL: [TrapState; 4] = [Self::Waiting, Self::Luring, Self::Trapping, Self::Holding];
}

crate::transition_table! {
    TrapState on MouseAction {
        Waiting { Appear => Luring }
        Luring { RunAway => Waiting, Enter => Trapping }
        Trapping { Escape => Waiting, Trapped => Holding }
        Holding { Removed => Waiting }
    }
}

impl State for TrapState {
    type Event = MouseAction;

    fn name(&self) -> &str {
        match self {
            Self::Waiting => "Waiting",
            Self::Luring => "Luring",
            Self::Trapping => "Trapping",
            Self::Holding => "Holding",
        }
    }

    fn activity(&self) -> &str {
        match self {
            Self::Waiting => "Broadcasting cheese smell",
            Self::Luring => "Presenting Cheese, door open",
            Self::Trapping => "Closing door",
            Self::Holding => "Mouse caught",
        }
    }

    fn next(&self, event: MouseAction) -> TransitionResult<Self> {
        match self.lookup(event) {
            Some(next) => TransitionResult::Success(next),
            None => TransitionResult::Unhandled {
                current_state: *self,
            },
        }
    }
}

impl fmt::Display for TrapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
