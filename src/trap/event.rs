//! Mouse actions, the input alphabet of the trap.

use crate::script::InvalidEventError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the mouse did. Discriminants are the codes used in scripts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum MouseAction {
    Appear = 0,
    RunAway = 1,
    Enter = 2,
    Escape = 3,
    Trapped = 4,
    Removed = 5,
}

impl MouseAction {
    /// Every action, in code order.
    pub const ALL: [MouseAction; 6] = [
        Self::Appear,
        Self::RunAway,
        Self::Enter,
        Self::Escape,
        Self::Trapped,
        Self::Removed,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Appear => "Appear",
            Self::RunAway => "RunAway",
            Self::Enter => "Enter",
            Self::Escape => "Escape",
            Self::Trapped => "Trapped",
            Self::Removed => "Removed",
        }
    }

    /// Decode a script token such as `"2"`.
    pub fn decode(token: &str) -> Result<Self, InvalidEventError> {
        token.parse()
    }
}

impl TryFrom<u8> for MouseAction {
    type Error = InvalidEventError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(InvalidEventError::OutOfRange {
                code: i64::from(code),
            })
    }
}

impl FromStr for MouseAction {
    type Err = InvalidEventError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let code: i64 = token
            .trim()
            .parse()
            .map_err(|_| InvalidEventError::NotAnInteger {
                token: token.to_string(),
            })?;
        u8::try_from(code)
            .map_err(|_| InvalidEventError::OutOfRange { code })
            .and_then(Self::try_from)
    }
}

impl fmt::Display for MouseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
