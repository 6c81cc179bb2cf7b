//! Script error types.

use thiserror::Error;

/// A token that does not name an event.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidEventError {
    #[error("no event field at position {position}")]
    MissingField { position: usize },

    #[error("event token '{token}' is not an integer")]
    NotAnInteger { token: String },

    #[error("event code {code} is out of range")]
    OutOfRange { code: i64 },
}

/// Errors that abort a script run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScriptError {
    /// A line's event field could not be decoded
    #[error("line {line}: {source} (in '{content}')")]
    InvalidEvent {
        line: usize,
        content: String,
        source: InvalidEventError,
    },

    /// The script could not be read
    #[error("failed to read script '{path}': {message}")]
    Io { path: String, message: String },
}

impl ScriptError {
    /// The underlying decode error, if this is one.
    pub fn invalid_event(&self) -> Option<&InvalidEventError> {
        match self {
            Self::InvalidEvent { source, .. } => Some(source),
            Self::Io { .. } => None,
        }
    }

    /// 1-based line number of the offending line.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidEvent { line, .. } => Some(*line),
            Self::Io { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_event_message_names_line_and_token() {
        let err = ScriptError::InvalidEvent {
            line: 3,
            content: "Mouse moves abc".to_string(),
            source: InvalidEventError::NotAnInteger {
                token: "abc".to_string(),
            },
        };

        let message = err.to_string();
        assert!(message.contains("line 3"));
        assert!(message.contains("'abc'"));
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn io_error_has_no_line() {
        let err = ScriptError::Io {
            path: "missing.txt".to_string(),
            message: "not found".to_string(),
        };
        assert!(err.line().is_none());
        assert!(err.invalid_event().is_none());
    }
}
