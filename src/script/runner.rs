//! Feeding scripted events into a state machine.

use crate::core::State;
use crate::effects::{StateMachine, StatusSink};
use crate::script::error::{InvalidEventError, ScriptError};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Whitespace-separated field holding the event code (0-indexed).
pub const EVENT_FIELD: usize = 2;

/// What to do with a line whose event field cannot be decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MalformedLines {
    /// Stop the run with the decode error
    #[default]
    Abort,

    /// Log the line, count it, and keep going
    Skip,
}

/// Options for a script run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub malformed: MalformedLines,
}

impl RunOptions {
    pub fn skip_malformed(mut self) -> Self {
        self.malformed = MalformedLines::Skip;
        self
    }
}

/// Summary of a completed run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RunReport<S: State> {
    /// Events passed to the machine
    pub events_applied: usize,
    /// Events the state in force had no entry for
    pub unexpected_events: usize,
    /// 1-based numbers of lines skipped as malformed
    pub skipped_lines: Vec<usize>,
    /// State held when the run finished
    pub final_state: S,
}

/// Decode the event on one script line.
///
/// `line` is the 1-based line number used in the error.
pub fn parse_line<E>(line: usize, content: &str) -> Result<E, ScriptError>
where
    E: FromStr<Err = InvalidEventError>,
{
    let invalid = |source: InvalidEventError| ScriptError::InvalidEvent {
        line,
        content: content.to_string(),
        source,
    };

    let token = content
        .split_whitespace()
        .nth(EVENT_FIELD)
        .ok_or_else(|| {
            invalid(InvalidEventError::MissingField {
                position: EVENT_FIELD,
            })
        })?;

    token.parse().map_err(invalid)
}

/// Lines of an event script.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Script {
    lines: Vec<String>,
}

impl Script {
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Read a script file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| ScriptError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        Ok(Self::parse(&text))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Non-blank lines with their 1-based line numbers.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| (index + 1, line.as_str()))
    }

    /// Decode every line without running anything, collecting all
    /// malformed lines instead of stopping at the first.
    pub fn validate<E>(&self) -> Validation<Vec<E>, NonEmptyVec<ScriptError>>
    where
        E: FromStr<Err = InvalidEventError>,
    {
        let checks: Vec<Validation<E, NonEmptyVec<ScriptError>>> = self
            .entries()
            .map(|(line, content)| match parse_line(line, content) {
                Ok(event) => Validation::success(event),
                Err(err) => Validation::fail(err),
            })
            .collect();

        Validation::all_vec(checks)
    }
}

/// Drives a state machine from script lines.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptRunner {
    options: RunOptions,
}

impl ScriptRunner {
    pub fn new(options: RunOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> RunOptions {
        self.options
    }

    /// Feed each non-blank line's event to `machine`, in order.
    ///
    /// Each decoded event is announced on the machine's sink before it is
    /// applied. With [`MalformedLines::Abort`] the first bad line ends the run
    /// and nothing after it is processed.
    pub fn run<S, O>(
        &self,
        machine: &mut StateMachine<S, O>,
        script: &Script,
    ) -> Result<RunReport<S>, ScriptError>
    where
        S: State,
        S::Event: FromStr<Err = InvalidEventError> + Display,
        O: StatusSink,
    {
        let unhandled_before = machine.history().unhandled_count();
        let mut events_applied = 0;
        let mut skipped_lines = Vec::new();

        tracing::info!(lines = script.lines().len(), "running script");

        for (line, content) in script.entries() {
            let event: S::Event = match parse_line(line, content) {
                Ok(event) => event,
                Err(err) => match self.options.malformed {
                    MalformedLines::Abort => {
                        tracing::debug!(line, "aborting run on malformed line");
                        return Err(err);
                    }
                    MalformedLines::Skip => {
                        tracing::warn!(line, error = %err, "skipping malformed line");
                        skipped_lines.push(line);
                        continue;
                    }
                },
            };

            machine
                .sink_mut()
                .status(&format!("The input state is: {event}"));
            machine.accept(event);
            events_applied += 1;
        }

        let report = RunReport {
            events_applied,
            unexpected_events: machine.history().unhandled_count() - unhandled_before,
            skipped_lines,
            final_state: machine.current_state().clone(),
        };

        tracing::info!(
            events = report.events_applied,
            unexpected = report.unexpected_events,
            skipped = report.skipped_lines.len(),
            final_state = report.final_state.name(),
            "script finished"
        );

        Ok(report)
    }
}
