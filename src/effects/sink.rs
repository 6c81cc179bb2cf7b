//! Destinations for human-readable status lines.

use std::io::{self, Write};

/// Receives the status text a machine produces: on-enter actions,
/// unexpected-event warnings and the driver's event announcements.
pub trait StatusSink {
    fn status(&mut self, line: &str);
}

impl<T: StatusSink + ?Sized> StatusSink for &mut T {
    fn status(&mut self, line: &str) {
        (**self).status(line);
    }
}

/// Writes each status line to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Console;

impl StatusSink for Console {
    fn status(&mut self, line: &str) {
        let mut out = io::stdout().lock();
        // Status output is best effort.
        if let Err(err) = writeln!(out, "{line}") {
            tracing::debug!(error = %err, "failed to write status line");
        }
    }
}

/// Collects status lines in memory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recorder {
    lines: Vec<String>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl StatusSink for Recorder {
    fn status(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_lines_in_order() {
        let mut recorder = Recorder::new();
        recorder.status("first");
        recorder.status("second");
        assert_eq!(recorder.lines(), ["first", "second"]);
    }

    #[test]
    fn mutable_reference_forwards_to_sink() {
        fn emit<O: StatusSink>(mut sink: O) {
            sink.status("through a reference");
        }

        let mut recorder = Recorder::new();
        emit(&mut recorder);
        assert_eq!(recorder.into_lines(), vec!["through a reference".to_string()]);
    }

    #[test]
    fn clear_drops_recorded_lines() {
        let mut recorder = Recorder::new();
        recorder.status("noise");
        recorder.clear();
        assert!(recorder.lines().is_empty());
    }
}
