//! State machine that applies events and runs on-enter actions.

use crate::core::{State, StateHistory, StateTransition};
use crate::effects::sink::StatusSink;
use chrono::Utc;

/// Warning emitted when the current state has no entry for an event.
pub const UNEXPECTED_STATUS: &str = "WARNING: UNEXPECTED STATUS!";

/// State machine that owns the current state and a status sink.
///
/// The current state is only replaced by [`StateMachine::accept`].
pub struct StateMachine<S: State, O: StatusSink> {
    current: S,
    history: StateHistory<S>,
    sink: O,
}

impl<S: State, O: StatusSink> StateMachine<S, O> {
    /// Create a machine in `initial` and run its on-enter action.
    pub fn new(initial: S, mut sink: O) -> Self {
        tracing::debug!(state = initial.name(), "entering initial state");
        initial.on_enter(&mut sink);
        Self {
            history: StateHistory::new(initial.clone()),
            current: initial,
            sink,
        }
    }

    /// Get current state
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get the record of processed events
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    pub fn sink(&self) -> &O {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut O {
        &mut self.sink
    }

    /// Process one event.
    ///
    /// Looks up the next state, warns if the event is unexpected, replaces
    /// the current state and runs the new state's on-enter action. An
    /// unexpected event re-enters the current state.
    pub fn accept(&mut self, event: S::Event) {
        let result = self.current.next(event);
        let handled = result.is_handled();
        if !handled {
            tracing::warn!(
                state = self.current.name(),
                event = ?event,
                "no transition for event"
            );
            self.sink.status(UNEXPECTED_STATUS);
        }

        let next = result.into_state();
        tracing::debug!(
            from = self.current.name(),
            to = next.name(),
            event = ?event,
            "transition"
        );

        let from = std::mem::replace(&mut self.current, next);
        self.history.record(StateTransition {
            from,
            to: self.current.clone(),
            event,
            handled,
            timestamp: Utc::now(),
        });
        self.current.on_enter(&mut self.sink);
    }

    /// Feed a sequence of events in order.
    pub fn accept_all<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = S::Event>,
    {
        for event in events {
            self.accept(event);
        }
    }

    /// Consume the machine, returning its final state, history and sink.
    pub fn into_parts(self) -> (S, StateHistory<S>, O) {
        (self.current, self.history, self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Recorder;
    use crate::trap::{MouseAction, TrapState};

    #[test]
    fn construction_runs_on_enter() {
        let machine = StateMachine::new(TrapState::Waiting, Recorder::new());
        assert_eq!(machine.current_state(), &TrapState::Waiting);
        assert_eq!(
            machine.sink().lines(),
            ["Waiting: Broadcasting cheese smell"]
        );
        assert!(machine.history().is_empty());
        assert_eq!(machine.history().get_path(), vec![&TrapState::Waiting]);
    }

    #[test]
    fn accept_moves_and_enters_next_state() {
        let mut machine = StateMachine::new(TrapState::Waiting, Recorder::new());
        machine.accept(MouseAction::Appear);

        assert_eq!(machine.current_state(), &TrapState::Luring);
        assert_eq!(
            machine.sink().lines(),
            [
                "Waiting: Broadcasting cheese smell",
                "Luring: Presenting Cheese, door open",
            ]
        );
    }

    #[test]
    fn unexpected_event_warns_and_reenters() {
        let mut machine = StateMachine::new(TrapState::Waiting, Recorder::new());
        machine.sink_mut().clear();
        machine.accept(MouseAction::Enter);

        assert_eq!(machine.current_state(), &TrapState::Waiting);
        assert_eq!(
            machine.sink().lines(),
            [UNEXPECTED_STATUS, "Waiting: Broadcasting cheese smell"]
        );
        assert_eq!(machine.history().unhandled_count(), 1);
    }

    #[test]
    fn history_tracks_every_event() {
        let mut machine = StateMachine::new(TrapState::Waiting, Recorder::new());
        machine.accept_all([
            MouseAction::Appear,
            MouseAction::Escape,
            MouseAction::Enter,
        ]);

        let path = machine.history().get_path();
        assert_eq!(
            path,
            vec![
                &TrapState::Waiting,
                &TrapState::Luring,
                &TrapState::Luring,
                &TrapState::Trapping,
            ]
        );
        assert_eq!(
            machine.history().events(),
            vec![MouseAction::Appear, MouseAction::Escape, MouseAction::Enter]
        );
    }

    #[test]
    fn into_parts_returns_final_state() {
        let mut machine = StateMachine::new(TrapState::Trapping, Recorder::new());
        machine.accept(MouseAction::Trapped);

        let (state, history, sink) = machine.into_parts();
        assert_eq!(state, TrapState::Holding);
        assert_eq!(history.len(), 1);
        assert_eq!(sink.lines().last().map(String::as_str), Some("Holding: Mouse caught"));
    }

    #[test]
    fn borrowed_sink_is_accepted() {
        let mut recorder = Recorder::new();
        {
            let mut machine = StateMachine::new(TrapState::Holding, &mut recorder);
            machine.accept(MouseAction::Removed);
        }
        assert_eq!(recorder.lines().len(), 2);
    }
}
