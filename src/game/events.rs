//! Event-source / listener contract for a session
//!
//! Front ends translate their own input (key presses, timers, buttons) into
//! [`SessionEvent`]s and feed them to [`PuzzleSession::dispatch`]. The
//! resulting [`SessionUpdate`] is also fanned out to a [`SessionObserver`],
//! which is where display and solved-state sinks live.

use super::clock::TimeSource;
use super::session::{DisplaySnapshot, FinishSummary, Outcome, PuzzleSession};

/// Input to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Submit the collected attempt for one riddle
    Submit { riddle: usize, attempt: String },
    /// Reveal a hint (penalized)
    Hint,
    /// Periodic clock refresh
    Tick,
    /// Request the final result
    Finish,
}

/// What a dispatched event produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    Submitted {
        riddle: usize,
        outcome: Outcome,
        snapshot: DisplaySnapshot,
    },
    HintUsed {
        snapshot: DisplaySnapshot,
    },
    Clock(DisplaySnapshot),
    Finished(FinishSummary),
    /// Finish was requested while riddles remain or after finishing
    FinishRejected,
}

/// Receives session output. All methods default to no-ops.
pub trait SessionObserver {
    /// Fresh clock values
    fn on_snapshot(&mut self, _snapshot: &DisplaySnapshot) {}

    /// A submission was evaluated (not called for ignored ones)
    fn on_outcome(&mut self, _riddle: usize, _outcome: Outcome) {}

    /// Solved flag of a riddle after a submission
    fn on_riddle_state(&mut self, _riddle: usize, _solved: bool) {}

    /// Every riddle is solved; the finish trigger may be enabled
    fn on_complete(&mut self) {}

    fn on_finish(&mut self, _summary: &FinishSummary) {}
}

/// Observer that does nothing
impl SessionObserver for () {}

impl<T: TimeSource> PuzzleSession<T> {
    /// Apply one event and return what it produced
    pub fn handle(&mut self, event: SessionEvent) -> SessionUpdate {
        match event {
            SessionEvent::Submit { riddle, attempt } => {
                let outcome = self.submit_code(riddle, &attempt);
                SessionUpdate::Submitted {
                    riddle,
                    outcome,
                    snapshot: self.tick(),
                }
            }
            SessionEvent::Hint => {
                self.use_hint();
                SessionUpdate::HintUsed {
                    snapshot: self.tick(),
                }
            }
            SessionEvent::Tick => SessionUpdate::Clock(self.tick()),
            SessionEvent::Finish => match self.finish() {
                Some(summary) => SessionUpdate::Finished(summary),
                None => SessionUpdate::FinishRejected,
            },
        }
    }

    /// Apply one event and notify `observer` of the result
    pub fn dispatch<O: SessionObserver + ?Sized>(
        &mut self,
        event: SessionEvent,
        observer: &mut O,
    ) -> SessionUpdate {
        let was_complete = self.is_complete();
        let update = self.handle(event);

        match &update {
            SessionUpdate::Submitted {
                riddle,
                outcome,
                snapshot,
            } => {
                if *outcome != Outcome::Ignored {
                    observer.on_outcome(*riddle, *outcome);
                    observer.on_riddle_state(*riddle, self.riddles()[*riddle].is_solved());
                }
                observer.on_snapshot(snapshot);
                if !was_complete && self.is_complete() {
                    observer.on_complete();
                }
            }
            SessionUpdate::HintUsed { snapshot } | SessionUpdate::Clock(snapshot) => {
                observer.on_snapshot(snapshot);
            }
            SessionUpdate::Finished(summary) => {
                observer.on_snapshot(&self.tick());
                observer.on_finish(summary);
            }
            SessionUpdate::FinishRejected => {}
        }

        update
    }
}
