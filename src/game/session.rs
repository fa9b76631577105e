//! Puzzle session: riddles, penalty counter and the play clock
//!
//! A [`PuzzleSession`] is created when the game screen becomes ready and
//! captures its start instant at that moment. Elapsed time is always derived
//! from the time source at read time; only the penalty counter and the
//! per-riddle solved flags are ever mutated.

use std::fmt;
use std::time::Instant;

use super::clock::{SystemClock, TimeSource};
use super::format::{format_hms, PenaltyDisplay};
use super::riddle::Riddle;

/// Default penalty per failed attempt or hint, in seconds
pub const DEFAULT_PENALTY_SECONDS: u64 = 120;

/// Result of evaluating one code submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Code matched; the riddle is now solved
    Correct,
    /// Well-formed code that does not match (penalized)
    Mismatch,
    /// Wrong length or missing digits (penalized like a mismatch)
    Invalid,
    /// Unknown riddle, solved riddle or finished session; nothing happened
    Ignored,
}

impl Outcome {
    /// Whether this outcome adds a penalty
    pub fn is_penalized(self) -> bool {
        matches!(self, Outcome::Mismatch | Outcome::Invalid)
    }
}

/// Session-level lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    InProgress,
    /// Every riddle solved, finish not yet requested
    Complete,
    /// Terminal; the clock is stopped
    Finished,
}

/// Live clock reading for the display sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySnapshot {
    pub elapsed_seconds: u64,
    pub penalty_seconds: u64,
    pub elapsed: String,
    pub penalty: String,
}

/// Final result reported by [`PuzzleSession::finish`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishSummary {
    pub elapsed_seconds: u64,
    pub penalty_seconds: u64,
    pub total_seconds: u64,
    pub elapsed: String,
    pub penalty: String,
    pub total: String,
}

impl fmt::Display for FinishSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time {} | Penalty +{} | Total {}",
            self.elapsed, self.penalty, self.total
        )
    }
}

/// Tunables shared by every session of a deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionRules {
    /// Seconds added per mismatch, invalid attempt or hint
    pub penalty_per_fail: u64,
    /// Rendering of the penalty counter
    pub penalty_display: PenaltyDisplay,
}

impl Default for SessionRules {
    fn default() -> Self {
        Self {
            penalty_per_fail: DEFAULT_PENALTY_SECONDS,
            penalty_display: PenaltyDisplay::Hms,
        }
    }
}

/// In-memory state of one play-through
#[derive(Debug)]
pub struct PuzzleSession<T: TimeSource = SystemClock> {
    riddles: Vec<Riddle>,
    rules: SessionRules,
    penalty_seconds: u64,
    hints_used: u32,
    start: Instant,
    finished_at: Option<Instant>,
    clock: T,
}

impl PuzzleSession<SystemClock> {
    /// Start a session on the system clock
    pub fn new(riddles: Vec<Riddle>, rules: SessionRules) -> Self {
        Self::with_time_source(riddles, rules, SystemClock)
    }
}

impl<T: TimeSource> PuzzleSession<T> {
    /// Start a session on a custom time source. The start instant is read
    /// from `clock` immediately.
    pub fn with_time_source(riddles: Vec<Riddle>, rules: SessionRules, clock: T) -> Self {
        let start = clock.now();
        tracing::info!(
            riddles = riddles.len(),
            penalty_per_fail = rules.penalty_per_fail,
            "Puzzle session started"
        );
        Self {
            riddles,
            rules,
            penalty_seconds: 0,
            hints_used: 0,
            start,
            finished_at: None,
            clock,
        }
    }

    pub fn riddles(&self) -> &[Riddle] {
        &self.riddles
    }

    pub fn riddle(&self, index: usize) -> Option<&Riddle> {
        self.riddles.get(index)
    }

    pub fn rules(&self) -> SessionRules {
        self.rules
    }

    pub fn penalty_seconds(&self) -> u64 {
        self.penalty_seconds
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn solved_count(&self) -> usize {
        self.riddles.iter().filter(|r| r.is_solved()).count()
    }

    /// Solved flag per riddle, in index order
    pub fn solved_flags(&self) -> Vec<bool> {
        self.riddles.iter().map(Riddle::is_solved).collect()
    }

    /// True iff every riddle is solved
    pub fn is_complete(&self) -> bool {
        self.riddles.iter().all(Riddle::is_solved)
    }

    pub fn phase(&self) -> SessionPhase {
        if self.finished_at.is_some() {
            SessionPhase::Finished
        } else if self.is_complete() {
            SessionPhase::Complete
        } else {
            SessionPhase::InProgress
        }
    }

    /// Evaluate a code attempt for one riddle
    pub fn submit_code(&mut self, riddle_index: usize, attempt: &str) -> Outcome {
        let Some(riddle) = self.riddles.get_mut(riddle_index) else {
            tracing::debug!(riddle = riddle_index, "Submission for unknown riddle ignored");
            return Outcome::Ignored;
        };
        if riddle.is_solved() {
            tracing::debug!(riddle = riddle_index, "Submission for solved riddle ignored");
            return Outcome::Ignored;
        }

        let outcome = if !riddle.accepts_shape(attempt) {
            Outcome::Invalid
        } else if riddle.matches(attempt) {
            riddle.mark_solved();
            Outcome::Correct
        } else {
            Outcome::Mismatch
        };

        if outcome.is_penalized() {
            self.add_penalty();
        }

        tracing::info!(
            riddle = riddle_index,
            outcome = ?outcome,
            penalty_seconds = self.penalty_seconds,
            solved = self.solved_count(),
            "Code submitted"
        );
        outcome
    }

    /// Accrue one penalty for a hint. Ignored once the session is finished.
    pub fn use_hint(&mut self) {
        if self.finished_at.is_some() {
            tracing::debug!("Hint after finish ignored");
            return;
        }
        self.hints_used += 1;
        self.add_penalty();
        tracing::info!(
            hints_used = self.hints_used,
            penalty_seconds = self.penalty_seconds,
            "Hint used"
        );
    }

    /// Current clock reading. Does not mutate the session.
    pub fn tick(&self) -> DisplaySnapshot {
        let elapsed_seconds = self.elapsed_seconds();
        DisplaySnapshot {
            elapsed_seconds,
            penalty_seconds: self.penalty_seconds,
            elapsed: format_hms(elapsed_seconds),
            penalty: self.rules.penalty_display.format(self.penalty_seconds),
        }
    }

    /// Stop the clock and report the result. Returns `None` while riddles
    /// remain unsolved or if the session already finished.
    pub fn finish(&mut self) -> Option<FinishSummary> {
        match self.phase() {
            SessionPhase::InProgress => {
                tracing::warn!(
                    solved = self.solved_count(),
                    total = self.riddles.len(),
                    "Finish requested before all riddles were solved"
                );
                return None;
            }
            SessionPhase::Finished => return None,
            SessionPhase::Complete => {}
        }

        self.finished_at = Some(self.clock.now());
        let summary = self.summary();
        tracing::info!(
            elapsed_seconds = summary.elapsed_seconds,
            penalty_seconds = summary.penalty_seconds,
            total_seconds = summary.total_seconds,
            "Session finished"
        );
        Some(summary)
    }

    /// Whole seconds since start, frozen once finished
    pub fn elapsed_seconds(&self) -> u64 {
        let end = self.finished_at.unwrap_or_else(|| self.clock.now());
        end.saturating_duration_since(self.start).as_secs()
    }

    fn summary(&self) -> FinishSummary {
        let elapsed_seconds = self.elapsed_seconds();
        let total_seconds = elapsed_seconds.saturating_add(self.penalty_seconds);
        FinishSummary {
            elapsed_seconds,
            penalty_seconds: self.penalty_seconds,
            total_seconds,
            elapsed: format_hms(elapsed_seconds),
            penalty: self.rules.penalty_display.format(self.penalty_seconds),
            total: format_hms(total_seconds),
        }
    }

    fn add_penalty(&mut self) {
        self.penalty_seconds = self
            .penalty_seconds
            .saturating_add(self.rules.penalty_per_fail);
    }
}
