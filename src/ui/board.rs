//! Game screen state: one running session plus everything drawn around it
//!
//! [`Board`] owns the [`PuzzleSession`] and a [`BoardView`]. Every session
//! call goes through [`PuzzleSession::dispatch`] with the view as observer,
//! so digit rows, flash, clock text and finish availability are derived from
//! session output and never drive it.

use crate::config::Config;
use crate::game::{
    DigitEntry, DisplaySnapshot, FinishSummary, Outcome, PuzzleSession, SessionEvent,
    SessionObserver, SessionPhase, SessionUpdate, SystemClock, TimeSource,
};
use crate::ui::components::{FlashKind, FlashState};

/// Display and solved-state sink for a session
#[derive(Debug, Clone)]
pub struct BoardView {
    /// One digit row per riddle
    pub entries: Vec<DigitEntry>,
    /// Focused riddle
    pub selected: usize,
    /// Last clock reading
    pub clock: DisplaySnapshot,
    /// Success/failure tint
    pub flash: FlashState,
    /// Finish trigger enabled (all riddles solved)
    pub finish_enabled: bool,
    /// Result, once finished
    pub summary: Option<FinishSummary>,
}

impl BoardView {
    fn new(entries: Vec<DigitEntry>, clock: DisplaySnapshot) -> Self {
        Self {
            entries,
            selected: 0,
            clock,
            flash: FlashState::default(),
            finish_enabled: false,
            summary: None,
        }
    }

    /// Move focus to the next unsolved riddle after `from`, wrapping around
    fn select_next_unsolved(&mut self, from: usize) {
        let len = self.entries.len();
        if let Some(next) = (1..=len)
            .map(|step| (from + step) % len)
            .find(|&i| !self.entries[i].is_disabled())
        {
            self.selected = next;
        }
    }
}

impl SessionObserver for BoardView {
    fn on_snapshot(&mut self, snapshot: &DisplaySnapshot) {
        self.clock = snapshot.clone();
    }

    fn on_outcome(&mut self, riddle: usize, outcome: Outcome) {
        match outcome {
            Outcome::Correct => {
                self.flash.trigger(FlashKind::Success, riddle);
            }
            Outcome::Mismatch | Outcome::Invalid => {
                self.flash.trigger(FlashKind::Failure, riddle);
                if let Some(entry) = self.entries.get_mut(riddle) {
                    entry.clear();
                }
            }
            Outcome::Ignored => {}
        }
    }

    fn on_riddle_state(&mut self, riddle: usize, solved: bool) {
        if !solved {
            return;
        }
        if let Some(entry) = self.entries.get_mut(riddle) {
            entry.disable();
        }
        self.select_next_unsolved(riddle);
    }

    fn on_complete(&mut self) {
        self.finish_enabled = true;
    }

    fn on_finish(&mut self, summary: &FinishSummary) {
        self.summary = Some(summary.clone());
    }
}

/// A running game
#[derive(Debug)]
pub struct Board<T: TimeSource = SystemClock> {
    session: PuzzleSession<T>,
    view: BoardView,
    hints_enabled: bool,
}

impl Board<SystemClock> {
    /// Start a game on the system clock
    pub fn new(config: &Config) -> Self {
        Self::with_time_source(config, SystemClock)
    }
}

impl<T: TimeSource> Board<T> {
    pub fn with_time_source(config: &Config, clock: T) -> Self {
        let session = PuzzleSession::with_time_source(config.build_riddles(), config.rules(), clock);
        let entries = session
            .riddles()
            .iter()
            .map(|r| DigitEntry::new(r.code_len()))
            .collect();
        let view = BoardView::new(entries, session.tick());
        Self {
            session,
            view,
            hints_enabled: config.hints_enabled,
        }
    }

    pub fn session(&self) -> &PuzzleSession<T> {
        &self.session
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    pub fn selected(&self) -> usize {
        self.view.selected
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    pub fn hints_enabled(&self) -> bool {
        self.hints_enabled
    }

    fn focused_entry(&mut self) -> Option<&mut DigitEntry> {
        self.view.entries.get_mut(self.view.selected)
    }

    pub fn input_char(&mut self, c: char) -> bool {
        self.focused_entry().is_some_and(|e| e.input_char(c))
    }

    pub fn paste(&mut self, text: &str) -> bool {
        self.focused_entry().is_some_and(|e| e.paste(text))
    }

    pub fn backspace(&mut self) {
        if let Some(entry) = self.focused_entry() {
            entry.backspace();
        }
    }

    pub fn move_left(&mut self) {
        if let Some(entry) = self.focused_entry() {
            entry.move_left();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(entry) = self.focused_entry() {
            entry.move_right();
        }
    }

    pub fn next_riddle(&mut self) {
        let len = self.view.entries.len();
        if len > 0 {
            self.view.selected = (self.view.selected + 1) % len;
        }
    }

    pub fn prev_riddle(&mut self) {
        let len = self.view.entries.len();
        if len > 0 {
            self.view.selected = (self.view.selected + len - 1) % len;
        }
    }

    /// Submit the focused riddle's row. Solved rows are locked and submit
    /// nothing.
    pub fn submit(&mut self) -> Outcome {
        let riddle = self.view.selected;
        let Some(entry) = self.view.entries.get(riddle) else {
            return Outcome::Ignored;
        };
        if entry.is_disabled() {
            return Outcome::Ignored;
        }
        let attempt = entry.code();
        match self
            .session
            .dispatch(SessionEvent::Submit { riddle, attempt }, &mut self.view)
        {
            SessionUpdate::Submitted { outcome, .. } => outcome,
            _ => Outcome::Ignored,
        }
    }

    /// Charge a hint and return the text to show, or `None` when hints are
    /// switched off or the game is over
    pub fn use_hint(&mut self) -> Option<String> {
        if !self.hints_enabled || self.session.phase() == SessionPhase::Finished {
            return None;
        }
        self.session.dispatch(SessionEvent::Hint, &mut self.view);
        let hint = self
            .session
            .riddle(self.view.selected)
            .and_then(|r| r.hint.clone())
            .unwrap_or_else(|| "No hint is available for this riddle.".to_string());
        Some(hint)
    }

    /// Drop the flash if it is still the one scheduled as `generation`.
    /// Returns whether anything changed.
    pub fn expire_flash(&mut self, generation: u64) -> bool {
        self.view.flash.expire(generation)
    }

    /// Refresh the clock reading
    pub fn tick(&mut self) {
        self.session.dispatch(SessionEvent::Tick, &mut self.view);
    }

    /// Stop the clock and return the result; `None` while riddles remain
    pub fn finish(&mut self) -> Option<FinishSummary> {
        if !self.view.finish_enabled {
            return None;
        }
        match self.session.dispatch(SessionEvent::Finish, &mut self.view) {
            SessionUpdate::Finished(summary) => Some(summary),
            _ => None,
        }
    }
}
