//! Headless game core: riddles, the penalty clock and digit entry

pub mod clock;
pub mod entry;
pub mod events;
pub mod format;
pub mod riddle;
pub mod session;

pub use clock::{ManualClock, SystemClock, TimeSource};
pub use entry::DigitEntry;
pub use events::{SessionEvent, SessionObserver, SessionUpdate};
pub use format::{format_hms, format_ms, PenaltyDisplay};
pub use riddle::{Riddle, RiddleState};
pub use session::{
    DisplaySnapshot, FinishSummary, Outcome, PuzzleSession, SessionPhase, SessionRules,
    DEFAULT_PENALTY_SECONDS,
};
