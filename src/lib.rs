pub mod cli;
pub mod config;
pub mod game;
pub mod ui;
pub mod util;

pub use config::{Config, ConfigError};
pub use game::{
    FinishSummary, ManualClock, Outcome, PenaltyDisplay, PuzzleSession, SessionRules,
    SystemClock, TimeSource,
};
pub use ui::{App, Board};
