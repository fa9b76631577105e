//! Shared test utilities for riddlerun
//!
//! - Config and key-event fixtures
//! - TUI terminal testing helpers

pub mod fixtures;
pub mod terminal;
