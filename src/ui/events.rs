/// Application-level events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Terminal input event
    Input(crossterm::event::Event),

    /// Periodic clock refresh
    Tick,

    /// A success/failure flash ran out; carries the flash generation it was
    /// scheduled for
    FlashExpired(u64),

    /// Terminal input failed
    Error(String),
}

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Title screen, clock not started
    #[default]
    Start,
    /// Riddle board
    Playing,
    /// Hint dialog over the board
    ShowingHint,
    /// Result dialog after finishing
    ShowingSummary,
}
