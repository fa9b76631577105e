//! Actions that can be triggered by keybindings
//!
//! Each action is a single operation on the game screen. Digit keys are not
//! actions; they always go straight to the focused riddle's boxes.

use serde::{Deserialize, Serialize};

/// All mappable UI actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ========== Global ==========
    /// Quit the application
    Quit,

    // ========== Start Screen ==========
    /// Leave the start screen and start the clock
    StartGame,

    // ========== Riddle Board ==========
    /// Submit the focused riddle's code
    Submit,
    /// Clear the focused box or step back
    Backspace,
    /// Focus the box to the left
    MoveCursorLeft,
    /// Focus the box to the right
    MoveCursorRight,
    /// Focus the next riddle
    NextRiddle,
    /// Focus the previous riddle
    PrevRiddle,
    /// Reveal the focused riddle's hint (penalized)
    ShowHint,
    /// Stop the clock and show the result
    Finish,

    // ========== Dialogs ==========
    /// Close the dialog and act on it
    Confirm,
    /// Close the dialog
    Cancel,
}

impl Action {
    /// Get a human-readable description of the action
    pub fn description(&self) -> &'static str {
        match self {
            Action::Quit => "Quit",
            Action::StartGame => "Start game",
            Action::Submit => "Submit code",
            Action::Backspace => "Backspace",
            Action::MoveCursorLeft => "Move left",
            Action::MoveCursorRight => "Move right",
            Action::NextRiddle => "Next riddle",
            Action::PrevRiddle => "Previous riddle",
            Action::ShowHint => "Hint",
            Action::Finish => "Finish",
            Action::Confirm => "Confirm",
            Action::Cancel => "Cancel",
        }
    }

    /// Parse an action name as used in the `[keys]` config table
    pub fn from_name(name: &str) -> Option<Action> {
        match name {
            "quit" | "q" => Some(Action::Quit),
            "start_game" | "start" => Some(Action::StartGame),
            "submit" => Some(Action::Submit),
            "backspace" => Some(Action::Backspace),
            "move_cursor_left" => Some(Action::MoveCursorLeft),
            "move_cursor_right" => Some(Action::MoveCursorRight),
            "next_riddle" => Some(Action::NextRiddle),
            "prev_riddle" => Some(Action::PrevRiddle),
            "show_hint" | "hint" => Some(Action::ShowHint),
            "finish" => Some(Action::Finish),
            "confirm" => Some(Action::Confirm),
            "cancel" => Some(Action::Cancel),
            _ => None,
        }
    }
}
