//! Config and input fixtures

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use riddlerun::config::{Config, RiddleConfig};
use riddlerun::game::TimeSource;
use riddlerun::ui::AppEvent;
use riddlerun::Board;

/// The five codes the bundled example config ships with
pub const EXAMPLE_CODES: [&str; 5] = ["123", "456", "789", "012", "345"];

/// Config with one riddle per code, titled "Riddle N"
pub fn config_with_codes(codes: &[&str]) -> Config {
    Config {
        riddles: codes.iter().map(|c| RiddleConfig::new(*c)).collect(),
        ..Config::default()
    }
}

pub fn key(code: KeyCode) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

/// Key events for typing `text` character by character
pub fn typed(text: &str) -> Vec<AppEvent> {
    text.chars().map(|c| key(KeyCode::Char(c))).collect()
}

pub fn type_code<T: TimeSource>(board: &mut Board<T>, code: &str) {
    for c in code.chars() {
        board.input_char(c);
    }
}
