//! TUI testing utilities using Ratatui's TestBackend
//!
//! Provides helpers for rendering the game to a test buffer and converting
//! the output to strings for assertions.

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use riddlerun::game::TimeSource;
use riddlerun::ui::app::render_board;
use riddlerun::{App, Board};

/// Create a test terminal with custom dimensions
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Draw the whole app and return the resulting buffer
pub fn render_app(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal.draw(|f| app.draw(f)).expect("draw app");
    terminal.backend().buffer().clone()
}

/// Draw only the board screen of a game
pub fn render_game<T: TimeSource>(board: &Board<T>, width: u16, height: u16) -> Buffer {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal
        .draw(|f| {
            let area = f.area();
            render_board(board, area, f.buffer_mut());
        })
        .expect("draw board");
    terminal.backend().buffer().clone()
}

/// Convert a buffer to a string, one line per row
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }

    output
}

/// Text of row `y` with trailing whitespace trimmed
pub fn row_text(buffer: &Buffer, y: u16) -> String {
    buffer_to_string(buffer)
        .lines()
        .nth(usize::from(y))
        .unwrap_or_default()
        .trim_end()
        .to_string()
}

/// Check if the buffer contains a string anywhere
pub fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
    buffer_to_string(buffer).contains(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_row_text_trims() {
        let mut terminal = create_test_terminal_sized(12, 2);
        terminal
            .draw(|f| f.render_widget(Paragraph::new("one\ntwo"), f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(row_text(buffer, 1), "two");
        assert!(buffer_contains(buffer, "one"));
        assert!(!buffer_contains(buffer, "three"));
    }
}
