use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::config::KeyContext;
use crate::game::TimeSource;
use crate::ui::app::App;
use crate::ui::board::Board;
use crate::ui::components::{
    GlobalFooter, HintDialog, RiddleCard, StartScreen, StatusBar, SummaryDialog,
};
use crate::ui::events::InputMode;

impl App {
    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        self.render(area, frame.buffer_mut());
    }

    /// Render the whole screen into `buf`
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let [main, footer] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        match (&self.board, self.input_mode) {
            (Some(board), mode) if mode != InputMode::Start => {
                render_board(board, main, buf);
                match mode {
                    InputMode::ShowingHint => {
                        let label = board
                            .session()
                            .riddle(board.selected())
                            .map(|r| r.label(board.selected()))
                            .unwrap_or_default();
                        let hint = self.hint_text.as_deref().unwrap_or_default();
                        HintDialog::new(
                            &label,
                            hint,
                            &board.view().clock.penalty,
                            &self.config.keybindings,
                        )
                        .render(main, buf);
                    }
                    InputMode::ShowingSummary => {
                        if let Some(summary) = board.view().summary.as_ref() {
                            SummaryDialog::new(summary, &self.config.keybindings)
                                .render(main, buf);
                        }
                    }
                    _ => {}
                }
            }
            _ => StartScreen::new(&self.config).render(main, buf),
        }

        GlobalFooter::for_context(
            &self.config.keybindings,
            KeyContext::from_input_mode(self.input_mode),
            self.config.hints_enabled,
        )
        .render(footer, buf);
    }
}

/// Status line plus as many riddle cards as fit, scrolled to keep the
/// selected riddle visible
pub fn render_board<T: TimeSource>(board: &Board<T>, area: Rect, buf: &mut Buffer) {
    let [status, _, cards] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    let session = board.session();
    let view = board.view();
    StatusBar::new(&view.clock, session.solved_count(), session.riddles().len())
        .finish_enabled(view.finish_enabled)
        .render(status, buf);

    let per_page = usize::from((cards.height / RiddleCard::HEIGHT).max(1));
    let selected = board.selected();
    let first = (selected + 1).saturating_sub(per_page);

    let mut y = cards.y;
    for (index, (riddle, entry)) in session
        .riddles()
        .iter()
        .zip(&view.entries)
        .enumerate()
        .skip(first)
        .take(per_page)
    {
        let height = RiddleCard::HEIGHT.min(cards.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let card_area = Rect::new(cards.x, y, cards.width, height);
        RiddleCard::new(index, riddle, entry)
            .selected(index == selected)
            .flash(view.flash.tint_for(index))
            .render(card_area, buf);
        y += height;
    }
}
