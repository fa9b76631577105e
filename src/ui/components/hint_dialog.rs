use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::config::KeybindingConfig;
use crate::ui::action::Action;
use crate::ui::components::{
    DialogFrame, InstructionBar, ACCENT_WARNING, TEXT_BRIGHT, TEXT_MUTED,
};

/// Modal showing the hint for the focused riddle
pub struct HintDialog<'a> {
    riddle_title: &'a str,
    hint: &'a str,
    penalty: &'a str,
    keybindings: &'a KeybindingConfig,
}

impl<'a> HintDialog<'a> {
    pub fn new(
        riddle_title: &'a str,
        hint: &'a str,
        penalty: &'a str,
        keybindings: &'a KeybindingConfig,
    ) -> Self {
        Self {
            riddle_title,
            hint,
            penalty,
            keybindings,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let inner = DialogFrame::new("Hint", 56, 9)
            .border_color(ACCENT_WARNING)
            .render(area, buf);
        let [body, cost, _, bar] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(vec![
            Line::from(Span::styled(
                self.riddle_title.to_string(),
                Style::default().fg(TEXT_MUTED),
            )),
            Line::from(Span::styled(
                self.hint.to_string(),
                Style::default().fg(TEXT_BRIGHT),
            )),
        ])
        .wrap(Wrap { trim: true })
        .render(body, buf);

        Paragraph::new(Line::from(Span::styled(
            format!("Penalty now +{}", self.penalty),
            Style::default().fg(ACCENT_WARNING),
        )))
        .render(cost, buf);

        InstructionBar::new(
            self.keybindings,
            &[(Action::Confirm, "close"), (Action::Cancel, "close")],
        )
        .render(bar, buf);
    }
}
