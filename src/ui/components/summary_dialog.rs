use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::config::KeybindingConfig;
use crate::game::FinishSummary;
use crate::ui::action::Action;
use crate::ui::components::{
    DialogFrame, InstructionBar, ACCENT_SUCCESS, TEXT_BRIGHT, TEXT_MUTED,
};

/// Result modal after the clock stops
pub struct SummaryDialog<'a> {
    summary: &'a FinishSummary,
    keybindings: &'a KeybindingConfig,
}

impl<'a> SummaryDialog<'a> {
    pub fn new(summary: &'a FinishSummary, keybindings: &'a KeybindingConfig) -> Self {
        Self {
            summary,
            keybindings,
        }
    }

    fn row(label: &str, value: String, bold: bool) -> Line<'static> {
        let mut value_style = Style::default().fg(TEXT_BRIGHT);
        if bold {
            value_style = value_style.add_modifier(Modifier::BOLD);
        }
        Line::from(vec![
            Span::styled(format!("{label:<10}"), Style::default().fg(TEXT_MUTED)),
            Span::styled(value, value_style),
        ])
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let inner = DialogFrame::new("All riddles solved", 44, 9)
            .border_color(ACCENT_SUCCESS)
            .render(area, buf);
        let [rows, _, bar] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(vec![
            Self::row("Time", self.summary.elapsed.clone(), false),
            Self::row("Penalty", format!("+{}", self.summary.penalty), false),
            Self::row("Total", self.summary.total.clone(), true),
        ])
        .render(rows, buf);

        InstructionBar::new(
            self.keybindings,
            &[(Action::Confirm, "quit"), (Action::Cancel, "back")],
        )
        .render(bar, buf);
    }
}
