use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::game::DisplaySnapshot;
use crate::ui::components::{
    ACCENT_SUCCESS, ACCENT_WARNING, STATUS_BAR_BG, TEXT_BRIGHT, TEXT_FAINT, TEXT_MUTED,
};

/// Clock, penalty and progress line above the riddles
pub struct StatusBar<'a> {
    clock: &'a DisplaySnapshot,
    solved: usize,
    total: usize,
    finish_enabled: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(clock: &'a DisplaySnapshot, solved: usize, total: usize) -> Self {
        Self {
            clock,
            solved,
            total,
            finish_enabled: false,
        }
    }

    pub fn finish_enabled(mut self, enabled: bool) -> Self {
        self.finish_enabled = enabled;
        self
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let label = Style::default().fg(TEXT_MUTED);
        let separator = Span::styled("  │  ", Style::default().fg(TEXT_FAINT));
        let penalty_style = if self.clock.penalty_seconds > 0 {
            Style::default().fg(ACCENT_WARNING)
        } else {
            Style::default().fg(TEXT_BRIGHT)
        };

        let mut spans = vec![
            Span::raw("  "),
            Span::styled("Time ", label),
            Span::styled(
                self.clock.elapsed.clone(),
                Style::default().fg(TEXT_BRIGHT).add_modifier(Modifier::BOLD),
            ),
            separator.clone(),
            Span::styled("Penalty ", label),
            Span::styled(format!("+{}", self.clock.penalty), penalty_style),
            separator.clone(),
            Span::styled("Solved ", label),
            Span::styled(
                format!("{}/{}", self.solved, self.total),
                Style::default().fg(TEXT_BRIGHT),
            ),
        ];
        if self.finish_enabled {
            spans.push(separator);
            spans.push(Span::styled(
                "Ready to finish",
                Style::default()
                    .fg(ACCENT_SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(STATUS_BAR_BG))
            .render(area, buf);
    }
}
