use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::config::Config;
use crate::game::format_hms;
use crate::ui::components::{ACCENT_PRIMARY, TEXT_BRIGHT, TEXT_MUTED};

/// Title screen shown before the clock starts
pub struct StartScreen<'a> {
    config: &'a Config,
}

impl<'a> StartScreen<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    fn rules(&self) -> Vec<Line<'static>> {
        let penalty = format_hms(self.config.penalty_seconds);
        let mut lines = vec![
            Line::from(format!(
                "{} riddles stand between you and the exit.",
                self.config.riddles.len()
            )),
            Line::from("Type each code into its boxes and press Enter."),
            Line::from(format!("Every wrong or incomplete code adds {penalty}.")),
        ];
        if self.config.hints_enabled {
            lines.push(Line::from(format!("A hint also costs {penalty}.")));
        }
        lines.push(Line::from("Solve them all, then finish to stop the clock."));
        lines
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let rules = self.rules();
        let content_height = 2 + rules.len() as u16 + 2;
        let [_, content, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(content_height),
            Constraint::Fill(1),
        ])
        .areas(area);

        let mut lines = vec![
            Line::from(Span::styled(
                "R I D D L E R U N",
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        lines.extend(
            rules
                .into_iter()
                .map(|l| l.style(Style::default().fg(TEXT_BRIGHT))),
        );
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "The clock starts when you do.",
            Style::default().fg(TEXT_MUTED),
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(content, buf);
    }
}
