use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::game::{DigitEntry, Riddle};
use crate::ui::components::{
    FlashKind, ACCENT_ERROR, ACCENT_PRIMARY, ACCENT_SUCCESS, SELECTED_BG, TEXT_BRIGHT, TEXT_FAINT,
    TEXT_MUTED,
};

/// One riddle with its digit boxes
pub struct RiddleCard<'a> {
    index: usize,
    riddle: &'a Riddle,
    entry: &'a DigitEntry,
    selected: bool,
    flash: Option<FlashKind>,
}

impl<'a> RiddleCard<'a> {
    /// Border plus prompt line plus box line
    pub const HEIGHT: u16 = 4;

    pub fn new(index: usize, riddle: &'a Riddle, entry: &'a DigitEntry) -> Self {
        Self {
            index,
            riddle,
            entry,
            selected: false,
            flash: None,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Background tint after this riddle was submitted
    pub fn flash(mut self, flash: Option<FlashKind>) -> Self {
        self.flash = flash;
        self
    }

    fn box_spans(&self) -> Vec<Span<'static>> {
        let solved = self.entry.is_disabled();
        let mut spans = Vec::with_capacity(self.entry.len() * 2);
        for (i, digit) in self.entry.boxes().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let text = format!("[{}]", digit.unwrap_or('_'));
            let mut style = if solved {
                Style::default().fg(ACCENT_SUCCESS)
            } else if digit.is_some() {
                Style::default().fg(TEXT_BRIGHT)
            } else {
                Style::default().fg(TEXT_FAINT)
            };
            if self.selected && !solved && i == self.entry.focus() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(text, style));
        }
        spans
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let solved = self.entry.is_disabled();
        let label = self.riddle.label(self.index);
        let title = if solved {
            format!(" {label} ✓ ")
        } else {
            format!(" {label} ")
        };
        let border = if solved {
            ACCENT_SUCCESS
        } else if self.flash == Some(FlashKind::Failure) {
            ACCENT_ERROR
        } else if self.selected {
            ACCENT_PRIMARY
        } else {
            TEXT_FAINT
        };

        let mut block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let bg = match self.flash {
            Some(kind) => Some(kind.background()),
            None if self.selected => Some(SELECTED_BG),
            None => None,
        };
        if let Some(bg) = bg {
            block = block.style(Style::default().bg(bg));
        }

        let prompt = self.riddle.prompt.clone().unwrap_or_else(|| {
            format!("Enter the {}-digit code", self.riddle.code_len())
        });
        let lines = vec![
            Line::from(Span::styled(prompt, Style::default().fg(TEXT_MUTED))),
            Line::from(self.box_spans()),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
