//! Reusable dialog frame and instruction bar components

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Widget},
};

use super::{HintPlacement, KeyHints, ACCENT_PRIMARY};
use crate::config::{KeyContext, KeybindingConfig};
use crate::ui::action::Action;

/// A centered dialog frame with title and border
pub struct DialogFrame<'a> {
    title: &'a str,
    width: u16,
    height: u16,
    border_color: Color,
}

impl<'a> DialogFrame<'a> {
    pub fn new(title: &'a str, width: u16, height: u16) -> Self {
        Self {
            title,
            width,
            height,
            border_color: ACCENT_PRIMARY,
        }
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Render the dialog frame and return the inner area for content
    pub fn render(&self, area: Rect, buf: &mut Buffer) -> Rect {
        // Capped to screen size
        let dialog_width = self.width.min(area.width.saturating_sub(4));
        let dialog_height = self.height.min(area.height.saturating_sub(2));

        let x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
        let y = area.y + (area.height.saturating_sub(dialog_height)) / 2;

        let dialog_area = Rect {
            x,
            y,
            width: dialog_width,
            height: dialog_height,
        };

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color));

        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        inner
    }
}

/// Bottom line of a dialog listing its dialog-context keys
pub struct InstructionBar {
    hints: KeyHints,
}

impl InstructionBar {
    pub fn new(keybindings: &KeybindingConfig, actions: &[(Action, &'static str)]) -> Self {
        Self {
            hints: KeyHints::resolve(keybindings, KeyContext::Dialog, actions),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        self.hints.render(area, buf, HintPlacement::Dialog);
    }
}
