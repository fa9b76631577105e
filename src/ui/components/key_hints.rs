//! Key hint lines resolved from the active keybindings.
//!
//! Every hint names an [`Action`], so a key remapped in `[keys]` shows up in
//! the footer and in dialog instruction bars exactly as configured.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::config::{KeyCombo, KeyContext, KeybindingConfig};
use crate::ui::action::Action;

use super::{ACCENT_PRIMARY, FOOTER_BG, KEY_HINT_BG, TEXT_FAINT, TEXT_MUTED, TEXT_SECONDARY};

/// Where a hint line is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintPlacement {
    /// Centered at the bottom of a dialog, entries split by bars
    Dialog,
    /// Bottom screen line, keys drawn as chips
    Footer,
}

/// Bound key and short label for each action of one screen
#[derive(Debug, Clone, Default)]
pub struct KeyHints {
    entries: Vec<(KeyCombo, &'static str)>,
}

impl KeyHints {
    /// Look up each action's key in `context`. Unbound actions are left out.
    pub fn resolve(
        keybindings: &KeybindingConfig,
        context: KeyContext,
        actions: &[(Action, &'static str)],
    ) -> Self {
        let entries = actions
            .iter()
            .filter_map(|&(action, label)| {
                keybindings.key_for(action, context).map(|key| (key, label))
            })
            .collect();
        Self { entries }
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(_, label)| *label).collect()
    }

    /// Keys in display notation, e.g. `<CR>`
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(key, _)| key.to_string()).collect()
    }

    pub fn line(&self, placement: HintPlacement) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.entries.len() * 3 + 1);
        if placement == HintPlacement::Footer {
            spans.push(Span::raw(" "));
        }

        for (i, (key, label)) in self.entries.iter().enumerate() {
            match placement {
                HintPlacement::Dialog => {
                    if i > 0 {
                        spans.push(Span::styled(" │ ", Style::default().fg(TEXT_FAINT)));
                    }
                    spans.push(Span::styled(
                        key.to_string(),
                        Style::default().fg(ACCENT_PRIMARY),
                    ));
                    spans.push(Span::styled(
                        format!(" {label}"),
                        Style::default().fg(TEXT_SECONDARY),
                    ));
                }
                HintPlacement::Footer => {
                    if i > 0 {
                        spans.push(Span::raw("   "));
                    }
                    spans.push(Span::styled(
                        format!(" {key} "),
                        Style::default().fg(TEXT_SECONDARY).bg(KEY_HINT_BG),
                    ));
                    spans.push(Span::styled(
                        format!(" {label}"),
                        Style::default().fg(TEXT_MUTED),
                    ));
                }
            }
        }

        Line::from(spans)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, placement: HintPlacement) {
        let paragraph = Paragraph::new(self.line(placement));
        let paragraph = match placement {
            HintPlacement::Dialog => paragraph.alignment(Alignment::Center),
            HintPlacement::Footer => paragraph
                .alignment(Alignment::Left)
                .style(Style::default().bg(FOOTER_BG)),
        };
        paragraph.render(area, buf);
    }
}
