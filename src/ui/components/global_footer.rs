use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::{KeyContext, KeybindingConfig};
use crate::ui::action::Action;
use crate::ui::components::{HintPlacement, KeyHints};

/// Bottom line listing the keys that work on the current screen.
///
/// Keys are looked up in the active bindings so remapped keys show up as
/// configured.
pub struct GlobalFooter {
    hints: KeyHints,
}

impl GlobalFooter {
    pub fn for_context(
        keybindings: &KeybindingConfig,
        context: KeyContext,
        hints_enabled: bool,
    ) -> Self {
        let actions: &[(Action, &'static str)] = match context {
            KeyContext::Start => &[(Action::StartGame, "start"), (Action::Quit, "quit")],
            KeyContext::Board => &[
                (Action::Submit, "submit"),
                (Action::NextRiddle, "next"),
                (Action::PrevRiddle, "prev"),
                (Action::ShowHint, "hint"),
                (Action::Finish, "finish"),
                (Action::Quit, "quit"),
            ],
            KeyContext::Dialog => &[(Action::Confirm, "ok"), (Action::Cancel, "back")],
        };

        let shown: Vec<_> = actions
            .iter()
            .copied()
            .filter(|(action, _)| hints_enabled || *action != Action::ShowHint)
            .collect();

        Self {
            hints: KeyHints::resolve(keybindings, context, &shown),
        }
    }

    pub fn hints(&self) -> &KeyHints {
        &self.hints
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        self.hints.render(area, buf, HintPlacement::Footer);
    }
}
