//! Default keybindings
//!
//! Used when no user configuration is present; user bindings from the
//! `[keys]` table are merged on top.

use std::collections::HashMap;

use super::keys::{KeyCombo, KeyContext, KeybindingConfig};
use crate::ui::action::Action;

/// Helper to insert a keybinding
fn bind(map: &mut HashMap<KeyCombo, Action>, key: &str, action: Action) {
    if let Ok(combo) = key.parse() {
        map.insert(combo, action);
    }
}

/// Create the default keybindings configuration
pub fn default_keybindings() -> KeybindingConfig {
    let mut config = KeybindingConfig::new();

    // ========== Global ==========
    bind(&mut config.global, "C-q", Action::Quit);
    bind(&mut config.global, "C-c", Action::Quit);

    // ========== Start Screen ==========
    let start = config.context.entry(KeyContext::Start).or_default();
    bind(start, "<CR>", Action::StartGame);
    bind(start, "<Space>", Action::StartGame);
    bind(start, "q", Action::Quit);
    bind(start, "<Esc>", Action::Quit);

    // ========== Riddle Board ==========
    let board = config.context.entry(KeyContext::Board).or_default();
    bind(board, "<CR>", Action::Submit);
    bind(board, "<BS>", Action::Backspace);
    bind(board, "<Left>", Action::MoveCursorLeft);
    bind(board, "<Right>", Action::MoveCursorRight);
    bind(board, "<Tab>", Action::NextRiddle);
    bind(board, "<Down>", Action::NextRiddle);
    bind(board, "<S-Tab>", Action::PrevRiddle);
    bind(board, "<Up>", Action::PrevRiddle);
    bind(board, "h", Action::ShowHint);
    bind(board, "<F1>", Action::ShowHint);
    bind(board, "f", Action::Finish);
    bind(board, "<F10>", Action::Finish);

    // ========== Dialogs ==========
    let dialog = config.context.entry(KeyContext::Dialog).or_default();
    bind(dialog, "<CR>", Action::Confirm);
    bind(dialog, "<Space>", Action::Confirm);
    bind(dialog, "<Esc>", Action::Cancel);
    bind(dialog, "q", Action::Cancel);

    config
}
