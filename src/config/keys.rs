//! Keybinding configuration types and parsing
//!
//! Key notation is vim-style: `C-x` (Ctrl), `M-x` (Alt), `S-x` (Shift),
//! `<CR>`, `<Esc>`, `<Tab>`, `<S-Tab>`, `<BS>`, arrows, `<F1>`..`<F12>`.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ui::action::Action;
use crate::ui::events::InputMode;

/// A key combination (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Normalize a crossterm key event to the form produced by config parsing:
    /// uppercase characters become lowercase + SHIFT, shifted symbols such as
    /// `?` drop the SHIFT they were typed with, and Shift+Tab always arrives
    /// as a bare `BackTab`.
    pub fn from_key_event(event: &KeyEvent) -> Self {
        match event.code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => Self {
                code: KeyCode::Char(c.to_ascii_lowercase()),
                modifiers: event.modifiers | KeyModifiers::SHIFT,
            },
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => Self {
                code: event.code,
                modifiers: event.modifiers.difference(KeyModifiers::SHIFT),
            },
            KeyCode::BackTab => Self {
                code: KeyCode::BackTab,
                modifiers: event.modifiers.difference(KeyModifiers::SHIFT),
            },
            _ => Self {
                code: event.code,
                modifiers: event.modifiers,
            },
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("C".to_string());
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("M".to_string());
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("S".to_string());
        }

        let key = match self.code {
            KeyCode::Char(' ') => "<Space>".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "<CR>".to_string(),
            KeyCode::Esc => "<Esc>".to_string(),
            KeyCode::Tab => "<Tab>".to_string(),
            KeyCode::BackTab => "<S-Tab>".to_string(),
            KeyCode::Backspace => "<BS>".to_string(),
            KeyCode::Delete => "<Del>".to_string(),
            KeyCode::Up => "<Up>".to_string(),
            KeyCode::Down => "<Down>".to_string(),
            KeyCode::Left => "<Left>".to_string(),
            KeyCode::Right => "<Right>".to_string(),
            KeyCode::Home => "<Home>".to_string(),
            KeyCode::End => "<End>".to_string(),
            KeyCode::F(n) => format!("<F{n}>"),
            other => format!("{other:?}"),
        };
        parts.push(key);
        write!(f, "{}", parts.join("-"))
    }
}

impl FromStr for KeyCombo {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key_notation(s)
    }
}

/// Logical grouping of input modes for keybinding lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyContext {
    /// Title screen
    Start,
    /// Riddle board while the clock runs
    Board,
    /// Hint and result dialogs
    Dialog,
}

impl KeyContext {
    pub fn from_input_mode(mode: InputMode) -> Self {
        match mode {
            InputMode::Start => KeyContext::Start,
            InputMode::Playing => KeyContext::Board,
            InputMode::ShowingHint | InputMode::ShowingSummary => KeyContext::Dialog,
        }
    }
}

/// Configuration for all keybindings
#[derive(Debug, Clone, Default)]
pub struct KeybindingConfig {
    /// Bindings active in every context unless overridden
    pub global: HashMap<KeyCombo, Action>,
    /// Context-specific bindings
    pub context: HashMap<KeyContext, HashMap<KeyCombo, Action>>,
}

impl KeybindingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context bindings win over global ones
    pub fn get_action(&self, key: &KeyCombo, context: KeyContext) -> Option<Action> {
        self.context
            .get(&context)
            .and_then(|bindings| bindings.get(key))
            .or_else(|| self.global.get(key))
            .copied()
    }

    /// First key bound to `action` in `context` (or globally), for hints
    pub fn key_for(&self, action: Action, context: KeyContext) -> Option<KeyCombo> {
        let find = |map: &HashMap<KeyCombo, Action>| {
            let mut keys: Vec<KeyCombo> = map
                .iter()
                .filter(|(_, a)| **a == action)
                .map(|(k, _)| *k)
                .collect();
            keys.sort_by_key(|k| k.to_string());
            keys.into_iter().next()
        };
        self.context
            .get(&context)
            .and_then(find)
            .or_else(|| find(&self.global))
    }

    /// Layer `other` on top of these bindings
    pub fn merge(&mut self, other: KeybindingConfig) {
        self.global.extend(other.global);
        for (ctx, bindings) in other.context {
            self.context.entry(ctx).or_default().extend(bindings);
        }
    }
}

/// Error type for key parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("empty key notation")]
    Empty,
    #[error("no key specified")]
    NoKey,
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("invalid modifier: {0}")]
    InvalidModifier(String),
    #[error("invalid special key: {0}")]
    InvalidSpecialKey(String),
}

/// Parse a vim-style key notation string into a KeyCombo
pub fn parse_key_notation(s: &str) -> Result<KeyCombo, KeyParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(KeyParseError::Empty);
    }
    if s.len() > 2 && s.starts_with('<') && s.ends_with('>') {
        return parse_special_key(&s[1..s.len() - 1]);
    }
    if s == "-" {
        return Ok(KeyCombo::new(KeyCode::Char('-'), KeyModifiers::NONE));
    }

    let parts: Vec<&str> = s.split('-').collect();
    let (key_part, modifier_parts) = parts.split_last().ok_or(KeyParseError::NoKey)?;
    let mut modifiers = parse_modifiers(modifier_parts)?;

    if key_part.is_empty() {
        return Err(KeyParseError::NoKey);
    }
    let mut chars = key_part.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) => {
            if c.is_ascii_uppercase() {
                modifiers |= KeyModifiers::SHIFT;
            }
            KeyCode::Char(c.to_ascii_lowercase())
        }
        _ if key_part.starts_with('<') && key_part.ends_with('>') && key_part.len() > 2 => {
            parse_special_key(&key_part[1..key_part.len() - 1])?.code
        }
        _ => named_key(key_part).ok_or_else(|| KeyParseError::InvalidKey(key_part.to_string()))?,
    };

    Ok(KeyCombo::new(code, modifiers))
}

/// Parse the inside of `<...>`, which may carry its own modifiers (`<C-CR>`)
fn parse_special_key(inner: &str) -> Result<KeyCombo, KeyParseError> {
    let parts: Vec<&str> = inner.split('-').collect();
    let (name, modifier_parts) = parts.split_last().ok_or(KeyParseError::NoKey)?;
    let mut modifiers = parse_modifiers(modifier_parts)?;

    let mut code =
        named_key(name).ok_or_else(|| KeyParseError::InvalidSpecialKey(name.to_string()))?;
    if code == KeyCode::Tab && modifiers.contains(KeyModifiers::SHIFT) {
        code = KeyCode::BackTab;
        modifiers -= KeyModifiers::SHIFT;
    }
    Ok(KeyCombo::new(code, modifiers))
}

fn parse_modifiers(parts: &[&str]) -> Result<KeyModifiers, KeyParseError> {
    let mut modifiers = KeyModifiers::NONE;
    for part in parts {
        match *part {
            "C" => modifiers |= KeyModifiers::CONTROL,
            "M" | "A" => modifiers |= KeyModifiers::ALT,
            "S" => modifiers |= KeyModifiers::SHIFT,
            other => return Err(KeyParseError::InvalidModifier(other.to_string())),
        }
    }
    Ok(modifiers)
}

fn named_key(name: &str) -> Option<KeyCode> {
    let code = match name.to_ascii_uppercase().as_str() {
        "CR" | "ENTER" | "RETURN" => KeyCode::Enter,
        "ESC" | "ESCAPE" => KeyCode::Esc,
        "TAB" => KeyCode::Tab,
        "BACKTAB" => KeyCode::BackTab,
        "BS" | "BACKSPACE" => KeyCode::Backspace,
        "DEL" | "DELETE" => KeyCode::Delete,
        "UP" => KeyCode::Up,
        "DOWN" => KeyCode::Down,
        "LEFT" => KeyCode::Left,
        "RIGHT" => KeyCode::Right,
        "HOME" => KeyCode::Home,
        "END" => KeyCode::End,
        "SPACE" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('F') => {
            let n: u8 = f[1..].parse().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
        _ => return None,
    };
    Some(code)
}
