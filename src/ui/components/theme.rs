//! Shared UI color constants.

use ratatui::style::Color;

pub const ACCENT_PRIMARY: Color = Color::Rgb(97, 175, 239);
pub const ACCENT_SUCCESS: Color = Color::Rgb(152, 195, 121);
pub const ACCENT_ERROR: Color = Color::Rgb(224, 108, 117);
pub const ACCENT_WARNING: Color = Color::Rgb(229, 192, 123);

pub const TEXT_BRIGHT: Color = Color::Rgb(230, 230, 230);
pub const TEXT_SECONDARY: Color = Color::Rgb(190, 190, 190);
pub const TEXT_MUTED: Color = Color::Rgb(140, 140, 140);
pub const TEXT_FAINT: Color = Color::Rgb(90, 90, 90);

pub const SELECTED_BG: Color = Color::Rgb(40, 60, 80);
pub const STATUS_BAR_BG: Color = Color::Rgb(30, 30, 30);
pub const FOOTER_BG: Color = Color::Rgb(25, 25, 25);
pub const KEY_HINT_BG: Color = Color::Rgb(60, 60, 60);

pub const FLASH_SUCCESS_BG: Color = Color::Rgb(30, 70, 40);
pub const FLASH_FAILURE_BG: Color = Color::Rgb(80, 30, 35);
