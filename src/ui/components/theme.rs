//! Shared UI color constants.

use ratatui::style::Color;

pub const ACCENT_PRIMARY: Color = Color::Cyan;
pub const ACCENT_SUCCESS: Color = Color::Green;
pub const ACCENT_ERROR: Color = Color::Red;

pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Rgb(200, 200, 200);
pub const TEXT_MUTED: Color = Color::Rgb(140, 140, 140);
pub const TEXT_FAINT: Color = Color::Rgb(90, 90, 90);

pub const BORDER_DEFAULT: Color = Color::Rgb(70, 70, 70);

pub const SELECTED_BG: Color = Color::Rgb(40, 60, 80);
pub const HEADER_BG: Color = Color::Rgb(30, 30, 30);
pub const FOOTER_BG: Color = Color::Rgb(25, 25, 25);
pub const KEY_HINT_BG: Color = Color::Rgb(60, 60, 60);
