use ratatui::style::Color;

use crate::model::UiConfig;

/// Which of the two built-in palettes is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Dark,
    Light,
}

impl ThemeKind {
    pub fn toggle(self) -> ThemeKind {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Option<ThemeKind> {
        match s {
            "dark" => Some(ThemeKind::Dark),
            "light" => Some(ThemeKind::Light),
            _ => None,
        }
    }
}

/// Parsed color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub card_border: Color,
    pub selection_border: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub cyan: Color,
    /// Banner colors for cards without an attachment, picked by position
    pub placeholder: [Color; 4],
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x14, 0x14, 0x1C),
            text: Color::Rgb(0xC4, 0xC4, 0xD2),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6E, 0x6E, 0x82),
            highlight: Color::Rgb(0x4E, 0xC9, 0xB0),
            card_border: Color::Rgb(0x3A, 0x3A, 0x4A),
            selection_border: Color::Rgb(0x4E, 0xC9, 0xB0),
            red: Color::Rgb(0xE0, 0x5A, 0x5A),
            yellow: Color::Rgb(0xE5, 0xC0, 0x7B),
            green: Color::Rgb(0x6A, 0xC4, 0x7A),
            cyan: Color::Rgb(0x56, 0xB6, 0xC2),
            placeholder: [
                Color::Rgb(0x44, 0x88, 0xCC),
                Color::Rgb(0x8A, 0x63, 0xD2),
                Color::Rgb(0x3E, 0xA8, 0x8A),
                Color::Rgb(0xC2, 0x78, 0x4E),
            ],
        }
    }

    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xF4, 0xF1, 0xE8),
            text: Color::Rgb(0x3A, 0x3A, 0x42),
            text_bright: Color::Rgb(0x10, 0x10, 0x14),
            dim: Color::Rgb(0x9A, 0x96, 0x8A),
            highlight: Color::Rgb(0x0E, 0x7C, 0x6B),
            card_border: Color::Rgb(0xC8, 0xC3, 0xB4),
            selection_border: Color::Rgb(0x0E, 0x7C, 0x6B),
            red: Color::Rgb(0xB4, 0x2B, 0x2B),
            yellow: Color::Rgb(0x9A, 0x6E, 0x00),
            green: Color::Rgb(0x2E, 0x7D, 0x32),
            cyan: Color::Rgb(0x00, 0x6E, 0x7A),
            placeholder: [
                Color::Rgb(0x2A, 0x5E, 0x9E),
                Color::Rgb(0x6A, 0x44, 0xA8),
                Color::Rgb(0x1E, 0x7A, 0x5E),
                Color::Rgb(0x9E, 0x58, 0x2E),
            ],
        }
    }

    pub fn for_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }

    /// Build a palette from the theme kind plus [ui.colors] overrides
    pub fn from_config(kind: ThemeKind, ui: &UiConfig) -> Self {
        let mut theme = Theme::for_kind(kind);

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "highlight" => theme.highlight = color,
                    "card_border" => theme.card_border = color,
                    "selection_border" => theme.selection_border = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "green" => theme.green = color,
                    "cyan" => theme.cyan = color,
                    _ => {}
                }
            }
        }
        theme
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
