//! Dark and light themes.

use ratatui::style::{Color, Modifier, Style};
use std::fmt;

/// Active visual theme. Never persisted; every launch starts dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeState {
    #[default]
    Dark,
    Light,
}

impl ThemeState {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Label shown on the theme button.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dark => "Dark Theme",
            Self::Light => "Light Theme",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Dark => Palette {
                bg: hex("#1e1e1e"),
                text_bg: hex("#2d2d2d"),
                fg: hex("#ffffff"),
                button_bar_bg: hex("#2d2d2d"),
                save: ButtonColors::new("#90EE90", "#000000"),
                open: ButtonColors::new("#FFA500", "#000000"),
                pin: ButtonColors::new("#ADD8E6", "#000000"),
                delete: ButtonColors::new("#FF6B6B", "#ffffff"),
                theme: ButtonColors::new("#2d2d2d", "#ffffff"),
            },
            Self::Light => Palette {
                bg: hex("#ffffff"),
                text_bg: hex("#f0f0f0"),
                fg: hex("#000000"),
                button_bar_bg: hex("#f0f0f0"),
                save: ButtonColors::new("#98FB98", "#000000"),
                open: ButtonColors::new("#FFB84D", "#000000"),
                pin: ButtonColors::new("#B0E0E6", "#000000"),
                delete: ButtonColors::new("#FFB6B6", "#000000"),
                theme: ButtonColors::new("#f0f0f0", "#000000"),
            },
        }
    }
}

impl fmt::Display for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

/// Background and foreground of one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonColors {
    pub bg: Color,
    pub fg: Color,
}

impl ButtonColors {
    fn new(bg: &str, fg: &str) -> Self {
        Self {
            bg: hex(bg),
            fg: hex(fg),
        }
    }

    pub fn style(&self) -> Style {
        Style::default()
            .bg(self.bg)
            .fg(self.fg)
            .add_modifier(Modifier::BOLD)
    }
}

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Window and panel background.
    pub bg: Color,
    /// Text area background.
    pub text_bg: Color,
    /// Text color.
    pub fg: Color,
    pub button_bar_bg: Color,
    pub save: ButtonColors,
    pub open: ButtonColors,
    pub pin: ButtonColors,
    pub delete: ButtonColors,
    pub theme: ButtonColors,
}

impl Palette {
    pub fn base(&self) -> Style {
        Style::default().bg(self.bg).fg(self.fg)
    }

    pub fn text_area(&self) -> Style {
        Style::default().bg(self.text_bg).fg(self.fg)
    }

    pub fn title(&self) -> Style {
        self.base().add_modifier(Modifier::BOLD)
    }
}

/// Parse a `#rrggbb` color. Malformed input falls back to the terminal default.
pub fn hex(s: &str) -> Color {
    parse_hex(s).unwrap_or(Color::Reset)
}

fn parse_hex(s: &str) -> Option<Color> {
    let s = s.trim_start_matches('#');
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemeState::default(), ThemeState::Dark);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for theme in [ThemeState::Dark, ThemeState::Light] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(ThemeState::Dark.label(), "Dark Theme");
        assert_eq!(ThemeState::Light.label(), "Light Theme");
        assert_eq!(ThemeState::Light.to_string(), "light");
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex("#1e1e1e"), Color::Rgb(0x1e, 0x1e, 0x1e));
        assert_eq!(hex("FFA500"), Color::Rgb(255, 165, 0));
        assert_eq!(hex("#abc"), Color::Reset);
        assert_eq!(hex("#zzzzzz"), Color::Reset);
    }

    #[test]
    fn test_palettes_differ() {
        let dark = ThemeState::Dark.palette();
        let light = ThemeState::Light.palette();
        assert_eq!(dark.bg, Color::Rgb(0x1e, 0x1e, 0x1e));
        assert_eq!(light.bg, Color::Rgb(0xff, 0xff, 0xff));
        assert_ne!(dark.delete, light.delete);
    }
}
