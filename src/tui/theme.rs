// Theme system for the TUI
//
// Provides color themes that can be switched at runtime with 't'.
// Each theme defines colors for the quiz UI elements.

use ratatui::style::Color;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Nord,
    Gruvbox,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Nord,
            ThemeKind::Gruvbox,
        ]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Look up a theme by its config name; unknown names fall back to Dark
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "light" => ThemeKind::Light,
            "nord" => ThemeKind::Nord,
            "gruvbox" => ThemeKind::Gruvbox,
            _ => ThemeKind::Dark,
        }
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Nord => "Nord",
            ThemeKind::Gruvbox => "Gruvbox",
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Nord => Theme::nord(),
            ThemeKind::Gruvbox => Theme::gruvbox(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,

    // Title and status
    pub title: Color,
    pub status_bar: Color,
    pub hint: Color,

    // Question heading
    pub heading: Color,

    // Variant list
    pub cursor_bg: Color,
    pub cursor_fg: Color,
    pub selected: Color,
    pub correct: Color,
    pub wrong: Color,

    // Action button
    pub button: Color,
    pub button_disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            border: Color::Gray,
            border_focused: Color::Cyan,
            title: Color::Cyan,
            status_bar: Color::Green,
            hint: Color::DarkGray,
            heading: Color::Yellow,
            cursor_bg: Color::DarkGray,
            cursor_fg: Color::Yellow,
            selected: Color::Cyan,
            correct: Color::Green,
            wrong: Color::Red,
            button: Color::Cyan,
            button_disabled: Color::DarkGray,
        }
    }

    /// Light theme for bright terminals
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            title: Color::Blue,
            status_bar: Color::Rgb(0, 110, 0),
            hint: Color::Gray,
            heading: Color::Rgb(140, 80, 0),
            cursor_bg: Color::Rgb(220, 220, 220),
            cursor_fg: Color::Black,
            selected: Color::Blue,
            correct: Color::Rgb(0, 130, 0),
            wrong: Color::Rgb(180, 0, 0),
            button: Color::Blue,
            button_disabled: Color::Gray,
        }
    }

    /// Nord-inspired palette
    pub fn nord() -> Self {
        Self {
            fg: Color::Rgb(216, 222, 233),
            border: Color::Rgb(76, 86, 106),
            border_focused: Color::Rgb(136, 192, 208),
            title: Color::Rgb(136, 192, 208),
            status_bar: Color::Rgb(163, 190, 140),
            hint: Color::Rgb(76, 86, 106),
            heading: Color::Rgb(235, 203, 139),
            cursor_bg: Color::Rgb(59, 66, 82),
            cursor_fg: Color::Rgb(235, 203, 139),
            selected: Color::Rgb(129, 161, 193),
            correct: Color::Rgb(163, 190, 140),
            wrong: Color::Rgb(191, 97, 106),
            button: Color::Rgb(136, 192, 208),
            button_disabled: Color::Rgb(76, 86, 106),
        }
    }

    /// Gruvbox-inspired palette
    pub fn gruvbox() -> Self {
        Self {
            fg: Color::Rgb(235, 219, 178),
            border: Color::Rgb(124, 111, 100),
            border_focused: Color::Rgb(131, 165, 152),
            title: Color::Rgb(131, 165, 152),
            status_bar: Color::Rgb(184, 187, 38),
            hint: Color::Rgb(124, 111, 100),
            heading: Color::Rgb(250, 189, 47),
            cursor_bg: Color::Rgb(60, 56, 54),
            cursor_fg: Color::Rgb(250, 189, 47),
            selected: Color::Rgb(131, 165, 152),
            correct: Color::Rgb(184, 187, 38),
            wrong: Color::Rgb(251, 73, 52),
            button: Color::Rgb(131, 165, 152),
            button_disabled: Color::Rgb(124, 111, 100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_cycle_visits_every_preset() {
        let mut kind = ThemeKind::Dark;
        let mut seen = vec![kind];
        for _ in 1..ThemeKind::all().len() {
            kind = kind.next();
            seen.push(kind);
        }
        assert_eq!(seen.len(), ThemeKind::all().len());
        assert_eq!(kind.next(), ThemeKind::Dark);
    }

    #[test]
    fn unknown_theme_name_falls_back_to_dark() {
        assert_eq!(ThemeKind::from_name("nord"), ThemeKind::Nord);
        assert_eq!(ThemeKind::from_name("NORD"), ThemeKind::Nord);
        assert_eq!(ThemeKind::from_name("solarized"), ThemeKind::Dark);
    }
}
