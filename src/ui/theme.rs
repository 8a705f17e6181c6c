use crate::narrative::Rgb;
use ratatui::style::Color;

/// Dark narrative theme: white copy on black, like the page it came from.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub dimmed: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::night()
    }
}

impl Theme {
    pub fn night() -> Self {
        Self {
            background: Color::Rgb(0, 0, 0),
            text: Color::Rgb(255, 255, 255),
            dimmed: Color::Rgb(110, 110, 120),
            accent: Color::Rgb(168, 85, 247), // purple-500
        }
    }

    pub fn current() -> Self {
        Self::night()
    }
}

/// Map a narrative highlight color onto a terminal color.
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn accent() -> Color {
        Theme::current().accent
    }
}
