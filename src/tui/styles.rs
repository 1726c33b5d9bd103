//! TUI theme and styling

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    // Background and borders
    pub background: Color,
    pub border: Color,
    pub selection: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,
    pub hint: Color,

    // Task state
    pub done: Color,
    pub pending: Color,
    pub error: Color,

    // UI elements
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(255, 255, 255),
            border: Color::Rgb(204, 204, 204),
            selection: Color::Rgb(232, 230, 250),

            title: Color::Rgb(106, 90, 205),
            text: Color::Rgb(34, 34, 34),
            dimmed: Color::Rgb(128, 128, 128),
            hint: Color::Rgb(150, 150, 150),

            done: Color::Rgb(128, 128, 128),
            pending: Color::Rgb(34, 34, 34),
            error: Color::Rgb(200, 40, 40),

            accent: Color::Rgb(106, 90, 205),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(34, 34, 34),
            border: Color::Rgb(80, 80, 80),
            selection: Color::Rgb(55, 52, 75),

            title: Color::Rgb(150, 135, 240),
            text: Color::Rgb(230, 230, 230),
            dimmed: Color::Rgb(140, 140, 140),
            hint: Color::Rgb(110, 110, 110),

            done: Color::Rgb(128, 128, 128),
            pending: Color::Rgb(230, 230, 230),
            error: Color::Rgb(255, 100, 80),

            accent: Color::Rgb(150, 135, 240),
        }
    }
}
