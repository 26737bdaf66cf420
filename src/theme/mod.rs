//! Theming system with automatic color degradation

mod color;

pub use color::Color;

use crate::terminal::TerminalCapabilities;

/// Border style for framed components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    None,
    Single,
    Double,
    #[default]
    Rounded,
    Ascii,
}

impl BorderStyle {
    /// Border characters, or `None` for borderless frames
    pub fn chars(&self) -> Option<BorderChars> {
        let chars = match self {
            BorderStyle::None => return None,
            BorderStyle::Single => BorderChars::new('─', '│', ['┌', '┐', '└', '┘']),
            BorderStyle::Double => BorderChars::new('═', '║', ['╔', '╗', '╚', '╝']),
            BorderStyle::Rounded => BorderChars::new('─', '│', ['╭', '╮', '╰', '╯']),
            BorderStyle::Ascii => BorderChars::new('-', '|', ['+', '+', '+', '+']),
        };
        Some(chars)
    }

    /// Cells taken by the border on each axis
    pub fn thickness(&self) -> u16 {
        if *self == BorderStyle::None {
            0
        } else {
            2
        }
    }
}

/// Border characters for drawing boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl BorderChars {
    fn new(horizontal: char, vertical: char, corners: [char; 4]) -> Self {
        let [top_left, top_right, bottom_left, bottom_right] = corners;
        BorderChars {
            horizontal,
            vertical,
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }
}

/// Visual role of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Plain,
    /// Accepts the dialog
    Affirmative,
    /// Backs out of the dialog
    Negative,
}

/// Theme defining colors and chrome for UI components
#[derive(Debug, Clone)]
pub struct Theme {
    pub text_fg: Color,
    pub title_fg: Color,
    pub border_color: Color,
    pub surface: Color,

    pub button_fg: Color,
    pub button_bg: Color,
    pub affirmative_bg: Color,
    pub negative_bg: Color,

    pub border_style: BorderStyle,
    pub title_bold: bool,

    caps: TerminalCapabilities,
}

impl Theme {
    /// Create a new theme for the given terminal capabilities
    pub fn new(caps: TerminalCapabilities) -> Self {
        Theme {
            text_fg: Color::white(),
            title_fg: Color::white(),
            border_color: Color::dark_gray(),
            surface: Color::rgb(30, 30, 35),

            button_fg: Color::white(),
            button_bg: Color::rgb(70, 70, 80),
            affirmative_bg: Color::rgb(60, 140, 70),
            negative_bg: Color::rgb(170, 50, 50),

            border_style: BorderStyle::Rounded,
            title_bold: true,

            caps,
        }
    }

    /// Terminal capabilities this theme degrades to
    pub fn capabilities(&self) -> &TerminalCapabilities {
        &self.caps
    }

    pub fn text_style(&self) -> String {
        format!("{}{}", self.text_fg.degrade(&self.caps), self.surface.bg(&self.caps))
    }

    pub fn title_style(&self) -> String {
        let mut style = self.title_fg.degrade(&self.caps);
        if self.title_bold {
            style.push_str("\x1b[1m");
        }
        style
    }

    pub fn border_color_style(&self) -> String {
        format!(
            "{}{}",
            self.border_color.degrade(&self.caps),
            self.surface.bg(&self.caps)
        )
    }

    pub fn surface_style(&self) -> String {
        self.surface.bg(&self.caps)
    }

    /// Style for a button; focused buttons are bold and underlined
    pub fn button_style(&self, variant: ButtonVariant, focused: bool) -> String {
        let bg = match variant {
            ButtonVariant::Plain => self.button_bg,
            ButtonVariant::Affirmative => self.affirmative_bg,
            ButtonVariant::Negative => self.negative_bg,
        };

        let mut style = format!("{}{}", self.button_fg.degrade(&self.caps), bg.bg(&self.caps));
        if focused {
            style.push_str("\x1b[1m\x1b[4m");
        }
        style
    }
}
