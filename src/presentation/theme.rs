//! Design tokens for emotegen CLI output.
//!
//! Design constraints:
//! - Only 5 semantic colors (`colors::*`)
//! - All icons must be sourced from this module

use crossterm::style::{Color, Stylize};

pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const WRITE: &str = "→";
    pub const UNCHANGED: &str = "○";
    pub const CHAIN: &str = " → ";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "-";
    pub const WRITE: &str = "->";
    pub const UNCHANGED: &str = "[ ]";
    pub const CHAIN: &str = " > ";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Write,
    Unchanged,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => icons::SUCCESS,
            (true, Icon::Error) => icons::ERROR,
            (true, Icon::Warning) => icons::WARNING,
            (true, Icon::Arrow) => icons::ARROW,
            (true, Icon::Write) => icons::WRITE,
            (true, Icon::Unchanged) => icons::UNCHANGED,
            (false, Icon::Success) => icons_ascii::SUCCESS,
            (false, Icon::Error) => icons_ascii::ERROR,
            (false, Icon::Warning) => icons_ascii::WARNING,
            (false, Icon::Arrow) => icons_ascii::ARROW,
            (false, Icon::Write) => icons_ascii::WRITE,
            (false, Icon::Unchanged) => icons_ascii::UNCHANGED,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Write => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning => colors::WARNING,
            Icon::Arrow => colors::INFO,
            Icon::Unchanged => colors::DIM,
        };
        s.with(color).to_string()
    }
}

/// Dim secondary text when color is enabled.
pub fn dim(text: &str, supports_color: bool) -> String {
    if supports_color {
        text.with(colors::DIM).to_string()
    } else {
        text.to_string()
    }
}

/// Bold text when color is enabled.
pub fn bold(text: &str, supports_color: bool) -> String {
    if supports_color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}
