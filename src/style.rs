//! Lightweight ANSI style implementation
//!
//! This module provides the small, fixed styling vocabulary the report
//! renderer needs: the eight base foreground colors with bright and bold
//! variants, a blue background for the banner and the closing rule, and one
//! 256-color slot (the distro orange). Styles are `const`-constructible so
//! the rule tables can live in `static` data.
//!
//! ## Usage
//!
//! ```
//! use rshowenv::Style;
//!
//! let style = Style::new().green().bright();
//! println!("{}", style.apply_to("10.0.0.1"));
//! ```

use std::fmt;

/// ANSI style builder for terminal colors and text attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    fg_color: Option<Color>,
    bg_color: Option<Color>,
    bold: bool,
    bright: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// 256-color palette index (`38;5;n` / `48;5;n`)
    Fixed(u8),
}

impl Style {
    /// Create a new empty style with no formatting
    #[inline]
    pub const fn new() -> Self {
        Style {
            fg_color: None,
            bg_color: None,
            bold: false,
            bright: false,
        }
    }

    // Foreground colors
    #[inline]
    pub const fn black(mut self) -> Self {
        self.fg_color = Some(Color::Black);
        self
    }

    #[inline]
    pub const fn red(mut self) -> Self {
        self.fg_color = Some(Color::Red);
        self
    }

    #[inline]
    pub const fn green(mut self) -> Self {
        self.fg_color = Some(Color::Green);
        self
    }

    #[inline]
    pub const fn yellow(mut self) -> Self {
        self.fg_color = Some(Color::Yellow);
        self
    }

    #[inline]
    pub const fn blue(mut self) -> Self {
        self.fg_color = Some(Color::Blue);
        self
    }

    #[inline]
    pub const fn magenta(mut self) -> Self {
        self.fg_color = Some(Color::Magenta);
        self
    }

    #[inline]
    pub const fn cyan(mut self) -> Self {
        self.fg_color = Some(Color::Cyan);
        self
    }

    #[inline]
    pub const fn white(mut self) -> Self {
        self.fg_color = Some(Color::White);
        self
    }

    /// 256-color palette foreground, e.g. `fixed(202)` for orange
    #[inline]
    pub const fn fixed(mut self, n: u8) -> Self {
        self.fg_color = Some(Color::Fixed(n));
        self
    }

    // Background colors
    #[inline]
    pub const fn on_blue(mut self) -> Self {
        self.bg_color = Some(Color::Blue);
        self
    }

    // Text attributes
    #[inline]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Select the high-intensity variant of the foreground color
    /// (`91`..`97` instead of `31`..`37`). Has no effect on `Fixed` colors.
    #[inline]
    pub const fn bright(mut self) -> Self {
        self.bright = true;
        self
    }

    /// Apply this style to a string, returning a formatted wrapper
    pub fn apply_to<'a>(&self, text: &'a str) -> StyledText<'a> {
        StyledText { text, style: *self }
    }

    /// Generate ANSI escape codes for this style
    fn to_ansi_codes(self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut codes: Vec<String> = Vec::new();

        if self.bold {
            codes.push("1".to_string());
        }

        if let Some(fg) = self.fg_color {
            codes.push(match fg {
                Color::Fixed(n) => format!("38;5;{}", n),
                base => {
                    let block = if self.bright { 90u8 } else { 30u8 };
                    (block + base_offset(base)).to_string()
                }
            });
        }

        if let Some(bg) = self.bg_color {
            codes.push(match bg {
                Color::Fixed(n) => format!("48;5;{}", n),
                base => (40 + base_offset(base)).to_string(),
            });
        }

        if codes.is_empty() {
            String::new()
        } else {
            format!("\x1b[{}m", codes.join(";"))
        }
    }

    /// Check if this style has any formatting
    const fn is_empty(&self) -> bool {
        self.fg_color.is_none() && self.bg_color.is_none() && !self.bold
    }
}

/// Offset of a base color within an ANSI color block (30-37, 40-47, 90-97)
const fn base_offset(color: Color) -> u8 {
    match color {
        Color::Black => 0,
        Color::Red => 1,
        Color::Green => 2,
        Color::Yellow => 3,
        Color::Blue => 4,
        Color::Magenta => 5,
        Color::Cyan => 6,
        Color::White => 7,
        // Callers resolve Fixed before reaching here
        Color::Fixed(_) => 0,
    }
}

/// Wrapper for styled text that implements Display
pub struct StyledText<'a> {
    text: &'a str,
    style: Style,
}

impl<'a> fmt::Display for StyledText<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.style.is_empty() {
            // No styling - just write the text
            write!(f, "{}", self.text)
        } else {
            // Write: ANSI codes + text + reset
            write!(f, "{}{}\x1b[0m", self.style.to_ansi_codes(), self.text)
        }
    }
}
