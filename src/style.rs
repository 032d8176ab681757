//! ANSI tag tables
//!
//! This module holds the escape sequences a [`FormatBuilder`](crate::FormatBuilder)
//! can open: 8 foreground colors, 7 text styles and the terminator that resets
//! everything.
//!
//! ## Tags
//!
//! - [`Color`]: black, red, green, yellow, blue, magenta, cyan, white (bright palette)
//! - [`Style`]: background, blink, bold, faded, italic, strike, underline
//! - [`Tag`]: either of the above, the unit stored on the format stack
//!
//! `Style::Background` is not a standalone effect. It reverses the color that
//! was opened right before it, so the builder always pushes it on top of a color.
//!
//! ## Parsing
//!
//! Tags parse from their lowercase name or from the raw escape code:
//!
//! ```
//! use termfmt::{Color, Style, Tag};
//!
//! assert_eq!("red".parse::<Color>(), Ok(Color::Red));
//! assert_eq!("\x1b[1m".parse::<Style>(), Ok(Style::Bold));
//! assert_eq!("italic".parse::<Tag>(), Ok(Tag::Style(Style::Italic)));
//! assert!("purple".parse::<Color>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{FormatError, Result};

/// Escape sequence that resets all active formatting.
pub const TERMINATOR: &str = "\x1b[0m";

/// Every color tag, in declaration order.
pub const COLORS: [Color; 8] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

/// Every style tag, in declaration order.
pub const STYLES: [Style; 7] = [
    Style::Background,
    Style::Blink,
    Style::Bold,
    Style::Faded,
    Style::Italic,
    Style::Strike,
    Style::Underline,
];

/// Foreground color tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// Text style tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Reverse video: paints the preceding color as the background.
    Background,
    Blink,
    Bold,
    /// Dim text (low intensity)
    Faded,
    Italic,
    Strike,
    Underline,
}

/// A single entry of the format stack: one color or one style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Color(Color),
    Style(Style),
}

impl Color {
    /// ANSI escape sequence for this color
    #[inline]
    pub const fn code(self) -> &'static str {
        match self {
            Color::Black => "\x1b[90m",
            Color::Red => "\x1b[91m",
            Color::Green => "\x1b[92m",
            Color::Yellow => "\x1b[93m",
            Color::Blue => "\x1b[94m",
            Color::Magenta => "\x1b[95m",
            Color::Cyan => "\x1b[96m",
            Color::White => "\x1b[97m",
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }

    fn lookup(value: &str) -> Option<Self> {
        COLORS
            .into_iter()
            .find(|c| c.code() == value || c.name().eq_ignore_ascii_case(value))
    }
}

impl Style {
    /// ANSI escape sequence for this style
    #[inline]
    pub const fn code(self) -> &'static str {
        match self {
            Style::Background => "\x1b[7m",
            Style::Blink => "\x1b[5m",
            Style::Bold => "\x1b[1m",
            Style::Faded => "\x1b[2m",
            Style::Italic => "\x1b[3m",
            Style::Strike => "\x1b[9m",
            Style::Underline => "\x1b[4m",
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Style::Background => "background",
            Style::Blink => "blink",
            Style::Bold => "bold",
            Style::Faded => "faded",
            Style::Italic => "italic",
            Style::Strike => "strike",
            Style::Underline => "underline",
        }
    }

    fn lookup(value: &str) -> Option<Self> {
        STYLES
            .into_iter()
            .find(|s| s.code() == value || s.name().eq_ignore_ascii_case(value))
    }
}

impl Tag {
    /// ANSI escape sequence for this tag
    #[inline]
    pub const fn code(self) -> &'static str {
        match self {
            Tag::Color(color) => color.code(),
            Tag::Style(style) => style.code(),
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Color(color) => color.name(),
            Tag::Style(style) => style.name(),
        }
    }

    /// True for the background marker, which always sits on top of a color.
    #[inline]
    pub const fn is_background(self) -> bool {
        matches!(self, Tag::Style(Style::Background))
    }
}

/// Check whether `value` names one of the color tags.
///
/// Accepts the lowercase name (case-insensitive) or the escape code itself.
///
/// # Errors
///
/// [`FormatError::InvalidColor`] carrying `value` when it is not a color.
pub fn check_color(value: &str) -> Result<Color> {
    Color::lookup(value).ok_or_else(|| FormatError::InvalidColor(value.to_string()))
}

/// Check whether `value` names one of the style tags.
///
/// # Errors
///
/// [`FormatError::InvalidStyle`] carrying `value` when it is not a style.
pub fn check_style(value: &str) -> Result<Style> {
    Style::lookup(value).ok_or_else(|| FormatError::InvalidStyle(value.to_string()))
}

/// Check whether `value` names any color or style tag.
///
/// # Errors
///
/// [`FormatError::InvalidTag`] carrying `value` when it is neither.
pub fn check_tag(value: &str) -> Result<Tag> {
    Color::lookup(value)
        .map(Tag::Color)
        .or_else(|| Style::lookup(value).map(Tag::Style))
        .ok_or_else(|| FormatError::InvalidTag(value.to_string()))
}

impl From<Color> for Tag {
    fn from(color: Color) -> Self {
        Tag::Color(color)
    }
}

impl From<Style> for Tag {
    fn from(style: Style) -> Self {
        Tag::Style(style)
    }
}

impl FromStr for Color {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        check_color(s)
    }
}

impl FromStr for Style {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        check_style(s)
    }
}

impl FromStr for Tag {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        check_tag(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = FormatError;

    fn try_from(value: &str) -> Result<Self> {
        check_color(value)
    }
}

impl TryFrom<&str> for Style {
    type Error = FormatError;

    fn try_from(value: &str) -> Result<Self> {
        check_style(value)
    }
}

impl TryFrom<&str> for Tag {
    type Error = FormatError;

    fn try_from(value: &str) -> Result<Self> {
        check_tag(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
