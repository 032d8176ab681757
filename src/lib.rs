//! # lib.rs - Core Library for termfmt
//!
//! termfmt composes strings annotated with ANSI escape codes through a fluent,
//! stateful builder. The builder keeps a stack of open colors and styles and
//! closes them correctly when they are nested, toggled or when formatted
//! fragments from other builders are embedded.
//!
//! ## Architecture
//!
//! - **FormatBuilder** ([`builder`]): text buffer plus format stack, the
//!   push/pop/merge logic
//! - **Tags** ([`style`]): color and style escape codes, terminator, validation
//! - **Errors** ([`error`]): [`FormatError`] for invalid tags and unbalanced pops
//! - **ColorMode**: whether printed output keeps its escape codes (On/Off/Auto)
//!
//! ## Usage Example
//!
//! ```
//! use termfmt::{Color, FormatBuilder};
//!
//! let mut fmt = FormatBuilder::new();
//! fmt.red("Error: ")?
//!     .bold("disk full")?
//!     .pop(" (retrying)")?
//!     .background(Color::Yellow, " 3/5 ")?;
//! fmt.print();
//! # Ok::<(), termfmt::FormatError>(())
//! ```

pub mod builder;
pub mod error;
pub mod style;
pub mod utils;

use std::io::IsTerminal;
use std::str::FromStr;

pub use builder::{Content, FormatBuilder};
pub use error::{FormatError, Result};
pub use style::{COLORS, Color, STYLES, Style, TERMINATOR, Tag, check_color, check_style, check_tag};

/// Decides whether a builder's printed output keeps its escape codes.
///
/// Only [`FormatBuilder::print`], [`FormatBuilder::write_to`] and
/// [`FormatBuilder::render_with`] consult it; [`FormatBuilder::render`]
/// always returns the codes.
///
/// Parsed from `"on"`, `"off"` or `"auto"`:
///
/// ```
/// use termfmt::ColorMode;
///
/// assert_eq!("off".parse::<ColorMode>(), Ok(ColorMode::Off));
/// assert_eq!("auto".parse::<ColorMode>(), Ok(ColorMode::Auto));
/// assert!("never".parse::<ColorMode>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColorMode {
    /// Print escape codes as written.
    On,
    /// Strip every SGR code before printing.
    Off,
    /// Keep codes only when stdout is a terminal and `NO_COLOR` is empty or unset.
    Auto,
}

impl ColorMode {
    /// Resolve the mode to a yes/no answer for the current process.
    pub fn is_enabled(self) -> bool {
        match self {
            ColorMode::On => true,
            ColorMode::Off => false,
            ColorMode::Auto => !no_color_requested() && std::io::stdout().is_terminal(),
        }
    }
}

impl FromStr for ColorMode {
    type Err = ();

    /// Parse `"on"`, `"off"` or `"auto"` (case-sensitive).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "on" => Ok(ColorMode::On),
            "off" => Ok(ColorMode::Off),
            "auto" => Ok(ColorMode::Auto),
            _ => Err(()),
        }
    }
}

// https://no-color.org: any non-empty value disables color.
fn no_color_requested() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}
