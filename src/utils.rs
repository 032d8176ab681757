//! # utils.rs - Utility functions for termfmt
//!
//! Helpers for working with already-formatted text.

use std::borrow::Cow;

use regex::Regex;

lazy_static::lazy_static! {
    // SGR sequences only: ESC [ params m
    static ref SGR_PATTERN: Regex = Regex::new(r"\x1b\[[0-9;]*m").expect("valid SGR pattern");
}

/// Remove every SGR escape sequence from `text`.
///
/// Borrows `text` when there is nothing to strip.
///
/// # Examples
///
/// ```
/// use termfmt::utils::strip_ansi;
///
/// assert_eq!(strip_ansi("\x1b[91mred\x1b[0m"), "red");
/// assert_eq!(strip_ansi("plain"), "plain");
/// ```
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    SGR_PATTERN.replace_all(text, "")
}

/// Number of characters left once escape codes are stripped.
///
/// Counts `char`s, not terminal columns.
pub fn visible_len(text: &str) -> usize {
    strip_ansi(text).chars().count()
}
