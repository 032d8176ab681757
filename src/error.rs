//! # error.rs - Error types for termfmt
//!
//! Every error here is a caller mistake: an unknown color or style name, or a
//! pop with nothing left to close. None of them are worth retrying.

use std::convert::Infallible;

use thiserror::Error;

/// Errors raised by [`FormatBuilder`](crate::FormatBuilder) operations and the
/// tag validation helpers in [`style`](crate::style).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The value is not one of the 8 color tags.
    #[error("invalid color tag: {0:?}")]
    InvalidColor(String),

    /// The value is not one of the 7 style tags.
    #[error("invalid style tag: {0:?}")]
    InvalidStyle(String),

    /// The value is neither a color nor a style tag.
    #[error("invalid tag: {0:?}")]
    InvalidTag(String),

    /// `pop` was called with no open tag.
    #[error("pop called with no open format tag")]
    UnbalancedPop,
}

// Typed tags convert through `TryFrom<T> for T`, whose error can never exist.
impl From<Infallible> for FormatError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FormatError>;
