//! # builder.rs - Stack-based formatting builder
//!
//! [`FormatBuilder`] accumulates text interleaved with ANSI escape codes while
//! tracking which tags are currently open. Closing a tag resets the terminal
//! and replays whatever is still open, so nested spans never leak and never
//! end early.
//!
//! ## Format stack
//!
//! Every opened tag is pushed onto the stack together with the buffer offset
//! at which its code was written. Opening the tag that is already on top
//! closes it instead (toggle-off). The background marker always sits directly
//! above a color, and closing it closes that color as well.
//!
//! ## Terminators inside written text
//!
//! Text handed to [`FormatBuilder::write`] may contain the terminator, either
//! by accident or because it is the output of another builder. Each terminator
//! found is followed by a replay of the tags open in *this* builder, so the
//! surrounding formatting survives the reset:
//!
//! ```
//! use termfmt::{Color, FormatBuilder, TERMINATOR};
//!
//! let mut inner = FormatBuilder::new();
//! inner.bold("inner")?;
//!
//! let mut outer = FormatBuilder::new();
//! outer.red("before ")?.write(&inner).write(" after");
//!
//! let red = Color::Red.code();
//! assert_eq!(
//!     outer.string(),
//!     format!("{red}before \x1b[1minner{TERMINATOR}{red} after"),
//! );
//! # Ok::<(), termfmt::FormatError>(())
//! ```
//!
//! ## Empty spans
//!
//! When a tag is closed before any text was written after its code, the code
//! is dropped from the buffer rather than followed by a reset. Opening and
//! immediately closing a tag therefore leaves the buffer untouched.

use std::fmt;
use std::io::{self, Write};

use log::{debug, trace};

use crate::ColorMode;
use crate::error::{FormatError, Result};
use crate::style::{Color, Style, TERMINATOR, Tag, check_tag};
use crate::utils::strip_ansi;

/// Text accepted by the builder: either plain text or the output of another
/// builder, which is merged with its formatting contained.
#[derive(Debug, Clone, Copy)]
pub enum Content<'a> {
    Plain(&'a str),
    Builder(&'a FormatBuilder),
}

impl<'a> From<&'a str> for Content<'a> {
    fn from(text: &'a str) -> Self {
        Content::Plain(text)
    }
}

impl<'a> From<&'a String> for Content<'a> {
    fn from(text: &'a String) -> Self {
        Content::Plain(text.as_str())
    }
}

impl<'a> From<&'a FormatBuilder> for Content<'a> {
    fn from(builder: &'a FormatBuilder) -> Self {
        Content::Builder(builder)
    }
}

/// An open tag and the buffer offset where its code starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    tag: Tag,
    mark: usize,
}

/// Fluent builder for ANSI-formatted strings.
///
/// Every mutator returns `&mut Self` (wrapped in a `Result` when it can fail)
/// so calls chain:
///
/// ```
/// use termfmt::{Color, FormatBuilder, Style, TERMINATOR};
///
/// let mut fmt = FormatBuilder::new();
/// fmt.red("Hello ")?.bold("World")?;
/// assert_eq!(
///     fmt.render(),
///     format!("{}Hello {}World{}", Color::Red, Style::Bold, TERMINATOR),
/// );
/// # Ok::<(), termfmt::FormatError>(())
/// ```
///
/// A builder is not meant to be shared between threads while it is being
/// mutated; wrap the whole call chain in a lock if that is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatBuilder {
    buffer: String,
    stack: Vec<Entry>,
    color_mode: ColorMode,
}

impl Default for FormatBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatBuilder {
    /// Create an empty builder: no text, no open tags.
    pub fn new() -> Self {
        FormatBuilder {
            buffer: String::new(),
            stack: Vec::new(),
            color_mode: ColorMode::On,
        }
    }

    /// Create a builder seeded with `text` through [`write`](Self::write).
    pub fn with_text<'a>(text: impl Into<Content<'a>>) -> Self {
        let mut builder = Self::new();
        builder.write(text);
        builder
    }

    /// Set the color mode used by [`print`](Self::print) and
    /// [`write_to`](Self::write_to). [`render`](Self::render) ignores it.
    pub fn color_mode(&mut self, mode: ColorMode) -> &mut Self {
        self.color_mode = mode;
        self
    }

    /// Number of open tags. The background marker counts separately from its color.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Open tags, outermost first.
    pub fn active_tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.stack.iter().map(|entry| entry.tag)
    }

    /// True when nothing has been written and no tag is open.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty() && self.stack.is_empty()
    }

    /// Open `tag`, or close it if it is already the innermost open tag, then
    /// write `text`.
    ///
    /// `tag` may be a [`Tag`], [`Color`], [`Style`] or a tag name/code string.
    /// There is no tag-less form: pushing no tag is the same as calling
    /// [`write`](Self::write) with `text`.
    ///
    /// ```
    /// use termfmt::{Color, FormatBuilder};
    ///
    /// let mut fmt = FormatBuilder::new();
    /// fmt.push(Color::Red, "a")?.push("bold", "b")?;
    /// fmt.write("no new tag");
    /// assert_eq!(fmt.depth(), 2);
    /// # Ok::<(), termfmt::FormatError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`FormatError::InvalidTag`] when a string names no tag. The builder is
    /// left untouched in that case.
    pub fn push<'a, T>(&mut self, tag: T, text: impl Into<Content<'a>>) -> Result<&mut Self>
    where
        T: TryInto<Tag>,
        FormatError: From<T::Error>,
    {
        let tag = tag.try_into()?;
        self.toggle(tag, text)
    }

    /// Close the innermost open tag, then write `text`.
    ///
    /// Closing the background marker also closes the color beneath it. The
    /// terminal is reset and every tag still open is written again, unless
    /// nothing was written since the closed codes, in which case those codes
    /// are simply dropped.
    ///
    /// # Errors
    ///
    /// [`FormatError::UnbalancedPop`] when no tag is open.
    pub fn pop<'a>(&mut self, text: impl Into<Content<'a>>) -> Result<&mut Self> {
        let Some(last) = self.stack.pop() else {
            debug!("pop on an empty format stack");
            return Err(FormatError::UnbalancedPop);
        };

        let mut mark = last.mark;
        let mut closed = last.tag.code().len();
        if last.tag.is_background()
            && let Some(color) = self.stack.pop()
        {
            mark = color.mark;
            closed += color.tag.code().len();
        }

        if self.buffer.len() == mark + closed {
            trace!("dropping empty span at offset {}", mark);
            self.buffer.truncate(mark);
        } else {
            self.buffer.push_str(TERMINATOR);
            self.replay();
        }

        Ok(self.write(text))
    }

    /// Open a foreground color, then write `text`.
    ///
    /// Painting without a color is [`write`](Self::write); no validation runs then.
    ///
    /// # Errors
    ///
    /// [`FormatError::InvalidColor`] when a string names no color.
    pub fn paint<'a, C>(&mut self, color: C, text: impl Into<Content<'a>>) -> Result<&mut Self>
    where
        C: TryInto<Color>,
        FormatError: From<C::Error>,
    {
        let color = color.try_into()?;
        self.toggle(Tag::Color(color), text)
    }

    /// Open a text style, then write `text`.
    ///
    /// # Errors
    ///
    /// [`FormatError::InvalidStyle`] when a string names no style.
    pub fn style<'a, S>(&mut self, style: S, text: impl Into<Content<'a>>) -> Result<&mut Self>
    where
        S: TryInto<Style>,
        FormatError: From<S::Error>,
    {
        let style = style.try_into()?;
        self.toggle(Tag::Style(style), text)
    }

    /// Open `color` with the background marker on top of it, then write `text`.
    ///
    /// Both entries are always opened, even when the same color or the same
    /// background pair is innermost; a single [`pop`](Self::pop) closes the pair.
    ///
    /// # Errors
    ///
    /// [`FormatError::InvalidColor`] when a string names no color.
    pub fn background<'a, C>(&mut self, color: C, text: impl Into<Content<'a>>) -> Result<&mut Self>
    where
        C: TryInto<Color>,
        FormatError: From<C::Error>,
    {
        let color = color.try_into()?;
        self.open(Tag::Color(color));
        self.open(Tag::Style(Style::Background));
        Ok(self.write(text))
    }

    /// Append `text`.
    ///
    /// Every terminator in plain text is followed by the codes of the tags
    /// open here, so they keep applying after it. The output of another
    /// builder gets the same treatment and is then closed off with a reset
    /// and one more replay, so its own open tags end with it.
    pub fn write<'a>(&mut self, text: impl Into<Content<'a>>) -> &mut Self {
        match text.into() {
            Content::Plain(text) => {
                if text.contains(TERMINATOR) {
                    let resume = self.resume_sequence();
                    self.buffer.push_str(&text.replace(TERMINATOR, &resume));
                } else {
                    self.buffer.push_str(text);
                }
                self
            }
            Content::Builder(other) => {
                trace!(
                    "merging builder output ({} bytes) under {} open tags",
                    other.buffer.len(),
                    self.stack.len()
                );
                let resume = self.resume_sequence();
                self.buffer
                    .push_str(&other.buffer.replace(TERMINATOR, &resume));
                self.buffer.push_str(&resume);
                self
            }
        }
    }

    /// Append the terminator, then write `text`.
    ///
    /// The stack is left as is: open tags are still tracked but no longer
    /// applied until something replays them.
    pub fn end<'a>(&mut self, text: impl Into<Content<'a>>) -> &mut Self {
        self.buffer.push_str(TERMINATOR);
        self.write(text)
    }

    /// Discard the written text but keep the open tags, writing their codes
    /// again before `text`.
    ///
    /// # Errors
    ///
    /// [`FormatError::InvalidTag`] if an open tag no longer matches the tag
    /// tables. Nothing is discarded in that case.
    pub fn erase<'a>(&mut self, text: impl Into<Content<'a>>) -> Result<&mut Self> {
        for entry in &self.stack {
            check_tag(entry.tag.code())?;
        }
        self.buffer.clear();
        self.replay();
        Ok(self.write(text))
    }

    /// Forget every open tag and [`end`](Self::end) with `text`.
    pub fn reset<'a>(&mut self, text: impl Into<Content<'a>>) -> &mut Self {
        self.stack.clear();
        self.end(text)
    }

    /// Empty both the buffer and the stack.
    pub fn clear(&mut self) -> &mut Self {
        self.buffer.clear();
        self.stack.clear();
        self
    }

    /// The written text followed by a terminator.
    ///
    /// The terminator is only left out when the text already ends with one
    /// and no tag is open, so the result never leaves formatting active.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.buffer.len() + TERMINATOR.len());
        out.push_str(&self.buffer);
        if !(self.stack.is_empty() && self.buffer.ends_with(TERMINATOR)) {
            out.push_str(TERMINATOR);
        }
        out
    }

    /// [`render`](Self::render), with every escape code removed when `mode`
    /// disables color.
    pub fn render_with(&self, mode: ColorMode) -> String {
        let rendered = self.render();
        if mode.is_enabled() {
            rendered
        } else {
            strip_ansi(&rendered).into_owned()
        }
    }

    /// The written text as is, without a trailing terminator.
    pub fn string(&self) -> &str {
        &self.buffer
    }

    /// Write the rendered text and a newline to `writer`, honoring the
    /// builder's color mode.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", self.render_with(self.color_mode))
    }

    /// Print the rendered text to stdout, honoring the builder's color mode.
    pub fn print(&self) {
        println!("{}", self.render_with(self.color_mode));
    }

    pub fn black<'a>(&mut self, text: impl Into<Content<'a>>) -> Result<&mut Self> {
        self.paint(Color::Black, text)
    }

    pub fn red<'a>(&mut self, text: impl Into<Content<'a>>) -> Result<&mut Self> {
        self.paint(Color::Red, text)
    }

    pub fn green<'a>(&mut self, text: impl Into<Content<'a>>) -> Result<&mut Self> {
        self.paint(Color::Green, text)
    }

    pub fn yellow<'a>(&mut self, text: impl Into<Content<'a>>) -> Result<&mut Self> {
        self.paint(Color::Yellow, text)
    }

    pub fn blue<'a>(&mut self, text: impl Into<Content<'a>>) -> Result<&mut Self> {
        self.paint(Color::Blue, text)
    }

    pub fn magenta<'a>(&mut self, text: impl Into<Content<'a>>) -> Result<&mut Self> {
        self.paint(Color::Magenta, text)
    }

    pub fn cyan<'a>(&mut self, text: impl Into<Content<'a>>) -> Result<&mut Self> {
        self.paint(Color::Cyan, text)
    }

    pub fn white<'a>(&mut self, text: impl Into<Content<'a>>) -> Result<&mut Self> {
        self.paint(Color::White, text)
    }

    pub fn blink<'a>(&mut self, text: impl Into<Content<'a>>) -> Result<&mut Self> {
        self.style(Style::Blink, text)
    }

    pub fn bold<'a>(&mut self, text: impl Into<Content<'a>>) -> Result<&mut Self> {
        self.style(Style::Bold, text)
    }

    /// Dim text (low intensity)
    pub fn faded<'a>(&mut self, text: impl Into<Content<'a>>) -> Result<&mut Self> {
        self.style(Style::Faded, text)
    }

    pub fn italic<'a>(&mut self, text: impl Into<Content<'a>>) -> Result<&mut Self> {
        self.style(Style::Italic, text)
    }

    pub fn strike<'a>(&mut self, text: impl Into<Content<'a>>) -> Result<&mut Self> {
        self.style(Style::Strike, text)
    }

    pub fn underline<'a>(&mut self, text: impl Into<Content<'a>>) -> Result<&mut Self> {
        self.style(Style::Underline, text)
    }

    fn toggle<'a>(&mut self, tag: Tag, text: impl Into<Content<'a>>) -> Result<&mut Self> {
        if self.stack.last().is_some_and(|entry| entry.tag == tag) {
            trace!("toggling off {}", tag.name());
            return self.pop(text);
        }
        self.open(tag);
        Ok(self.write(text))
    }

    fn open(&mut self, tag: Tag) {
        self.stack.push(Entry {
            tag,
            mark: self.buffer.len(),
        });
        self.buffer.push_str(tag.code());
    }

    /// Write the code of every open tag again, moving their marks to the new codes.
    fn replay(&mut self) {
        for entry in &mut self.stack {
            entry.mark = self.buffer.len();
            self.buffer.push_str(entry.tag.code());
        }
    }

    /// Terminator followed by the codes of every open tag.
    fn resume_sequence(&self) -> String {
        self.stack
            .iter()
            .fold(String::from(TERMINATOR), |mut acc, entry| {
                acc.push_str(entry.tag.code());
                acc
            })
    }
}

impl From<&str> for FormatBuilder {
    fn from(text: &str) -> Self {
        Self::with_text(text)
    }
}

impl fmt::Display for FormatBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: &str = "\x1b[91m";
    const BOLD: &str = "\x1b[1m";
    const REVERSE: &str = "\x1b[7m";

    #[test]
    fn test_open_records_marks() {
        let mut fmt = FormatBuilder::new();
        fmt.write("ab");
        fmt.open(Tag::Color(Color::Red));
        assert_eq!(fmt.stack[0].mark, 2);
        assert_eq!(fmt.buffer, format!("ab{RED}"));
    }

    #[test]
    fn test_replay_moves_marks() {
        let mut fmt = FormatBuilder::new();
        fmt.open(Tag::Color(Color::Red));
        fmt.write("x");
        fmt.buffer.push_str(TERMINATOR);
        fmt.replay();
        assert_eq!(fmt.stack[0].mark, RED.len() + 1 + TERMINATOR.len());
        assert_eq!(fmt.buffer, format!("{RED}x{TERMINATOR}{RED}"));
    }

    #[test]
    fn test_resume_sequence() {
        let mut fmt = FormatBuilder::new();
        assert_eq!(fmt.resume_sequence(), TERMINATOR);
        fmt.open(Tag::Color(Color::Red));
        fmt.open(Tag::Style(Style::Bold));
        assert_eq!(fmt.resume_sequence(), format!("{TERMINATOR}{RED}{BOLD}"));
    }

    #[test]
    fn test_background_pair_dropped_when_empty() {
        let mut fmt = FormatBuilder::new();
        fmt.write("a");
        fmt.background(Color::Red, "").unwrap();
        assert_eq!(fmt.buffer, format!("a{RED}{REVERSE}"));
        fmt.pop("").unwrap();
        assert_eq!(fmt.buffer, "a");
        assert!(fmt.stack.is_empty());
    }

    #[test]
    fn test_pop_after_text_resets_and_replays() {
        let mut fmt = FormatBuilder::new();
        fmt.red("a").unwrap().bold("b").unwrap().pop("c").unwrap();
        assert_eq!(
            fmt.buffer,
            format!("{RED}a{BOLD}b{TERMINATOR}{RED}c")
        );
    }
}
