//! Per-cell text helpers: length, splitting, truncation and alignment.
//!
//! All widths in this module are counted in code points, not terminal
//! columns. Wide (CJK, emoji) characters therefore occupy one unit of column
//! width while drawing two cells on screen; [`has_wide_chars`] lets callers
//! detect that case.

use std::fmt;
use std::str::FromStr;

use unicode_width::UnicodeWidthChar;

use crate::error::ParseError;

/// Marker that replaces the last visible character of a truncated cell.
pub const ELLIPSIS: char = '\u{2026}';

/// Horizontal alignment of a cell's text inside its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad on the left.
    Right,
    /// Pad both sides, the extra space going to the right.
    Center,
}

impl Align {
    /// Configuration name of this alignment.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Align {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" => Ok(Self::Center),
            _ => Err(ParseError::UnknownAlign(s.to_string())),
        }
    }
}

/// Number of code points in a string.
#[inline]
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Split text on embedded line breaks.
///
/// Unlike [`str::lines`] a trailing newline yields a final empty line, so
/// blank lines are kept as written. A `\r` before the break is dropped.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Split a string after `count` code points.
#[must_use]
pub fn chop_chars(text: &str, count: usize) -> (&str, &str) {
    match text.char_indices().nth(count) {
        Some((byte_pos, _)) => text.split_at(byte_pos),
        None => (text, ""),
    }
}

/// Break one cell's text into physical lines of at most `width` code points.
///
/// Each embedded line is chunked independently into consecutive slices of
/// exactly `width` code points, the last slice possibly shorter. An empty
/// line yields one empty physical line. A `width` of zero is treated as one.
#[must_use]
pub fn split_cell(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for segment in split_lines(text) {
        if segment.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut rest = segment;
        while !rest.is_empty() {
            let (chunk, tail) = chop_chars(rest, width);
            lines.push(chunk.to_string());
            rest = tail;
        }
    }

    lines
}

/// Truncate a single line to `width` code points.
///
/// A line longer than `width` keeps its first `width - 1` code points and ends
/// with [`ELLIPSIS`], so the result is exactly `width` long.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if char_len(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let (kept, _) = chop_chars(text, width - 1);
    let mut result = String::with_capacity(kept.len() + ELLIPSIS.len_utf8());
    result.push_str(kept);
    result.push(ELLIPSIS);
    result
}

/// Reduce a cell to one physical line of at most `width` code points.
///
/// Only the first embedded line is kept. When later lines are dropped the
/// result ends with [`ELLIPSIS`] even if the first line would fit on its own.
#[must_use]
pub fn fit_line(text: &str, width: usize) -> String {
    let mut lines = split_lines(text);
    let first = lines.next().unwrap_or("");

    if lines.next().is_none() {
        return truncate(first, width);
    }

    let mut marked = first.to_string();
    marked.push(ELLIPSIS);
    truncate(&marked, width)
}

/// Pad a line with spaces to `width` code points using `align`.
///
/// Lines already at or beyond `width` are returned unchanged.
#[must_use]
pub fn pad(text: &str, width: usize, align: Align) -> String {
    let len = char_len(text);
    if len >= width {
        return text.to_string();
    }

    let space = width - len;
    let (left, right) = match align {
        Align::Left => (0, space),
        Align::Right => (space, 0),
        Align::Center => (space / 2, space - space / 2),
    };

    let mut result = String::with_capacity(text.len() + space);
    result.extend(std::iter::repeat_n(' ', left));
    result.push_str(text);
    result.extend(std::iter::repeat_n(' ', right));
    result
}

/// Get the terminal cell width of a single character.
///
/// Most characters are 1 cell wide, but CJK characters and some emoji
/// are 2 cells wide. Control characters have 0 width.
#[must_use]
pub fn get_character_cell_size(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Check if a string contains any wide (2-cell) characters.
#[must_use]
pub fn has_wide_chars(text: &str) -> bool {
    text.chars().any(|c| get_character_cell_size(c) > 1)
}
