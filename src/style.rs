//! Table presentation styles.
//!
//! [`TableStyle`] is the configuration value; [`TableStyle::renderer`] maps it
//! to a static [`Style`] implementation. Styles never hold per-render state:
//! everything derived from the final column widths lives in a
//! [`RenderContext`] built once per draw.
//!
//! | Style | Header | Row separators | Footer |
//! |-------|--------|----------------|--------|
//! | `plain` | header lines only | no | no |
//! | `box` | `┌┬┐` rule, header, `├┼┤` rule | `├┼┤` | `└┴┘` |
//! | `markdown` | header, `\|---\|` rule | no | no |
//! | `rst-grid` | `+-+` rule, header, `+-+` rule | `+-+` | `+-+` |

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::r#box::{BoxChars, MARKDOWN, PLAIN, RST_GRID, SQUARE};

/// Rendering strategy for one table format.
///
/// Widths passed to a style are cell widths: column width plus both
/// horizontal margins. Every line a style produces for one set of widths has
/// the same length.
pub trait Style: Sync {
    /// Glyph set used for rules and content lines.
    fn chars(&self) -> &'static BoxChars;

    /// Whether a separator is drawn between data rows.
    fn has_separator(&self) -> bool {
        false
    }

    /// Whether a closing line is drawn after the last row.
    fn has_footer(&self) -> bool {
        false
    }

    /// Build the header block from the header's already padded sub-rows.
    ///
    /// `no_rows` is set when no data row follows, so a rule that would only
    /// separate the header from the body can be left out.
    fn header_lines(
        &self,
        _ctx: &RenderContext,
        sub_rows: &[Vec<String>],
        _no_rows: bool,
    ) -> Vec<String> {
        sub_rows.iter().map(|cells| self.draw_line(cells)).collect()
    }

    /// Join one sub-row of padded cells into a line.
    fn draw_line(&self, cells: &[String]) -> String {
        self.chars().join_cells(cells)
    }

    /// Separator line between data rows, if the style has one.
    fn separator(&self, cell_widths: &[usize]) -> Option<String> {
        self.has_separator()
            .then(|| self.chars().get_row(cell_widths))
    }

    /// Closing line, if the style has one.
    fn footer(&self, cell_widths: &[usize]) -> Option<String> {
        self.has_footer()
            .then(|| self.chars().get_bottom(cell_widths))
    }

    /// Blank line shaped like a data row, used for vertical margins.
    fn blank_line(&self, cell_widths: &[usize]) -> String {
        self.chars().blank_row(cell_widths)
    }
}

/// No borders, no separators, no footer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl Style for PlainStyle {
    fn chars(&self) -> &'static BoxChars {
        &PLAIN
    }
}

/// Unicode box-drawing borders with a rule between every row.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxStyle;

impl Style for BoxStyle {
    fn chars(&self) -> &'static BoxChars {
        &SQUARE
    }

    fn has_separator(&self) -> bool {
        true
    }

    fn has_footer(&self) -> bool {
        true
    }

    /// ```text
    /// ┌─────┬─────┐
    /// │ a   │ b   │
    /// ├─────┼─────┤
    /// ```
    fn header_lines(
        &self,
        ctx: &RenderContext,
        sub_rows: &[Vec<String>],
        no_rows: bool,
    ) -> Vec<String> {
        let chars = self.chars();
        let mut lines = Vec::with_capacity(sub_rows.len() + 2);
        lines.push(chars.get_top(ctx.cell_widths()));
        lines.extend(sub_rows.iter().map(|cells| self.draw_line(cells)));
        if !no_rows {
            lines.push(chars.get_head_row(ctx.cell_widths()));
        }
        lines
    }
}

/// Markdown pipe table.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownStyle;

impl Style for MarkdownStyle {
    fn chars(&self) -> &'static BoxChars {
        &MARKDOWN
    }

    /// ```text
    /// | a   | b   |
    /// |-----|-----|
    /// ```
    ///
    /// The dash rule is part of the table syntax, so it is kept even when
    /// there are no rows.
    fn header_lines(
        &self,
        ctx: &RenderContext,
        sub_rows: &[Vec<String>],
        _no_rows: bool,
    ) -> Vec<String> {
        let mut lines: Vec<String> = sub_rows.iter().map(|cells| self.draw_line(cells)).collect();
        lines.push(self.chars().get_head_row(ctx.cell_widths()));
        lines
    }
}

/// reStructuredText grid table.
#[derive(Debug, Clone, Copy, Default)]
pub struct RstGridStyle;

impl Style for RstGridStyle {
    fn chars(&self) -> &'static BoxChars {
        &RST_GRID
    }

    fn has_separator(&self) -> bool {
        true
    }

    fn has_footer(&self) -> bool {
        true
    }

    /// ```text
    /// +-----+-----+
    /// | a   | b   |
    /// +-----+-----+
    /// ```
    fn header_lines(
        &self,
        ctx: &RenderContext,
        sub_rows: &[Vec<String>],
        no_rows: bool,
    ) -> Vec<String> {
        let chars = self.chars();
        let mut lines = Vec::with_capacity(sub_rows.len() + 2);
        lines.push(chars.get_top(ctx.cell_widths()));
        lines.extend(sub_rows.iter().map(|cells| self.draw_line(cells)));
        if !no_rows {
            lines.push(chars.get_head_row(ctx.cell_widths()));
        }
        lines
    }
}

/// Table style selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// Borderless columns.
    Plain,
    /// Unicode box drawing.
    #[default]
    Box,
    /// Markdown pipe table.
    Markdown,
    /// reStructuredText grid table.
    RstGrid,
}

impl TableStyle {
    /// Every style, in documentation order.
    pub const ALL: [Self; 4] = [Self::Plain, Self::Box, Self::Markdown, Self::RstGrid];

    /// Configuration name of this style.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Box => "box",
            Self::Markdown => "markdown",
            Self::RstGrid => "rst-grid",
        }
    }

    /// The rendering strategy for this style.
    #[must_use]
    pub fn renderer(self) -> &'static dyn Style {
        match self {
            Self::Plain => &PlainStyle,
            Self::Box => &BoxStyle,
            Self::Markdown => &MarkdownStyle,
            Self::RstGrid => &RstGridStyle,
        }
    }
}

impl fmt::Display for TableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "base" => Ok(Self::Plain),
            "box" => Ok(Self::Box),
            "markdown" | "md" => Ok(Self::Markdown),
            "rst-grid" | "rst_grid" | "rst" => Ok(Self::RstGrid),
            _ => Err(ParseError::UnknownStyle(s.to_string())),
        }
    }
}

/// Lines derived from the final column widths of one render.
///
/// Built after column widths are fixed and before any line is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    cell_widths: Vec<usize>,
    separator: Option<String>,
    footer: Option<String>,
    blank: String,
}

impl RenderContext {
    /// Precompute the separator, footer and blank line for `cell_widths`.
    #[must_use]
    pub fn new(style: &dyn Style, cell_widths: Vec<usize>) -> Self {
        Self {
            separator: style.separator(&cell_widths),
            footer: style.footer(&cell_widths),
            blank: style.blank_line(&cell_widths),
            cell_widths,
        }
    }

    /// Cell widths, column width plus margins, per column.
    #[must_use]
    pub fn cell_widths(&self) -> &[usize] {
        &self.cell_widths
    }

    /// Separator between data rows.
    #[must_use]
    pub fn separator(&self) -> Option<&str> {
        self.separator.as_deref()
    }

    /// Closing line.
    #[must_use]
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    /// Blank vertical-margin line.
    #[must_use]
    pub fn blank(&self) -> &str {
        &self.blank
    }
}
