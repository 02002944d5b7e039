//! Table - fixed-width layout of rows of text cells.
//!
//! A [`Table`] is a reusable render configuration. Each call to
//! [`Table::draw`] buffers the whole input, fixes the column widths, then
//! streams the finished lines to a [`LineSink`] one at a time.
//!
//! - Column widths are the longest data cell, line breaks included, capped
//!   at `max_col_width`, then widened to fit the header (headers are never
//!   capped)
//! - Cells longer than `max_col_width` or containing line breaks wrap into
//!   several sub-rows, or are cut with an ellipsis when wrapping is off
//! - Horizontal and vertical margins, left/right/center alignment
//! - Optional auto-generated header (`A`, `B`, ... `Z`, `A0`, `B0`, ...) and
//!   row numbers
//!
//! # Examples
//!
//! ```
//! use drawtable::prelude::*;
//!
//! let mut table = Table::new().table_style(TableStyle::Box);
//! let lines = table
//!     .render_lines([vec!["name", "qty"], vec!["apple", "3"]])
//!     .unwrap();
//!
//! assert_eq!(
//!     lines,
//!     vec![
//!         "┌───────┬─────┐",
//!         "│ name  │ qty │",
//!         "├───────┼─────┤",
//!         "│ apple │ 3   │",
//!         "└───────┴─────┘",
//!     ]
//! );
//! ```
//!
//! ## Streaming to stdout
//!
//! ```no_run
//! use drawtable::prelude::*;
//! use std::io;
//!
//! let rows = vec![vec!["a", "b"], vec!["1", "2"]];
//! let mut sink = WriteSink::new(io::stdout().lock());
//! Table::new().draw(rows, &mut sink).unwrap();
//! ```

use crate::cells::{self, Align};
use crate::error::DrawError;
use crate::row::IntoRow;
use crate::sink::LineSink;
use crate::style::{RenderContext, Style, TableStyle};

/// Width of the row number field, not counting its trailing space.
pub const ROW_NUMBER_WIDTH: usize = 7;

const HEADER_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Spreadsheet-style column labels: `A` .. `Z`, then `A0` .. `Z0`, `A1` ...
#[must_use]
pub fn auto_header_labels(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let letter = char::from(HEADER_LETTERS[i % HEADER_LETTERS.len()]);
            if i < HEADER_LETTERS.len() {
                letter.to_string()
            } else {
                format!("{letter}{}", i / HEADER_LETTERS.len() - 1)
            }
        })
        .collect()
}

/// Outcome of the last successful [`Table::draw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawResult {
    /// Data rows rendered, header excluded.
    pub row_count: usize,
    /// Lines handed to the sink.
    pub lines_written: usize,
}

/// Input after the buffering pass.
struct Buffered {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

/// Wraps the sink to count lines and add row number fields.
struct Emitter<'a, S: LineSink + ?Sized> {
    sink: &'a mut S,
    row_numbers: bool,
    lines_written: usize,
}

impl<S: LineSink + ?Sized> Emitter<'_, S> {
    fn line(&mut self, line: &str) -> Result<(), DrawError> {
        if self.row_numbers {
            let prefixed = format!("{:width$}{line}", "", width = ROW_NUMBER_WIDTH + 1);
            self.write(&prefixed)
        } else {
            self.write(line)
        }
    }

    fn numbered(&mut self, line: &str, row_num: usize) -> Result<(), DrawError> {
        if self.row_numbers {
            let prefixed = format!("{row_num:>width$} {line}", width = ROW_NUMBER_WIDTH);
            self.write(&prefixed)
        } else {
            self.write(line)
        }
    }

    fn write(&mut self, line: &str) -> Result<(), DrawError> {
        self.sink
            .write_line(line)
            .map_err(|source| DrawError::Sink {
                lines_written: self.lines_written,
                source,
            })?;
        self.lines_written += 1;
        Ok(())
    }
}

/// Fixed-width table renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Spaces on each side of a cell's text.
    margin_x: usize,
    /// Blank lines above and below each data row.
    margin_y: usize,
    /// Alignment of cell text inside its column.
    align: Align,
    /// Wrap/truncate threshold for data cells.
    max_col_width: usize,
    /// Presentation style.
    table_style: TableStyle,
    /// Synthesize the header instead of reading the first row.
    auto_header: bool,
    /// Prefix lines with a row number field.
    row_numbers: bool,
    /// Wrap long cells into sub-rows instead of truncating.
    wrap_row: bool,
    /// Result of the last draw.
    draw_result: Option<DrawResult>,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            margin_x: 1,
            margin_y: 0,
            align: Align::Left,
            max_col_width: 16,
            table_style: TableStyle::Box,
            auto_header: false,
            row_numbers: false,
            wrap_row: true,
            draw_result: None,
        }
    }
}

impl Table {
    /// Create a table with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the horizontal margin.
    #[must_use]
    pub fn margin_x(mut self, margin: usize) -> Self {
        self.margin_x = margin;
        self
    }

    /// Set the vertical margin.
    #[must_use]
    pub fn margin_y(mut self, margin: usize) -> Self {
        self.margin_y = margin;
        self
    }

    /// Set cell alignment.
    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set the maximum column width. Zero is treated as one.
    #[must_use]
    pub fn max_col_width(mut self, width: usize) -> Self {
        self.max_col_width = width.max(1);
        self
    }

    /// Set the presentation style.
    #[must_use]
    pub fn table_style(mut self, style: TableStyle) -> Self {
        self.table_style = style;
        self
    }

    /// Generate the header instead of reading it from the first row.
    #[must_use]
    pub fn auto_header(mut self, auto: bool) -> Self {
        self.auto_header = auto;
        self
    }

    /// Show row numbers.
    #[must_use]
    pub fn row_numbers(mut self, show: bool) -> Self {
        self.row_numbers = show;
        self
    }

    /// Wrap long cells (`true`) or truncate them with an ellipsis (`false`).
    #[must_use]
    pub fn wrap_row(mut self, wrap: bool) -> Self {
        self.wrap_row = wrap;
        self
    }

    /// Result of the last successful draw, if any.
    #[must_use]
    pub fn draw_result(&self) -> Option<DrawResult> {
        self.draw_result
    }

    /// Render `rows` and send each line to `sink`.
    ///
    /// The input is fully buffered before the first line is written. The
    /// first row is the header unless auto-header mode is on.
    ///
    /// # Errors
    ///
    /// [`DrawError::InvalidRowType`] if a row cannot be read as text cells,
    /// and [`DrawError::Sink`] if the sink rejects a line. Either error ends
    /// the render; lines already written stay written.
    pub fn draw<I, S>(&mut self, rows: I, sink: &mut S) -> Result<DrawResult, DrawError>
    where
        I: IntoIterator,
        I::Item: IntoRow,
        S: LineSink + ?Sized,
    {
        self.draw_result = None;

        let data = self.buffer_rows(rows)?;
        let style = self.table_style.renderer();
        let cell_widths: Vec<usize> = data
            .col_widths
            .iter()
            .map(|&w| w + self.margin_x * 2)
            .collect();
        let ctx = RenderContext::new(style, cell_widths);

        log::debug!(
            "drawing {} rows as {} with column widths {:?}",
            data.rows.len(),
            self.table_style,
            data.col_widths
        );

        let mut out = Emitter {
            sink,
            row_numbers: self.row_numbers,
            lines_written: 0,
        };

        // the column already fits the header, so it only wraps in wrap mode
        let header_rows = if self.wrap_row {
            self.wrapped_sub_rows(&data.header, &data.col_widths)
        } else {
            self.stacked_sub_rows(&data.header, &data.col_widths, |text| {
                cells::split_lines(text).map(str::to_string).collect()
            })
        };
        for line in style.header_lines(&ctx, &header_rows, data.rows.is_empty()) {
            out.line(&line)?;
        }

        let row_count = data.rows.len();
        for (index, row) in data.rows.iter().enumerate() {
            let row_num = index + 1;
            let sub_rows = if self.wrap_row {
                self.wrapped_sub_rows(row, &data.col_widths)
            } else {
                vec![self.truncated_sub_row(row, &data.col_widths)]
            };
            log::trace!("row {row_num}: {} lines", sub_rows.len());

            self.draw_row(style, &ctx, &sub_rows, row_num, &mut out)?;

            if row_num != row_count
                && let Some(separator) = ctx.separator()
            {
                out.line(separator)?;
            }
        }

        if let Some(footer) = ctx.footer() {
            out.line(footer)?;
        }

        let result = DrawResult {
            row_count,
            lines_written: out.lines_written,
        };
        self.draw_result = Some(result);
        Ok(result)
    }

    /// Render into a vector of lines.
    ///
    /// # Errors
    ///
    /// [`DrawError::InvalidRowType`] if a row cannot be read as text cells.
    pub fn render_lines<I>(&mut self, rows: I) -> Result<Vec<String>, DrawError>
    where
        I: IntoIterator,
        I::Item: IntoRow,
    {
        let mut lines = Vec::new();
        self.draw(rows, &mut lines)?;
        Ok(lines)
    }

    /// Render to a string, each line terminated by `\n`.
    ///
    /// # Errors
    ///
    /// [`DrawError::InvalidRowType`] if a row cannot be read as text cells.
    pub fn render_plain<I>(&mut self, rows: I) -> Result<String, DrawError>
    where
        I: IntoIterator,
        I::Item: IntoRow,
    {
        let mut output = String::new();
        for line in self.render_lines(rows)? {
            output.push_str(&line);
            output.push('\n');
        }
        Ok(output)
    }

    /// Read every row, split off the header and measure the columns.
    fn buffer_rows<I>(&self, rows: I) -> Result<Buffered, DrawError>
    where
        I: IntoIterator,
        I::Item: IntoRow,
    {
        let mut header = None;
        let mut body = Vec::new();
        let mut data_widths: Vec<usize> = Vec::new();
        let mut saw_wide = false;

        for (index, item) in rows.into_iter().enumerate() {
            let row = item
                .into_row()
                .map_err(|reason| DrawError::InvalidRowType {
                    row: index + 1,
                    reason,
                })?;

            if index == 0 && !self.auto_header {
                header = Some(row);
                continue;
            }

            for (col, cell) in row.iter().enumerate() {
                let len = cells::char_len(cell);
                match data_widths.get_mut(col) {
                    Some(width) => *width = (*width).max(len),
                    None => data_widths.push(len),
                }
                saw_wide = saw_wide || cells::has_wide_chars(cell);
            }
            body.push(row);
        }

        let header = header.unwrap_or_else(|| {
            if self.auto_header {
                auto_header_labels(data_widths.len())
            } else {
                Vec::new()
            }
        });

        if saw_wide || header.iter().any(|cell| cells::has_wide_chars(cell)) {
            log::debug!("input has wide characters; widths are counted in code points");
        }

        let num_cols = data_widths.len().max(header.len());
        let col_widths = (0..num_cols)
            .map(|col| {
                let data = data_widths
                    .get(col)
                    .map_or(0, |&w| w.min(self.max_col_width));
                let head = header.get(col).map_or(0, |cell| cells::char_len(cell));
                data.max(head)
            })
            .collect();

        Ok(Buffered {
            header,
            rows: body,
            col_widths,
        })
    }

    /// Emit one logical row with its vertical margins.
    fn draw_row<S: LineSink + ?Sized>(
        &self,
        style: &dyn Style,
        ctx: &RenderContext,
        sub_rows: &[Vec<String>],
        row_num: usize,
        out: &mut Emitter<'_, S>,
    ) -> Result<(), DrawError> {
        for _ in 0..self.margin_y {
            out.line(ctx.blank())?;
        }

        for (i, cells) in sub_rows.iter().enumerate() {
            let line = style.draw_line(cells);
            if i == 0 {
                out.numbered(&line, row_num)?;
            } else {
                out.line(&line)?;
            }
        }

        for _ in 0..self.margin_y {
            out.line(ctx.blank())?;
        }
        Ok(())
    }

    /// Split every cell of a row and stack the pieces into sub-rows.
    ///
    /// ```text
    /// row:      ["a very long line.", "short line", "a"]
    /// split:    ["a very l",  ["short li",  ["a"]
    ///            "ong line",   "ne"]
    ///            "."]
    /// sub-rows: ["a very l", "short li", "a"]
    ///           ["ong line", "ne",       ""]
    ///           [".",        "",         ""]
    /// ```
    fn wrapped_sub_rows(&self, row: &[String], col_widths: &[usize]) -> Vec<Vec<String>> {
        self.stacked_sub_rows(row, col_widths, |text| {
            cells::split_cell(text, self.max_col_width)
        })
    }

    /// Stack the physical lines `split` yields per cell into padded sub-rows.
    fn stacked_sub_rows<F>(
        &self,
        row: &[String],
        col_widths: &[usize],
        split: F,
    ) -> Vec<Vec<String>>
    where
        F: Fn(&str) -> Vec<String>,
    {
        let cells: Vec<Vec<String>> = (0..col_widths.len())
            .map(|col| split(row.get(col).map_or("", String::as_str)))
            .collect();
        let height = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);

        (0..height)
            .map(|line| {
                cells
                    .iter()
                    .zip(col_widths)
                    .map(|(pieces, &width)| {
                        let text = pieces.get(line).map_or("", String::as_str);
                        self.format_cell(text, width)
                    })
                    .collect()
            })
            .collect()
    }

    /// One sub-row with every cell cut to its column width.
    fn truncated_sub_row(&self, row: &[String], col_widths: &[usize]) -> Vec<String> {
        col_widths
            .iter()
            .enumerate()
            .map(|(col, &width)| {
                let text = row.get(col).map_or("", String::as_str);
                self.format_cell(&cells::fit_line(text, width), width)
            })
            .collect()
    }

    /// Pad a single line to the column width and add the horizontal margins.
    fn format_cell(&self, text: &str, width: usize) -> String {
        let margin = " ".repeat(self.margin_x);
        format!("{margin}{}{margin}", cells::pad(text, width, self.align))
    }
}
