//! Border glyph sets for the table styles.
//!
//! Each style is described by a [`BoxChars`]: one glyph row per [`RowLevel`]
//! for horizontal rules, plus the glyphs that frame a content line. Glyphs are
//! strings rather than chars so a borderless style can use `""`.

/// Row level for rule drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLevel {
    /// Top of the table.
    Top,
    /// Rule below the header.
    HeadRow,
    /// Rule between data rows.
    Row,
    /// Bottom of the table.
    Bottom,
}

/// Border glyph set.
///
/// Each row is 4 glyphs: [left, fill, cross, right]
/// - left: leftmost edge
/// - fill: repeated once per character of cell width
/// - cross: joint between two cells
/// - right: rightmost edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxChars {
    /// Top rule: ┌─┬┐
    pub top: [&'static str; 4],
    /// Content line: │ ││
    pub cell: [&'static str; 4],
    /// Header rule: ├─┼┤
    pub head_row: [&'static str; 4],
    /// Row separator: ├─┼┤
    pub row: [&'static str; 4],
    /// Bottom rule: └─┴┘
    pub bottom: [&'static str; 4],
}

impl BoxChars {
    /// Create a new glyph set from glyph rows.
    #[must_use]
    pub const fn new(
        top: [&'static str; 4],
        cell: [&'static str; 4],
        head_row: [&'static str; 4],
        row: [&'static str; 4],
        bottom: [&'static str; 4],
    ) -> Self {
        Self {
            top,
            cell,
            head_row,
            row,
            bottom,
        }
    }

    /// Get the glyph row for a specific level.
    #[must_use]
    pub fn get_row_chars(&self, level: RowLevel) -> &[&'static str; 4] {
        match level {
            RowLevel::Top => &self.top,
            RowLevel::HeadRow => &self.head_row,
            RowLevel::Row => &self.row,
            RowLevel::Bottom => &self.bottom,
        }
    }

    /// Build a rule for the given cell widths.
    #[must_use]
    pub fn build_row(&self, widths: &[usize], level: RowLevel) -> String {
        let [left, fill, cross, right] = *self.get_row_chars(level);

        let mut result = String::new();
        result.push_str(left);

        for (i, &width) in widths.iter().enumerate() {
            if i > 0 {
                result.push_str(cross);
            }
            result.push_str(&fill.repeat(width));
        }

        result.push_str(right);
        result
    }

    /// Join already padded cells into one content line.
    #[must_use]
    pub fn join_cells<S: AsRef<str>>(&self, cells: &[S]) -> String {
        let [left, _, divider, right] = self.cell;

        let mut result = String::new();
        result.push_str(left);

        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                result.push_str(divider);
            }
            result.push_str(cell.as_ref());
        }

        result.push_str(right);
        result
    }

    /// Build a content line with every cell blank.
    #[must_use]
    pub fn blank_row(&self, widths: &[usize]) -> String {
        let blanks: Vec<String> = widths.iter().map(|&w| self.cell[1].repeat(w)).collect();
        self.join_cells(&blanks)
    }

    /// Build the top border.
    #[must_use]
    pub fn get_top(&self, widths: &[usize]) -> String {
        self.build_row(widths, RowLevel::Top)
    }

    /// Build the bottom border.
    #[must_use]
    pub fn get_bottom(&self, widths: &[usize]) -> String {
        self.build_row(widths, RowLevel::Bottom)
    }

    /// Build the header rule.
    #[must_use]
    pub fn get_head_row(&self, widths: &[usize]) -> String {
        self.build_row(widths, RowLevel::HeadRow)
    }

    /// Build a row separator.
    #[must_use]
    pub fn get_row(&self, widths: &[usize]) -> String {
        self.build_row(widths, RowLevel::Row)
    }
}

// ============================================================================
// Built-in glyph sets
// ============================================================================

/// No borders at all.
pub const PLAIN: BoxChars = BoxChars::new(
    ["", "", "", ""],
    ["", " ", "", ""],
    ["", "", "", ""],
    ["", "", "", ""],
    ["", "", "", ""],
);

/// Unicode square/single line box.
pub const SQUARE: BoxChars = BoxChars::new(
    ["\u{250C}", "\u{2500}", "\u{252C}", "\u{2510}"], // ┌─┬┐
    ["\u{2502}", " ", "\u{2502}", "\u{2502}"],        // │ ││
    ["\u{251C}", "\u{2500}", "\u{253C}", "\u{2524}"], // ├─┼┤
    ["\u{251C}", "\u{2500}", "\u{253C}", "\u{2524}"], // ├─┼┤
    ["\u{2514}", "\u{2500}", "\u{2534}", "\u{2518}"], // └─┴┘
);

/// Markdown pipe table.
pub const MARKDOWN: BoxChars = BoxChars::new(
    ["", "", "", ""],
    ["|", " ", "|", "|"],
    ["|", "-", "|", "|"],
    ["", "", "", ""],
    ["", "", "", ""],
);

/// reStructuredText grid table.
pub const RST_GRID: BoxChars = BoxChars::new(
    ["+", "-", "+", "+"],
    ["|", " ", "|", "|"],
    ["+", "-", "+", "+"],
    ["+", "-", "+", "+"],
    ["+", "-", "+", "+"],
);
