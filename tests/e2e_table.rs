//! End-to-end tests for table rendering.
//!
//! Each scenario drives `Table::draw` through a public sink and checks the
//! exact lines, the draw result, or a layout property that must hold for
//! every style.
//!
//! Run with: RUST_LOG=drawtable=trace cargo test --test e2e_table -- --nocapture

mod common;

use std::io;

use common::{init_test_logging, line_widths, rows};
use drawtable::prelude::*;
use drawtable::sink;
use drawtable::table::{ROW_NUMBER_WIDTH, auto_header_labels};

// =============================================================================
// Scenario 1: Header and one row in a box
// =============================================================================

#[test]
fn e2e_box_header_and_one_row() {
    init_test_logging();
    let mut table = Table::new().max_col_width(10);
    let lines = table.render_lines(rows(&[&["a"], &["12"]])).unwrap();
    tracing::debug!(?lines, "rendered");

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "┌────┐");
    assert_eq!(lines[3], "│ 12 │");
    // margin_x * 2 + column width 2
    assert_eq!(lines[0].chars().count() - 2, 4);
}

// =============================================================================
// Scenario 2: Zero data rows
// =============================================================================

#[test]
fn e2e_zero_rows_every_style() {
    init_test_logging();
    let input = rows(&[&["x", "y"]]);
    let expected: [(TableStyle, &[&str]); 4] = [
        (TableStyle::Plain, &[" x  y "]),
        (TableStyle::Box, &["┌───┬───┐", "│ x │ y │", "└───┴───┘"]),
        (TableStyle::Markdown, &["| x | y |", "|---|---|"]),
        (TableStyle::RstGrid, &["+---+---+", "| x | y |", "+---+---+"]),
    ];

    for (style, want) in expected {
        let mut table = Table::new().table_style(style);
        let lines = table.render_lines(&input).unwrap();
        assert_eq!(lines, want, "{style}");
        assert_eq!(table.draw_result().map(|r| r.row_count), Some(0));
    }
}

// =============================================================================
// Scenario 3: Wrap and no-wrap on the same cell
// =============================================================================

#[test]
fn e2e_wrap_versus_truncate() {
    init_test_logging();
    let input = [["abcdefghij"]];

    let wrapped = Table::new()
        .auto_header(true)
        .max_col_width(4)
        .table_style(TableStyle::Markdown)
        .render_lines(input)
        .unwrap();
    assert_eq!(
        wrapped,
        vec!["| A    |", "|------|", "| abcd |", "| efgh |", "| ij   |"]
    );

    let truncated = Table::new()
        .auto_header(true)
        .max_col_width(4)
        .wrap_row(false)
        .table_style(TableStyle::Markdown)
        .render_lines(input)
        .unwrap();
    assert_eq!(truncated, vec!["| A    |", "|------|", "| abc… |"]);
}

// =============================================================================
// Scenario 4: Row numbers
// =============================================================================

#[test]
fn e2e_row_number_prefixes() {
    init_test_logging();
    let mut table = Table::new()
        .row_numbers(true)
        .max_col_width(2)
        .table_style(TableStyle::Plain);
    let lines = table
        .render_lines(rows(&[&["h"], &["abc"], &["d"]]))
        .unwrap();

    assert_eq!(
        lines,
        vec![
            "         h  ",
            "      1  ab ",
            "         c  ",
            "      2  d  ",
        ]
    );
    let blank_field = " ".repeat(ROW_NUMBER_WIDTH + 1);
    assert!(lines[0].starts_with(&blank_field));
    assert!(lines[2].starts_with(&blank_field));
}

// =============================================================================
// Scenario 5: Auto header over ragged rows
// =============================================================================

#[test]
fn e2e_auto_header_counts_all_columns() {
    init_test_logging();
    let mut table = Table::new()
        .auto_header(true)
        .table_style(TableStyle::Markdown);
    let lines = table
        .render_lines(rows(&[&["1"], &["2", "3", "4"], &[]]))
        .unwrap();

    assert_eq!(
        lines,
        vec![
            "| A | B | C |",
            "|---|---|---|",
            "| 1 |   |   |",
            "| 2 | 3 | 4 |",
            "|   |   |   |",
        ]
    );
    assert_eq!(table.draw_result().map(|r| r.row_count), Some(3));
}

#[test]
fn e2e_auto_header_past_z() {
    let labels = auto_header_labels(28);
    assert_eq!(&labels[24..], ["Y", "Z", "A0", "B0"]);
}

// =============================================================================
// Scenario 6: Blank lines inside a cell survive wrapping
// =============================================================================

#[test]
fn e2e_blank_lines_in_cell_are_kept() {
    init_test_logging();
    let mut table = Table::new().table_style(TableStyle::RstGrid);
    let lines = table
        .render_lines(rows(&[&["note"], &["a\n\nb"]]))
        .unwrap();

    assert_eq!(
        lines,
        vec![
            "+------+",
            "| note |",
            "+------+",
            "| a    |",
            "|      |",
            "| b    |",
            "+------+",
        ]
    );
}

// =============================================================================
// Scenario 7: Windows line endings
// =============================================================================

#[test]
fn e2e_crlf_in_cell() {
    let mut table = Table::new().table_style(TableStyle::Markdown);
    let lines = table
        .render_lines(rows(&[&["k"], &["x\r\ny"]]))
        .unwrap();
    // "x\r\ny" is four code points wide; the "\r" never reaches the output
    assert_eq!(lines, vec!["| k    |", "|------|", "| x    |", "| y    |"]);
}

// =============================================================================
// Scenario 8: Every line has the same width
// =============================================================================

#[test]
fn e2e_equal_width_with_every_option() {
    init_test_logging();
    let input = rows(&[
        &["id", "a header wider than the cap"],
        &["1", "short"],
        &["22", "a cell that is long enough to wrap twice", "x"],
        &["", "line one\nline two"],
    ]);

    for style in TableStyle::ALL {
        for align in [Align::Left, Align::Right, Align::Center] {
            for wrap in [true, false] {
                let mut table = Table::new()
                    .table_style(style)
                    .align(align)
                    .wrap_row(wrap)
                    .max_col_width(10)
                    .margin_x(2)
                    .margin_y(1)
                    .row_numbers(true);
                let lines = table.render_lines(&input).unwrap();
                let widths = line_widths(&lines);
                assert!(
                    widths.windows(2).all(|pair| pair[0] == pair[1]),
                    "{style} {align} wrap={wrap}: {lines:#?}"
                );
            }
        }
    }
}

// =============================================================================
// Scenario 9: Streaming into io::Write
// =============================================================================

#[test]
fn e2e_write_sink_output() {
    init_test_logging();
    let mut out = WriteSink::new(Vec::new());
    let result = Table::new()
        .table_style(TableStyle::Markdown)
        .draw([["a", "b"], ["1", "2"]], &mut out)
        .unwrap();

    assert_eq!(
        result,
        DrawResult {
            row_count: 1,
            lines_written: 3
        }
    );
    assert_eq!(
        String::from_utf8(out.into_inner()).unwrap(),
        "| a | b |\n|---|---|\n| 1 | 2 |\n"
    );
}

// =============================================================================
// Scenario 10: Sink failures
// =============================================================================

#[test]
fn e2e_closed_reader_mid_render() {
    init_test_logging();
    let mut seen = Vec::new();
    let mut closed_after_three = sink::from_fn(|line: &str| {
        if seen.len() == 3 {
            return Err(io::Error::from(io::ErrorKind::BrokenPipe));
        }
        seen.push(line.to_string());
        Ok(())
    });

    let mut table = Table::new();
    let err = table
        .draw(rows(&[&["h"], &["1"], &["2"], &["3"]]), &mut closed_after_three)
        .unwrap_err();
    drop(closed_after_three);

    assert!(err.is_broken_pipe());
    assert!(!err.is_early_abort());
    assert!(matches!(err, DrawError::Sink { lines_written: 3, .. }));
    assert_eq!(seen, vec!["┌───┐", "│ h │", "├───┤"]);
    assert!(table.draw_result().is_none());
}

#[test]
fn e2e_closed_reader_before_first_line() {
    let mut closed = sink::from_fn(|_: &str| Err(io::Error::from(io::ErrorKind::BrokenPipe)));
    let err = Table::new().draw([["h"]], &mut closed).unwrap_err();
    assert!(err.is_early_abort());
    assert_eq!(err.to_string(), "write failed after 0 lines: broken pipe");
}

struct ClosedPipe;

impl io::Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

#[test]
fn e2e_buffered_sink_counts_buffered_lines() {
    init_test_logging();
    // room for exactly two "| h |\n" lines before the first flush
    let mut out = WriteSink::new(io::BufWriter::with_capacity(12, ClosedPipe));
    let err = Table::new()
        .table_style(TableStyle::Markdown)
        .draw([["h"], ["1"]], &mut out)
        .unwrap_err();

    assert!(err.is_broken_pipe());
    assert!(!err.is_early_abort());
    assert!(matches!(err, DrawError::Sink { lines_written: 2, .. }));
}

// =============================================================================
// Scenario 11: Invalid rows
// =============================================================================

#[test]
fn e2e_invalid_row_reports_position() {
    init_test_logging();
    let input: Vec<Result<Vec<String>, io::Error>> = vec![
        Ok(vec!["h".into()]),
        Err(io::Error::new(io::ErrorKind::InvalidData, "bad record")),
    ];
    let mut lines: Vec<String> = Vec::new();
    let err = Table::new().draw(input, &mut lines).unwrap_err();

    assert_eq!(
        err.to_string(),
        "row 2 is not a sequence of text cells: bad record"
    );
    assert!(lines.is_empty());
}

// =============================================================================
// Scenario 12: Configuration from names
// =============================================================================

#[test]
fn e2e_config_names() {
    let style: TableStyle = "RST-Grid".parse().unwrap();
    let align: Align = "CENTER".parse().unwrap();
    let lines = Table::new()
        .table_style(style)
        .align(align)
        .render_lines([["abc"], ["x"]])
        .unwrap();
    assert_eq!(lines[3], "|  x  |");

    let err = "fancy".parse::<TableStyle>().unwrap_err();
    assert!(err.to_string().contains("rst-grid"));
}

#[test]
fn e2e_zero_cap_is_clamped() {
    let lines = Table::new()
        .max_col_width(0)
        .auto_header(true)
        .table_style(TableStyle::Markdown)
        .render_lines([["ab"]])
        .unwrap();
    assert_eq!(lines, vec!["| A |", "|---|", "| a |", "| b |"]);
}
