//! Golden (snapshot) tests for visual regression detection.
//!
//! One fixed input rendered through every style, with inline snapshots.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test golden_test
//!
//! # Update snapshots when intentional changes are made
//! cargo insta test --accept
//! ```

mod common;

use common::{init_test_logging, rows};
use drawtable::prelude::*;

fn fruit() -> Vec<Vec<String>> {
    rows(&[
        &["name", "qty", "note"],
        &["apple", "3", "crisp, red"],
        &["kiwi", "12", "fuzzy\nbrown"],
    ])
}

fn render(table: Table) -> String {
    let mut table = table.max_col_width(8);
    table.render_plain(fruit()).unwrap()
}

/// Make trailing margins visible.
fn show_spaces(output: &str) -> String {
    output.replace(' ', "·")
}

#[test]
fn golden_box_wrapped() {
    init_test_logging();
    let output = render(Table::new().table_style(TableStyle::Box));
    insta::assert_snapshot!(output, @r"
    ┌───────┬─────┬──────────┐
    │ name  │ qty │ note     │
    ├───────┼─────┼──────────┤
    │ apple │ 3   │ crisp, r │
    │       │     │ ed       │
    ├───────┼─────┼──────────┤
    │ kiwi  │ 12  │ fuzzy    │
    │       │     │ brown    │
    └───────┴─────┴──────────┘
    ");
}

#[test]
fn golden_markdown_right_aligned() {
    init_test_logging();
    let output = render(
        Table::new()
            .table_style(TableStyle::Markdown)
            .align(Align::Right),
    );
    insta::assert_snapshot!(output, @r"
    |  name | qty |     note |
    |-------|-----|----------|
    | apple |   3 | crisp, r |
    |       |     |       ed |
    |  kiwi |  12 |    fuzzy |
    |       |     |    brown |
    ");
}

#[test]
fn golden_rst_grid_truncated() {
    init_test_logging();
    let output = render(
        Table::new()
            .table_style(TableStyle::RstGrid)
            .wrap_row(false),
    );
    insta::assert_snapshot!(output, @r"
    +-------+-----+----------+
    | name  | qty | note     |
    +-------+-----+----------+
    | apple | 3   | crisp, … |
    +-------+-----+----------+
    | kiwi  | 12  | fuzzy…   |
    +-------+-----+----------+
    ");
}

#[test]
fn golden_plain() {
    init_test_logging();
    let output = show_spaces(&render(Table::new().table_style(TableStyle::Plain)));
    insta::assert_snapshot!(output, @r"
    ·name···qty··note·····
    ·apple··3····crisp,·r·
    ·············ed·······
    ·kiwi···12···fuzzy····
    ·············brown····
    ");
}

#[test]
fn golden_box_row_numbers_and_margin() {
    init_test_logging();
    let output = show_spaces(
        &Table::new()
            .row_numbers(true)
            .margin_y(1)
            .render_plain([["id"], ["7"]])
            .unwrap(),
    );
    insta::assert_snapshot!(output, @r"
    ········┌────┐
    ········│·id·│
    ········├────┤
    ········│····│
    ······1·│·7··│
    ········│····│
    ········└────┘
    ");
}
