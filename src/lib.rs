//! # drawtable
//!
//! Render rows of text cells as fixed-width tables for the terminal: a
//! borderless layout, a Unicode box, a Markdown pipe table, or an RST grid.
//!
//! ## Quick Start
//!
//! ```rust
//! use drawtable::prelude::*;
//!
//! let mut table = Table::new()
//!     .table_style(TableStyle::Markdown)
//!     .max_col_width(20);
//! let output = table
//!     .render_plain([["Name", "Age"], ["Alice", "30"]])
//!     .unwrap();
//!
//! assert_eq!(output, "| Name  | Age |\n|-------|-----|\n| Alice | 30  |\n");
//! ```
//!
//! ## Core Concepts
//!
//! - **Table**: the layout engine; buffers rows, fixes column widths, streams lines
//! - **Style**: border, separator and footer strategy per [`TableStyle`]
//! - **cells**: splitting, truncation and alignment of a single cell
//! - **LineSink**: where rendered lines go, one line per call
//! - **Pager**: a sink that pipes lines into `less`

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod r#box;
pub mod cells;
pub mod error;
pub mod logging;
pub mod pager;
pub mod row;
pub mod sink;
pub mod style;
pub mod table;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::cells::Align;
    pub use crate::error::{DrawError, ParseError};
    pub use crate::pager::{Pager, PagerSink};
    pub use crate::row::IntoRow;
    pub use crate::sink::{LineSink, WriteSink};
    pub use crate::style::{RenderContext, Style, TableStyle};
    pub use crate::table::{DrawResult, Table};
}

// Re-export key types at crate root
pub use cells::Align;
pub use error::{DrawError, ParseError};
pub use sink::LineSink;
pub use style::TableStyle;
pub use table::{DrawResult, Table};
