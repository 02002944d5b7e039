//! Conversion of input rows into cells.
//!
//! [`Table::draw`](crate::table::Table::draw) accepts any iterator whose items
//! implement [`IntoRow`]. Plain sequences of strings always convert; fallible
//! sources such as a CSV reader yield `Result` items, and a failed item is
//! reported as [`DrawError::InvalidRowType`](crate::error::DrawError).

use std::fmt;

/// A value that can be read as one row of text cells.
pub trait IntoRow {
    /// Convert into the row's cells, or explain why this is not a row.
    fn into_row(self) -> Result<Vec<String>, String>;
}

impl<S: Into<String>> IntoRow for Vec<S> {
    fn into_row(self) -> Result<Vec<String>, String> {
        Ok(self.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> IntoRow for [S; N] {
    fn into_row(self) -> Result<Vec<String>, String> {
        Ok(self.into_iter().map(Into::into).collect())
    }
}

impl<S: AsRef<str>> IntoRow for &[S] {
    fn into_row(self) -> Result<Vec<String>, String> {
        Ok(self.iter().map(|cell| cell.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>> IntoRow for &Vec<S> {
    fn into_row(self) -> Result<Vec<String>, String> {
        self.as_slice().into_row()
    }
}

impl<T: IntoRow, E: fmt::Display> IntoRow for Result<T, E> {
    fn into_row(self) -> Result<Vec<String>, String> {
        self.map_err(|err| err.to_string())?.into_row()
    }
}

#[cfg(feature = "cli")]
impl IntoRow for csv::StringRecord {
    fn into_row(self) -> Result<Vec<String>, String> {
        Ok(self.iter().map(str::to_string).collect())
    }
}

#[cfg(feature = "cli")]
impl IntoRow for csv::ByteRecord {
    fn into_row(self) -> Result<Vec<String>, String> {
        self.iter()
            .enumerate()
            .map(|(i, field)| {
                std::str::from_utf8(field)
                    .map(str::to_string)
                    .map_err(|err| format!("field {} is not valid UTF-8: {err}", i + 1))
            })
            .collect()
    }
}
