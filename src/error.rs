//! Error types for table rendering and configuration parsing.

use std::fmt;
use std::io;

/// Error returned by [`Table::draw`](crate::table::Table::draw).
#[derive(Debug)]
pub enum DrawError {
    /// An input row could not be read as a sequence of text cells.
    InvalidRowType {
        /// 1-based position of the row in the input, header included.
        row: usize,
        /// Why the row was rejected.
        reason: String,
    },
    /// The output sink rejected a line.
    Sink {
        /// Lines the sink accepted before the failure.
        ///
        /// Buffered sinks such as `WriteSink<BufWriter<_>>` and
        /// [`PagerSink`](crate::pager::PagerSink) accept lines into their
        /// buffer, so a reader that closes early is usually reported with a
        /// non-zero count.
        lines_written: usize,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl DrawError {
    /// Returns `true` if the sink failed before accepting a single line.
    #[must_use]
    pub const fn is_early_abort(&self) -> bool {
        matches!(
            self,
            Self::Sink {
                lines_written: 0,
                ..
            }
        )
    }

    /// Returns `true` if the sink failed because its reader went away.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Sink { source, .. } if source.kind() == io::ErrorKind::BrokenPipe)
    }
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRowType { row, reason } => {
                write!(f, "row {row} is not a sequence of text cells: {reason}")
            }
            Self::Sink {
                lines_written,
                source,
            } => write!(f, "write failed after {lines_written} lines: {source}"),
        }
    }
}

impl std::error::Error for DrawError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Sink { source, .. } => Some(source),
            Self::InvalidRowType { .. } => None,
        }
    }
}

/// Error type for parsing configuration names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not one of `plain`, `box`, `markdown`, `rst-grid`.
    UnknownStyle(String),
    /// Not one of `left`, `right`, `center`.
    UnknownAlign(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStyle(s) => write!(
                f,
                "unknown table style '{s}', expected one of: plain, box, markdown, rst-grid"
            ),
            Self::UnknownAlign(s) => {
                write!(f, "unknown align '{s}', expected one of: left, right, center")
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_early_abort() {
        let err = DrawError::Sink {
            lines_written: 0,
            source: io::Error::from(io::ErrorKind::BrokenPipe),
        };
        assert!(err.is_early_abort());
        assert!(err.is_broken_pipe());
        assert!(err.source().is_some());

        let err = DrawError::Sink {
            lines_written: 3,
            source: io::Error::from(io::ErrorKind::BrokenPipe),
        };
        assert!(!err.is_early_abort());
        assert!(err.to_string().starts_with("write failed after 3 lines"));
    }

    #[test]
    fn test_invalid_row_display() {
        let err = DrawError::InvalidRowType {
            row: 4,
            reason: "invalid utf-8".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "row 4 is not a sequence of text cells: invalid utf-8"
        );
        assert!(!err.is_early_abort());
        assert!(!err.is_broken_pipe());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::UnknownStyle("fancy".to_string());
        assert!(err.to_string().contains("rst-grid"));
    }
}
