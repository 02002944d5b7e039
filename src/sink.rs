//! Output sinks receiving rendered lines.
//!
//! A sink gets one terminal line per call, without a line terminator, in
//! emission order. Errors are returned to the table unchanged and end the
//! render.

use std::io::{self, Write};

/// Destination for rendered table lines.
pub trait LineSink {
    /// Accept one line of output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

/// Collects lines in memory.
impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Sink calling a closure for each line.
pub struct FnSink<F>(F);

/// Wrap a closure as a [`LineSink`].
pub fn from_fn<F>(f: F) -> FnSink<F>
where
    F: FnMut(&str) -> io::Result<()>,
{
    FnSink(f)
}

impl<F> LineSink for FnSink<F>
where
    F: FnMut(&str) -> io::Result<()>,
{
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (self.0)(line)
    }
}

/// Sink writing newline-terminated lines into an [`io::Write`].
#[derive(Debug)]
pub struct WriteSink<W: Write> {
    inner: W,
}

impl<W: Write> WriteSink<W> {
    /// Wrap a writer.
    #[must_use]
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> LineSink for WriteSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")
    }
}
