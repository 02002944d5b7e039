//! Pager process sink.
//!
//! [`Pager`] resolves and spawns an external pager (by default `less -S`, so
//! long rows scroll sideways instead of wrapping) and returns a [`PagerSink`]
//! that writes table lines into the pager's stdin.
//!
//! When the user quits the pager before all lines are written, the next
//! write fails with [`io::ErrorKind::BrokenPipe`]; the table reports it as a
//! [`DrawError::Sink`](crate::DrawError::Sink) carrying how many lines got
//! through.

use std::io::{self, BufWriter, Write};
use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};

use crate::sink::LineSink;

/// Environment variable overriding the pager command.
pub const PAGER_ENV: &str = "CSVLESS_PAGER";

const DEFAULT_COMMAND: &str = "less -S";

/// Builder for a pager process.
#[derive(Debug, Clone, Default)]
pub struct Pager {
    command: Option<String>,
    line_numbers: bool,
}

impl Pager {
    /// Create a new pager with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the pager command (program followed by whitespace-separated args).
    #[must_use]
    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Ask `less` to number its lines.
    #[must_use]
    pub const fn line_numbers(mut self, line_numbers: bool) -> Self {
        self.line_numbers = line_numbers;
        self
    }

    /// Spawn the pager with piped stdin.
    ///
    /// The command comes from [`Pager::command`], then `CSVLESS_PAGER`, then
    /// `less -S`.
    pub fn spawn(&self) -> io::Result<PagerSink> {
        let (program, args) = self.resolve_command(std::env::var(PAGER_ENV).ok());
        log::debug!("spawning pager: {program} {}", args.join(" "));

        let mut child = Command::new(&program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::other("pager stdin was not captured"))?;

        Ok(PagerSink {
            child,
            stdin: Some(BufWriter::new(stdin)),
        })
    }

    fn resolve_command(&self, env_command: Option<String>) -> (String, Vec<String>) {
        let command = self
            .command
            .clone()
            .or(env_command)
            .filter(|command| !command.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COMMAND.to_string());

        let mut parts = command.split_whitespace();
        let program = parts.next().unwrap_or("less").to_string();
        let mut args: Vec<String> = parts.map(str::to_string).collect();

        if self.line_numbers && program == "less" && args.iter().all(|arg| arg != "-N") {
            args.push("-N".to_string());
        }

        (program, args)
    }
}

/// A running pager receiving table lines on its stdin.
///
/// Call [`PagerSink::finish`] to close stdin and wait for the user to quit.
/// Dropping an unfinished sink does the same but discards errors.
/// Lines are buffered, so a write only fails once a flush hits a closed pipe.
#[derive(Debug)]
pub struct PagerSink {
    child: Child,
    stdin: Option<BufWriter<ChildStdin>>,
}

impl PagerSink {
    /// Close the pager's stdin and wait for it to exit.
    ///
    /// A broken pipe while flushing means the pager already quit and is not
    /// an error here.
    pub fn finish(mut self) -> io::Result<ExitStatus> {
        self.close_stdin()?;
        self.child.wait()
    }

    fn close_stdin(&mut self) -> io::Result<()> {
        if let Some(mut stdin) = self.stdin.take() {
            match stdin.flush() {
                Err(err) if err.kind() != io::ErrorKind::BrokenPipe => return Err(err),
                _ => {}
            }
        }
        Ok(())
    }
}

impl LineSink for PagerSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| io::Error::from(io::ErrorKind::BrokenPipe))?;
        stdin.write_all(line.as_bytes())?;
        stdin.write_all(b"\n")
    }
}

impl Drop for PagerSink {
    fn drop(&mut self) {
        if self.stdin.is_some() {
            let _ = self.close_stdin();
            let _ = self.child.wait();
        }
    }
}
