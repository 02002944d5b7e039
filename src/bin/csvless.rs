//! # csvless
//!
//! Render a CSV file in the console as a fixed-width table, paged through
//! `less -S`.
//!
//! ## Usage
//!
//! ```bash
//! # Page a file as a borderless table
//! csvless data.csv
//!
//! # Markdown table straight to stdout
//! csvless --cat -s markdown data.csv
//!
//! # Tab separated, no header row, numbered rows
//! csvless -d '\t' -H -n data.tsv
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use drawtable::logging::{self, StderrLogger};
use drawtable::pager::Pager;
use drawtable::sink::WriteSink;
use drawtable::{DrawError, Table, TableStyle};

const ENV_HELP: &str = "\
Environment Variables:
  CSVLESS_MAX_COLUMN_WIDTH  default: 32
  CSVLESS_LINE_NUMBERS      default: false
  CSVLESS_ROW_NUMBERS       default: false
  CSVLESS_TABLE_STYLE       default: plain
  CSVLESS_NO_WRAP           default: false
  CSVLESS_PAGER             default: less -S
  CSVLESS_LOG               default: warn";

/// Render a CSV file in the console as a Markdown-compatible, fixed-width table.
#[derive(Parser, Debug)]
#[command(name = "csvless", version, about, long_about = None, after_help = ENV_HELP)]
struct Cli {
    /// CSV file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Truncate or wrap all columns at this width
    #[arg(
        short = 'w',
        long,
        env = "CSVLESS_MAX_COLUMN_WIDTH",
        default_value_t = 32,
        help_heading = "Display options"
    )]
    max_column_width: usize,

    /// Show line numbers in the pager
    #[arg(short = 'N', long, env = "CSVLESS_LINE_NUMBERS", help_heading = "Display options")]
    line_numbers: bool,

    /// Show row numbers
    #[arg(short = 'n', long, env = "CSVLESS_ROW_NUMBERS", help_heading = "Display options")]
    row_numbers: bool,

    /// Display style: plain, box, markdown or rst-grid
    #[arg(
        short = 's',
        long,
        env = "CSVLESS_TABLE_STYLE",
        default_value = "plain",
        help_heading = "Display options"
    )]
    table_style: TableStyle,

    /// Behave like cat, print to stdout directly
    #[arg(long, help_heading = "Display options")]
    cat: bool,

    /// The file has no header row; label columns A, B, C, ...
    #[arg(short = 'H', long, help_heading = "Display options")]
    auto_header: bool,

    /// Truncate long cells with an ellipsis instead of wrapping them
    #[arg(long, env = "CSVLESS_NO_WRAP", help_heading = "Display options")]
    no_wrap: bool,

    /// Field delimiter (`\t` for tab)
    #[arg(short = 'd', long, value_parser = parse_byte, help_heading = "CSV reader options")]
    delimiter: Option<u8>,

    /// Quote characters inside quoted fields are escaped, not doubled
    #[arg(long, help_heading = "CSV reader options")]
    no_doublequote: bool,

    /// Escape character used with --no-doublequote
    #[arg(long, value_parser = parse_byte, help_heading = "CSV reader options")]
    escapechar: Option<u8>,

    /// Quote character
    #[arg(long, value_parser = parse_byte, help_heading = "CSV reader options")]
    quotechar: Option<u8>,

    /// Quoting style: 0 all, 1 minimal, 2 non-numeric, 3 none
    #[arg(
        long,
        value_parser = clap::value_parser!(u8).range(0..=3),
        help_heading = "CSV reader options"
    )]
    quoting: Option<u8>,

    /// Log more (repeat for debug and trace output)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn table(&self) -> Table {
        Table::new()
            .max_col_width(self.max_column_width)
            .table_style(self.table_style)
            .auto_header(self.auto_header)
            .row_numbers(self.row_numbers)
            .wrap_row(!self.no_wrap)
    }

    fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .double_quote(!self.no_doublequote)
            .escape(self.escapechar)
            .quoting(self.quoting != Some(3));
        if let Some(delimiter) = self.delimiter {
            builder.delimiter(delimiter);
        }
        if let Some(quote) = self.quotechar {
            builder.quote(quote);
        }
        builder
    }

    fn log_level(&self) -> LevelFilter {
        if self.verbose > 0 {
            return logging::level_from_verbosity(self.verbose);
        }
        std::env::var("CSVLESS_LOG")
            .ok()
            .and_then(|name| logging::parse_level(&name))
            .unwrap_or(LevelFilter::Warn)
    }
}

/// Parse a single-byte CSV dialect character. `\t` means tab.
fn parse_byte(value: &str) -> Result<u8, String> {
    match value {
        "\\t" | "\t" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(format!("expected a single ASCII character, got {value:?}")),
        },
    }
}

#[derive(Debug)]
enum CliError {
    Open { path: PathBuf, source: io::Error },
    Pager(io::Error),
    Output(io::Error),
    Draw(DrawError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => write!(f, "cannot open {}: {source}", path.display()),
            Self::Pager(err) => write!(f, "cannot start pager: {err}"),
            Self::Output(err) => write!(f, "write failed: {err}"),
            Self::Draw(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Pager(err) | Self::Output(err) => Some(err),
            Self::Draw(err) => Some(err),
        }
    }
}

impl From<DrawError> for CliError {
    fn from(err: DrawError) -> Self {
        Self::Draw(err)
    }
}

/// Keep a broken pipe after visible output as a normal exit: the reader quit.
fn quit_is_success(result: Result<(), DrawError>) -> Result<(), CliError> {
    match result {
        Err(err) if err.is_broken_pipe() && !err.is_early_abort() => {
            log::debug!("output closed early: {err}");
            Ok(())
        }
        other => other.map_err(CliError::from),
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let file = File::open(&cli.file).map_err(|source| CliError::Open {
        path: cli.file.clone(),
        source,
    })?;
    let records = cli.reader_builder().from_reader(file).into_records();
    let mut table = cli.table();

    if cli.cat || !io::stdout().is_terminal() {
        let mut sink = WriteSink::new(BufWriter::new(io::stdout().lock()));
        let drawn = table.draw(records, &mut sink).map(|_| ());
        quit_is_success(drawn)?;
        return match sink.flush() {
            Err(err) if err.kind() != io::ErrorKind::BrokenPipe => Err(CliError::Output(err)),
            _ => Ok(()),
        };
    }

    let mut sink = Pager::new()
        .line_numbers(cli.line_numbers)
        .spawn()
        .map_err(CliError::Pager)?;
    let drawn = table.draw(records, &mut sink).map(|_| ());
    let finished = sink.finish().map_err(CliError::Pager);
    quit_is_success(drawn)?;
    let status = finished?;
    log::debug!("pager exited with {status}");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // a second logger can only come from a test harness; keep the first
    let _ = StderrLogger::new()
        .level(cli.log_level())
        .show_time(false)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Draw(err)) if err.is_early_abort() && err.is_broken_pipe() => {
            eprintln!("Zero success write before broken pipe");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("csvless: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_byte() {
        assert_eq!(parse_byte("\\t"), Ok(b'\t'));
        assert_eq!(parse_byte(";"), Ok(b';'));
        assert!(parse_byte("ab").is_err());
        assert!(parse_byte("").is_err());
        assert!(parse_byte("é").is_err());
    }

    #[test]
    fn test_flags_map_onto_table() {
        let cli = Cli::try_parse_from(["csvless", "-s", "Markdown", "--no-wrap", "-w", "8", "x.csv"])
            .unwrap();
        assert_eq!(cli.table_style, TableStyle::Markdown);
        assert!(cli.no_wrap);
        assert_eq!(cli.max_column_width, 8);
        assert_eq!(cli.file, PathBuf::from("x.csv"));
    }

    #[test]
    fn test_quoting_range() {
        assert!(Cli::try_parse_from(["csvless", "--quoting", "4", "x.csv"]).is_err());
        let cli = Cli::try_parse_from(["csvless", "--quoting", "3", "x.csv"]).unwrap();
        assert_eq!(cli.quoting, Some(3));
    }

    #[test]
    fn test_verbosity_wins_over_env() {
        let cli = Cli::try_parse_from(["csvless", "-vv", "x.csv"]).unwrap();
        assert_eq!(cli.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_quote_none_reads_quotes_literally() {
        let cli = Cli::try_parse_from(["csvless", "--quoting", "3", "-d", ";", "x.csv"]).unwrap();
        let mut reader = cli.reader_builder().from_reader("\"a\";b\n".as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.iter().collect::<Vec<_>>(), vec!["\"a\"", "b"]);
    }
}
