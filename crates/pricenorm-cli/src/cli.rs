//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use pricenorm_transform::{DateTokenMode, HeaderMatch};

#[derive(Parser)]
#[command(
    name = "pricenorm",
    version,
    about = "Normalize messy commodity price tables into Date,Product,Value series",
    long_about = "Normalize commodity price spreadsheets and CSV exports.\n\n\
                  Detects date-wide, product-by-week, two-column and year/quarter\n\
                  layouts and writes one <name>_normalized.csv per input file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize every CSV/XLS/XLSX file in a folder.
    Normalize(NormalizeArgs),

    /// Show the per-product series held in normalized files.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Folder containing the raw input files.
    #[arg(value_name = "INPUT_DIR", default_value = "data")]
    pub input_dir: PathBuf,

    /// Folder for the normalized CSV files (created if missing).
    #[arg(long = "output-dir", value_name = "DIR", default_value = "normalized_files")]
    pub output_dir: PathBuf,

    /// How headers are matched when detecting layouts.
    ///
    /// `exact` reads a Date,Product,Value file as already normalized;
    /// `substring` treats it like any other date-indexed wide table.
    #[arg(long = "header-match", value_enum, default_value = "exact")]
    pub header_match: HeaderMatchArg,

    /// How much of each date cell in date-indexed wide tables is parsed.
    #[arg(long = "wide-date-tokens", value_enum, default_value = "full")]
    pub wide_date_tokens: DateTokensArg,

    /// Write a JSON report of the run.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// A normalized CSV file, or a folder of `*_normalized.csv` files.
    #[arg(value_name = "PATH", default_value = "normalized_files")]
    pub path: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum HeaderMatchArg {
    Exact,
    Substring,
}

impl From<HeaderMatchArg> for HeaderMatch {
    fn from(value: HeaderMatchArg) -> Self {
        match value {
            HeaderMatchArg::Exact => Self::Exact,
            HeaderMatchArg::Substring => Self::Substring,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DateTokensArg {
    Full,
    FirstLast,
}

impl From<DateTokensArg> for DateTokenMode {
    fn from(value: DateTokensArg) -> Self {
        match value {
            DateTokensArg::Full => Self::Full,
            DateTokensArg::FirstLast => Self::FirstLast,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
