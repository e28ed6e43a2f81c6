//! CLI argument definitions for the BFHL client.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bfhl",
    version,
    about = "BFHL client - Submit JSON payloads for classification",
    long_about = "Submit a JSON payload and an optional file attachment to a BFHL\n\
                  classification endpoint, then print the response filtered by\n\
                  category."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Submit a payload and print the filtered response.
    Submit(SubmitArgs),

    /// List the available filter options.
    Options,
}

#[derive(Parser)]
pub struct SubmitArgs {
    /// Path to the JSON payload file, or `-` to read from stdin.
    #[arg(value_name = "PAYLOAD")]
    pub payload: PathBuf,

    /// File to attach to the submission.
    #[arg(long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Base URL of the classification endpoint.
    #[arg(long = "endpoint", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Filter options to render (repeatable; default: all).
    #[arg(long = "select", value_enum, value_name = "OPTION")]
    pub select: Vec<FilterOptionArg>,

    /// Print the raw JSON response instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI filter option choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum FilterOptionArg {
    Alphabets,
    Numbers,
    HighestLowercaseAlphabet,
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
