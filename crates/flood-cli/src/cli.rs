//! CLI argument definitions for the flood intake form.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use flood_cli::input::{FieldAssignment, parse_assignment};

#[derive(Parser)]
#[command(
    name = "flood-intake",
    version,
    about = "Flood forecasting data intake - import, check and submit readings",
    long_about = "Collect the inputs of a flood forecasting model.\n\n\
                  Imports a JSON object or the first row of a CSV file, applies\n\
                  field edits, checks required fields and runs a simulated submission."
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

    /// Include field values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every form field with its category, unit and default.
    Fields,

    /// Print the form as pretty JSON.
    Preview(FormArgs),

    /// Check required fields.
    Validate(FormArgs),

    /// Validate and run the simulated submission.
    Submit(SubmitArgs),
}

/// Where the form values come from.
#[derive(Args)]
pub struct FormArgs {
    /// JSON or CSV file to import before applying edits.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Set a field after the import (repeatable).
    #[arg(
        long = "set",
        value_name = "FIELD=VALUE",
        value_parser = parse_assignment
    )]
    pub set: Vec<FieldAssignment>,
}

#[derive(Parser)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// JSON file with `send_delay_ms` and `reset_delay_ms`.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override how long the simulated send takes.
    #[arg(long = "send-delay-ms", value_name = "MS")]
    pub send_delay_ms: Option<u64>,

    /// Override how long success is shown before returning to idle.
    #[arg(long = "reset-delay-ms", value_name = "MS")]
    pub reset_delay_ms: Option<u64>,
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
