//! CLI argument definitions for the triage normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "triage",
    version,
    about = "Normalize clinical vertigo workbooks into patient records",
    long_about = "Normalize clinical vertigo workbooks into patient records.\n\n\
                  Reads .csv, .xlsx and .xls workbooks in row-wise or transposed layout,\n\
                  builds per-patient notes, and separates ground-truth outcomes."
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

    /// Allow patient values in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a workbook and write `{patients, groundTruth}` JSON.
    Normalize(NormalizeArgs),

    /// Show the detected layout and a per-patient summary.
    Inspect(InspectArgs),

    /// Print the agent workflow input for a workbook.
    Payload(PayloadArgs),
}

#[derive(Parser)]
pub struct WorkbookArgs {
    /// Path to a .csv, .xlsx or .xls workbook.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Table layout (auto detects from the first column).
    #[arg(long = "orientation", value_enum, default_value = "auto")]
    pub orientation: OrientationArg,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub workbook: WorkbookArgs,

    /// Output file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write single-line JSON.
    #[arg(long = "compact")]
    pub compact: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    #[command(flatten)]
    pub workbook: WorkbookArgs,
}

#[derive(Parser)]
pub struct PayloadArgs {
    #[command(flatten)]
    pub workbook: WorkbookArgs,

    /// Patients per agent run (capped at 5).
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Extra instructions passed to the agent.
    #[arg(long = "instructions", value_name = "TEXT")]
    pub instructions: Option<String>,

    /// Workflow id (default: CHATKIT_WORKFLOW_ID and related variables).
    #[arg(long = "workflow-id", value_name = "ID")]
    pub workflow_id: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OrientationArg {
    Auto,
    RowWise,
    Transposed,
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
