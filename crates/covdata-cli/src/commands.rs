//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// covdata: inspect, summarize and combine coverage data files
#[derive(Parser, Debug)]
#[command(name = "covdata")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Data file name (default: $COVERAGE_FILE, then .coverage)
    #[arg(long, global = true, value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Suffix appended to the data file name
    #[arg(long, global = true)]
    pub suffix: Option<String>,

    /// Emit log events as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the raw contents of a data file
    Show(ShowArgs),

    /// Summarize executed line counts per file
    Summary(SummaryArgs),

    /// List files with executed lines
    Files(FilesArgs),

    /// Combine parallel data files into the data file
    Combine(CombineArgs),

    /// Delete the data file
    Erase,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Data file to show (default: the resolved data file)
    pub file: Option<PathBuf>,
}

/// Arguments for the summary command
#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// Key by full path instead of base name
    #[arg(long)]
    pub full_path: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormatArg,
}

/// Arguments for the files command
#[derive(Parser, Debug)]
pub struct FilesArgs {
    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormatArg,
}

/// Arguments for the combine command
#[derive(Parser, Debug)]
pub struct CombineArgs {
    /// Combine and report without writing the result
    #[arg(long)]
    pub dry_run: bool,

    /// Fail if any matching data file could not be read
    #[arg(long)]
    pub strict: bool,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

/// Color output argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

impl From<OutputFormatArg> for crate::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => Self::Text,
            OutputFormatArg::Json => Self::Json,
        }
    }
}
