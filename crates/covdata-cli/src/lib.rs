//! covdata CLI Library
//!
//! Command-line interface over the `covdata` coverage store.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{
    Cli, ColorArg, CombineArgs, Commands, FilesArgs, OutputFormatArg, ShowArgs, SummaryArgs,
};
pub use config::{collector_label, CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Reporter};
