//! CLI configuration

use crate::error::{CliError, CliResult};
use covdata::StoreConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - minimal output
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - extra output
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Map `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Default log filter directive for this level
    #[must_use]
    pub const fn log_level(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Emit log events as JSON
    pub log_json: bool,
    /// Data file name given on the command line
    pub data_file: Option<PathBuf>,
    /// Data file suffix given on the command line
    pub suffix: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            color: ColorChoice::Auto,
            log_json: false,
            data_file: None,
            suffix: None,
        }
    }
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set JSON logging
    #[must_use]
    pub const fn with_log_json(mut self, log_json: bool) -> Self {
        self.log_json = log_json;
        self
    }

    /// Set the data file name
    #[must_use]
    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        self.data_file = data_file;
        self
    }

    /// Set the data file suffix
    #[must_use]
    pub fn with_suffix(mut self, suffix: Option<String>) -> Self {
        self.suffix = suffix;
        self
    }

    /// Store configuration for the data file selected on the command line
    ///
    /// Records written by the CLI are labelled with its name and version.
    pub fn store_config(&self) -> CliResult<StoreConfig> {
        let mut builder = StoreConfig::builder().collector(collector_label());
        if let Some(data_file) = &self.data_file {
            builder = builder.base_name(data_file.clone());
        }
        if let Some(suffix) = &self.suffix {
            if suffix.contains(std::path::is_separator) {
                return Err(CliError::config(format!(
                    "suffix {suffix:?} must not contain a path separator"
                )));
            }
            builder = builder.suffix(suffix.clone());
        }
        Ok(builder.build())
    }
}

/// Collector label written into records produced by the CLI
#[must_use]
pub fn collector_label() -> String {
    format!("covdata {}", env!("CARGO_PKG_VERSION"))
}
