//! Output formatting

use console::{style, Term};
use serde::{Deserialize, Serialize};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Status line printer
///
/// Status lines go to stderr; command results are printed by the handlers
/// on stdout.
#[derive(Debug)]
pub struct Reporter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        let prefix = if self.use_color {
            style("✓").green().bold().to_string()
        } else {
            "OK".to_string()
        };
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        let prefix = if self.use_color {
            style("⚠").yellow().bold().to_string()
        } else {
            "WARN".to_string()
        };
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print an informational message
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        let prefix = if self.use_color {
            style("ℹ").blue().bold().to_string()
        } else {
            "INFO".to_string()
        };
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }
}
