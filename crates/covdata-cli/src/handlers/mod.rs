//! Command handlers - extracted from main.rs for testability
//!
//! Each handler module contains:
//! - The execution logic for a CLI command
//! - Pure rendering helpers
//! - Tests

pub mod combine;
pub mod erase;
pub mod show;
pub mod summary;

// Re-export handlers for convenient access
pub use combine::{execute_combine, render_combine_report};
pub use erase::execute_erase;
pub use show::{execute_show, render_raw};
pub use summary::{execute_files, execute_summary, render_files, render_summary};

use crate::config::CliConfig;
use crate::error::CliResult;
use covdata::CoverageStore;
use tracing::debug;

/// Open the store selected by the command line, without reading it
pub fn open_store(config: &CliConfig) -> CliResult<CoverageStore> {
    let store = CoverageStore::new(config.store_config()?)?;
    debug!(path = %store.filename().display(), "resolved data file");
    Ok(store)
}
