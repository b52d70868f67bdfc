//! Show command handler

use super::open_store;
use crate::commands::ShowArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use covdata::CoverageStore;
use std::path::Path;

/// Execute the show command
pub fn execute_show(config: &CliConfig, args: &ShowArgs) -> CliResult<()> {
    let output = match &args.file {
        Some(file) => render_raw(file)?,
        None => {
            let store = open_store(config)?;
            render_raw(store.filename())?
        }
    };
    println!("{output}");
    Ok(())
}

/// Pretty-print the undecoded contents of a data file
///
/// Damaged files are reported as errors here, unlike a normal read.
pub fn render_raw(path: &Path) -> CliResult<String> {
    if path.is_dir() {
        return Err(CliError::invalid_argument(format!(
            "{} is a directory",
            path.display()
        )));
    }
    let raw = CoverageStore::raw_data(path)?;
    Ok(serde_json::to_string_pretty(&raw)?)
}
