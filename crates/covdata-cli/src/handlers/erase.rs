//! Erase command handler

use super::open_store;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::Reporter;

/// Execute the erase command
pub fn execute_erase(config: &CliConfig) -> CliResult<()> {
    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());
    let mut store = open_store(config)?;
    let existed = store.filename().exists();
    store.erase()?;
    if existed {
        reporter.success(&format!("erased {}", store.filename().display()));
    } else {
        reporter.info(&format!("no data file at {}", store.filename().display()));
    }
    Ok(())
}
