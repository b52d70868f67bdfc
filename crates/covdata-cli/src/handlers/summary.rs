//! Summary and files command handlers

use super::open_store;
use crate::commands::{FilesArgs, SummaryArgs};
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::OutputFormat;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Execute the summary command
pub fn execute_summary(config: &CliConfig, args: &SummaryArgs) -> CliResult<()> {
    let mut store = open_store(config)?;
    store.read();
    let summary = store.summary(args.full_path);
    println!("{}", render_summary(&summary, args.format.into())?);
    Ok(())
}

/// Execute the files command
pub fn execute_files(config: &CliConfig, args: &FilesArgs) -> CliResult<()> {
    let mut store = open_store(config)?;
    store.read();
    println!("{}", render_files(&store.executed_files(), args.format.into())?);
    Ok(())
}

/// Render executed line counts per file
pub fn render_summary(summary: &BTreeMap<String, usize>, format: OutputFormat) -> CliResult<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(summary)?);
    }
    if summary.is_empty() {
        return Ok("No coverage data.".to_string());
    }

    let width = summary.keys().map(String::len).max().unwrap_or(0).max(4);
    let mut output = String::new();
    let _ = writeln!(output, "{:<width$}  {:>6}", "Name", "Lines");
    let _ = writeln!(output, "{}  {}", "-".repeat(width), "-".repeat(6));
    for (name, count) in summary {
        let _ = writeln!(output, "{name:<width$}  {count:>6}");
    }
    let total: usize = summary.values().sum();
    let _ = write!(output, "{:<width$}  {total:>6}", "TOTAL");
    Ok(output)
}

/// Render the list of executed files
pub fn render_files(files: &[&str], format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(files)?),
        OutputFormat::Text => Ok(files.join("\n")),
    }
}
