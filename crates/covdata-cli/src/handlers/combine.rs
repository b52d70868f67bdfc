//! Combine command handler

use super::open_store;
use crate::commands::CombineArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Reporter;
use covdata::CombineReport;
use std::fmt::Write;
use std::path::Path;

/// Execute the combine command
///
/// The combined data replaces the data file unless `--dry-run` is given.
/// With `--strict`, unusable files abort before anything is written.
pub fn execute_combine(config: &CliConfig, args: &CombineArgs) -> CliResult<()> {
    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());
    let mut store = open_store(config)?;

    let report = store.combine_parallel_data()?;
    for skipped in &report.skipped {
        reporter.warning(&format!(
            "skipped {}: {}",
            skipped.path.display(),
            skipped.reason
        ));
    }

    if args.strict && !report.is_clean() {
        return Err(CliError::IncompleteCombine {
            skipped: report.skipped_count(),
        });
    }

    if args.dry_run {
        reporter.info("dry run, data file not written");
    } else {
        store.write()?;
    }

    if config.verbosity.is_verbose() {
        println!("{}", render_combine_report(&report, store.filename()));
    }
    reporter.success(&format!(
        "combined {} data file(s) into {}",
        report.merged_count(),
        store.filename().display()
    ));
    Ok(())
}

/// Render the list of merged and skipped files
pub fn render_combine_report(report: &CombineReport, target: &Path) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Combined into {}", target.display());
    for path in &report.merged {
        let _ = writeln!(output, "  merged  {}", path.display());
    }
    for skipped in &report.skipped {
        let _ = writeln!(output, "  skipped {} ({})", skipped.path.display(), skipped.reason);
    }
    let _ = write!(
        output,
        "{} merged, {} skipped",
        report.merged_count(),
        report.skipped_count()
    );
    output
}
