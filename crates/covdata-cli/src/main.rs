//! covdata CLI: inspect and combine coverage data files
//!
//! ## Usage
//!
//! ```bash
//! covdata show                         # Dump the raw data file
//! covdata summary --full-path          # Executed lines per file
//! covdata combine                      # Merge .coverage.* into .coverage
//! covdata erase                        # Delete the data file
//! ```

use clap::Parser;
use covdata_cli::{
    handlers::{execute_combine, execute_erase, execute_files, execute_show, execute_summary},
    logging::init_logging,
    Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);
    init_logging(&config);

    match &cli.command {
        Commands::Show(args) => execute_show(&config, args),
        Commands::Summary(args) => execute_summary(&config, args),
        Commands::Files(args) => execute_files(&config, args),
        Commands::Combine(args) => execute_combine(&config, args),
        Commands::Erase => execute_erase(&config),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_log_json(cli.log_json)
        .with_data_file(cli.data_file.clone())
        .with_suffix(cli.suffix.clone())
}
