//! Log subscriber setup
//!
//! Library events from `covdata` go to stderr so stdout stays clean for
//! command output. `RUST_LOG` overrides the level picked from `-q`/`-v`.

use crate::config::{CliConfig, Verbosity};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, falling back to the verbosity's level
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_level()))
}

/// Install the global subscriber
///
/// Uses `try_init`, so a second call is a no-op.
pub fn init_logging(config: &CliConfig) {
    let filter = env_filter(config.verbosity);
    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.log_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(config.color.should_color())
                    .with_target(false)
                    .compact(),
            )
            .try_init()
    };
    let _ = result;
}
