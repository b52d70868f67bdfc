//! covdata: Durable Line and Arc Coverage Storage
//!
//! Accumulates which lines and arcs (line-to-line transitions) executed in
//! each source file, persists them to a data file, and combines the data
//! files written by parallel runs into one aggregate.
//!
//! # Example
//!
//! ```no_run
//! use covdata::{CoverageStore, StoreConfig};
//!
//! # fn main() -> covdata::CovResult<()> {
//! let config = StoreConfig::builder()
//!     .base_name(".coverage")
//!     .parallel()
//!     .collector("covdata")
//!     .build();
//! let mut store = CoverageStore::new(config)?;
//! store.add_line_data([("/src/app.py", vec![1, 2, 3])]);
//! store.write()?;
//! # Ok(())
//! # }
//! ```
//!
//! Instrumentation that discovers executed lines, and reporting on top of
//! the collected data, live outside this crate.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod config;
pub mod data;
mod result;

pub use config::{parallel_suffix, StoreConfig, StoreConfigBuilder, DATA_FILE_ENV, DEFAULT_DATA_FILE};
pub use data::{
    raw_data, ArcPair, ArcSet, CombineReport, CoverageRecord, CoverageStore, LineNo, LineSet,
    RecordRead, SkippedFile,
};
pub use result::{CovError, CovResult};
