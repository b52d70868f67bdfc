//! Coverage Data Storage
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  COVDATA STORE                                                    │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  Collector → add_line_data/add_arc_data → CoverageStore → write   │
//! │                                              ↑                    │
//! │            .coverage.1  .coverage.2  ...  → combine_parallel_data │
//! │                                              ↓                    │
//! │                          line_data / executed_lines / summary     │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reading is forgiving: a missing, unreadable or corrupt data file reads
//! as empty data, reported through [`RecordRead`]. Writing is not: every
//! write failure reaches the caller.

mod combine;
mod record;
mod store;
mod types;

pub use combine::{CombineReport, SkippedFile};
pub use record::{raw_data, CoverageRecord, RecordRead};
pub use store::CoverageStore;
pub use types::{ArcPair, ArcSet, LineNo, LineSet};
