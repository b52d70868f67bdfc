//! On-Disk Coverage Record
//!
//! A data file holds one JSON object:
//!
//! ```text
//! {
//!   "collector": "covdata 1.0.0",            (only if configured)
//!   "lines": { "/src/a.py": [1, 2, 5] },     (always)
//!   "arcs":  { "/src/a.py": [[1, 2], [2, 5]] } (only if any file has arcs)
//! }
//! ```
//!
//! Unknown keys are ignored and missing keys default to empty, so newer
//! writers stay readable by older readers.

use super::{ArcPair, LineNo};
use crate::result::CovResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Serialized form of a store's line and arc data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageRecord {
    /// Tool that produced the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collector: Option<String>,
    /// Sorted executed lines per file
    #[serde(default)]
    pub lines: BTreeMap<String, Vec<LineNo>>,
    /// Sorted arcs per file
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub arcs: BTreeMap<String, Vec<ArcPair>>,
}

impl CoverageRecord {
    /// True when the record carries no line or arc data
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.arcs.is_empty()
    }

    /// Write the record to `path`, replacing any existing file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created or written
    pub fn save(&self, path: &Path) -> CovResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        debug!(
            path = %path.display(),
            files = self.lines.len(),
            arc_files = self.arcs.len(),
            "wrote coverage record"
        );
        Ok(())
    }

    /// Read a record from `path` without failing
    ///
    /// Every outcome is reported, none raised. Use
    /// [`RecordRead::into_record`] to fall back to an empty record.
    #[must_use]
    pub fn load(path: &Path) -> RecordRead {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return RecordRead::NotFound,
            Err(e) => {
                return RecordRead::Unreadable {
                    reason: e.to_string(),
                }
            }
        };

        match serde_json::from_reader::<_, Self>(BufReader::new(file)) {
            Ok(record) => RecordRead::Decoded(record),
            Err(e) if e.is_io() => RecordRead::Unreadable {
                reason: e.to_string(),
            },
            Err(e) => RecordRead::Corrupt {
                reason: e.to_string(),
            },
        }
    }
}

/// Outcome of reading a record file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordRead {
    /// The file decoded to a record
    Decoded(CoverageRecord),
    /// No file exists at the path
    NotFound,
    /// The file exists but could not be read
    Unreadable {
        /// Underlying I/O failure
        reason: String,
    },
    /// The file was read but is not a coverage record
    Corrupt {
        /// Decoder failure
        reason: String,
    },
}

impl RecordRead {
    /// True if a record was decoded
    #[must_use]
    pub const fn is_decoded(&self) -> bool {
        matches!(self, Self::Decoded(_))
    }

    /// Failure description for unreadable or corrupt files
    #[must_use]
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Unreadable { reason } | Self::Corrupt { reason } => Some(reason),
            Self::Decoded(_) | Self::NotFound => None,
        }
    }

    /// The decoded record, or an empty one for any other outcome
    #[must_use]
    pub fn into_record(self) -> CoverageRecord {
        match self {
            Self::Decoded(record) => record,
            Self::NotFound | Self::Unreadable { .. } | Self::Corrupt { .. } => {
                CoverageRecord::default()
            }
        }
    }

    /// Like [`Self::into_record`], logging a warning for damaged files
    pub(crate) fn into_record_logged(self, path: &Path) -> CoverageRecord {
        if let Some(reason) = self.failure_reason() {
            warn!(path = %path.display(), reason, "ignoring unusable coverage data file");
        }
        self.into_record()
    }
}

/// Return the undecoded contents of a data file
///
/// Unlike [`CoverageRecord::load`], failures propagate. Intended for
/// inspecting a file by hand.
///
/// # Errors
///
/// Returns error if the file cannot be opened or is not valid JSON
pub fn raw_data(path: &Path) -> CovResult<serde_json::Value> {
    let file = File::open(path)?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    Ok(value)
}
