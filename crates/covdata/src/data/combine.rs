//! Parallel Data Combination
//!
//! Parallel workers each write to `<data file><suffix>`. Combining treats
//! the store's own data file name as a prefix and unions every matching
//! file in its directory into the store.
//!
//! Union is commutative and idempotent, so directory order does not matter
//! and combining the same files twice changes nothing.

use super::{CoverageRecord, CoverageStore, RecordRead};
use crate::result::{CovError, CovResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A data file that contributed nothing to a combine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Path of the file
    pub path: PathBuf,
    /// Why it was skipped
    pub reason: String,
}

/// Outcome of [`CoverageStore::combine_parallel_data`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombineReport {
    /// Files whose data was merged, in sorted order
    pub merged: Vec<PathBuf>,
    /// Files that matched the prefix but could not be used
    pub skipped: Vec<SkippedFile>,
}

impl CombineReport {
    /// Number of merged files
    #[must_use]
    pub fn merged_count(&self) -> usize {
        self.merged.len()
    }

    /// Number of skipped files
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// True if every matching file was merged
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

impl CoverageStore {
    /// Union every data file sharing this store's file name prefix
    ///
    /// Both line and arc data are merged. Unreadable or corrupt files are
    /// skipped with a warning and listed in the report.
    ///
    /// # Errors
    ///
    /// Returns error if the data file has no file name to use as a prefix,
    /// or if its directory cannot be listed
    pub fn combine_parallel_data(&mut self) -> CovResult<CombineReport> {
        let (dir, prefix) = split_prefix(self.filename())?;
        let mut candidates = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            if !entry.file_name().to_string_lossy().starts_with(&prefix) {
                continue;
            }
            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                debug!(path = %entry.path().display(), "skipping directory");
                continue;
            }
            candidates.push(entry.path());
        }
        candidates.sort();

        let mut report = CombineReport::default();
        for path in candidates {
            match CoverageRecord::load(&path) {
                RecordRead::Decoded(record) => {
                    debug!(
                        path = %path.display(),
                        files = record.lines.len(),
                        "combining coverage data file"
                    );
                    self.merge_record(record);
                    report.merged.push(path);
                }
                RecordRead::NotFound => {
                    // removed between listing and reading
                    report.skipped.push(SkippedFile {
                        path,
                        reason: "file vanished before it could be read".to_string(),
                    });
                }
                RecordRead::Unreadable { reason } | RecordRead::Corrupt { reason } => {
                    warn!(path = %path.display(), %reason, "skipping unusable coverage data file");
                    report.skipped.push(SkippedFile { path, reason });
                }
            }
        }

        info!(
            prefix = %prefix,
            merged = report.merged_count(),
            skipped = report.skipped_count(),
            "combined parallel coverage data"
        );
        Ok(report)
    }
}

/// Split a data file path into the directory to scan and the name prefix
fn split_prefix(filename: &Path) -> CovResult<(PathBuf, String)> {
    let prefix = filename
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| CovError::invalid_path(filename, "no file name to use as a prefix"))?;
    let dir = match filename.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, prefix))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_split_prefix_absolute() {
        let (dir, prefix) = split_prefix(Path::new("/data/runs/.coverage")).unwrap();
        assert_eq!(dir, PathBuf::from("/data/runs"));
        assert_eq!(prefix, ".coverage");
    }

    #[test]
    fn test_split_prefix_bare_name_uses_current_dir() {
        let (dir, prefix) = split_prefix(Path::new("cov")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(prefix, "cov");
    }

    #[test]
    fn test_split_prefix_root_is_invalid() {
        let err = split_prefix(Path::new("/")).unwrap_err();
        assert!(matches!(err, CovError::InvalidPath { .. }));
    }

    #[test]
    fn test_report_counts() {
        let report = CombineReport {
            merged: vec![PathBuf::from("a"), PathBuf::from("b")],
            skipped: vec![SkippedFile {
                path: PathBuf::from("c"),
                reason: "bad".to_string(),
            }],
        };
        assert_eq!(report.merged_count(), 2);
        assert_eq!(report.skipped_count(), 1);
        assert!(!report.is_clean());
        assert!(CombineReport::default().is_clean());
    }
}
