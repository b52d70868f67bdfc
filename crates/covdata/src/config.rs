//! Store Configuration
//!
//! The data file location is resolved once, when the store is built:
//!
//! 1. explicit base name, else
//! 2. the `COVERAGE_FILE` environment variable, else
//! 3. `.coverage`
//!
//! An optional suffix is appended to whichever base was chosen and the
//! result is made absolute, so later working-directory changes do not move
//! the file.

use crate::result::{CovError, CovResult};
use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};
use uuid::Uuid;

/// Data file name used when nothing else is configured
pub const DEFAULT_DATA_FILE: &str = ".coverage";

/// Environment variable overriding the data file name
pub const DATA_FILE_ENV: &str = "COVERAGE_FILE";

/// Configuration for a [`crate::CoverageStore`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Explicit data file name
    pub base_name: Option<PathBuf>,
    /// Suffix appended to the base name
    pub suffix: Option<String>,
    /// Collector label written into records
    pub collector: Option<String>,
    /// Whether reads, writes and erases touch the file system
    pub use_file: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_name: None,
            suffix: None,
            collector: None,
            use_file: true,
        }
    }
}

impl StoreConfig {
    /// Create a builder for store config
    #[must_use]
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }

    /// Resolve the absolute data file path from this process's environment
    ///
    /// # Errors
    ///
    /// Returns error if the working directory cannot be determined
    pub fn resolve_path(&self) -> CovResult<PathBuf> {
        let cwd = std::env::current_dir().map_err(|e| CovError::WorkingDirectory {
            message: e.to_string(),
        })?;
        let env_override = std::env::var_os(DATA_FILE_ENV);
        Ok(self.resolve_path_with(env_override.as_deref(), &cwd))
    }

    /// Resolve the data file path against an explicit override and directory
    ///
    /// Empty base names and empty overrides count as unset.
    #[must_use]
    pub fn resolve_path_with(&self, env_override: Option<&OsStr>, cwd: &Path) -> PathBuf {
        let base: OsString = self
            .base_name
            .as_deref()
            .map(Path::as_os_str)
            .filter(|name| !name.is_empty())
            .or_else(|| env_override.filter(|name| !name.is_empty()))
            .unwrap_or_else(|| OsStr::new(DEFAULT_DATA_FILE))
            .to_os_string();

        let mut name = base;
        if let Some(suffix) = &self.suffix {
            name.push(suffix);
        }

        let path = PathBuf::from(name);
        let absolute = if path.is_absolute() {
            path
        } else {
            cwd.join(path)
        };
        normalize_lexically(&absolute)
    }
}

/// Builder for store configuration
#[derive(Debug)]
pub struct StoreConfigBuilder {
    base_name: Option<PathBuf>,
    suffix: Option<String>,
    collector: Option<String>,
    use_file: bool,
}

impl Default for StoreConfigBuilder {
    fn default() -> Self {
        Self {
            base_name: None,
            suffix: None,
            collector: None,
            use_file: true,
        }
    }
}

impl StoreConfigBuilder {
    /// Set the data file name
    #[must_use]
    pub fn base_name(mut self, name: impl Into<PathBuf>) -> Self {
        self.base_name = Some(name.into());
        self
    }

    /// Set the suffix appended to the data file name
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Use a suffix unique to this process, see [`parallel_suffix`]
    #[must_use]
    pub fn parallel(mut self) -> Self {
        self.suffix = Some(parallel_suffix());
        self
    }

    /// Set the collector label
    #[must_use]
    pub fn collector(mut self, collector: impl Into<String>) -> Self {
        self.collector = Some(collector.into());
        self
    }

    /// Enable or disable file storage
    #[must_use]
    pub fn use_file(mut self, enabled: bool) -> Self {
        self.use_file = enabled;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> StoreConfig {
        StoreConfig {
            base_name: self.base_name,
            suffix: self.suffix,
            collector: self.collector,
            use_file: self.use_file,
        }
    }
}

/// Suffix giving each parallel worker its own data file
///
/// Shaped `.{pid}.{random}`, so every worker's file still starts with the
/// shared base name and is picked up by
/// [`crate::CoverageStore::combine_parallel_data`].
#[must_use]
pub fn parallel_suffix() -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!(".{}.{}", std::process::id(), &random[..8])
}

/// Remove `.` and resolve `..` without touching the file system
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let _ = out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
