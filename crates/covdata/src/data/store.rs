//! Coverage Store
//!
//! In-memory accumulation of executed lines and arcs per file, plus the
//! file storage that lets independent runs be combined later.

use super::{raw_data, ArcPair, ArcSet, CoverageRecord, LineNo, LineSet};
use crate::config::StoreConfig;
use crate::result::CovResult;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Collected coverage data and its file storage
///
/// One owner accumulates into a store. Nothing touches disk until
/// [`Self::write`], [`Self::read`], [`Self::erase`] or
/// [`Self::combine_parallel_data`] is called.
#[derive(Debug, Clone)]
pub struct CoverageStore {
    /// Absolute data file path, fixed at construction
    filename: PathBuf,
    /// Collector label written into records
    collector: Option<String>,
    /// Whether the file system is used at all
    use_file: bool,
    /// Executed lines per file
    lines: BTreeMap<String, LineSet>,
    /// Observed arcs per file
    arcs: BTreeMap<String, ArcSet>,
}

impl CoverageStore {
    /// Create an empty store from the given configuration
    ///
    /// # Errors
    ///
    /// Returns error if the data file path cannot be made absolute
    pub fn new(config: StoreConfig) -> CovResult<Self> {
        let filename = config.resolve_path()?;
        Ok(Self::at_path(filename, config))
    }

    /// Create an empty store with the default configuration
    ///
    /// # Errors
    ///
    /// Returns error if the data file path cannot be made absolute
    pub fn with_defaults() -> CovResult<Self> {
        Self::new(StoreConfig::default())
    }

    /// Create an empty store using an already resolved path
    #[must_use]
    pub fn at_path(filename: impl Into<PathBuf>, config: StoreConfig) -> Self {
        Self {
            filename: filename.into(),
            collector: config.collector,
            use_file: config.use_file,
            lines: BTreeMap::new(),
            arcs: BTreeMap::new(),
        }
    }

    /// The resolved data file path
    #[must_use]
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// The configured collector label
    #[must_use]
    pub fn collector(&self) -> Option<&str> {
        self.collector.as_deref()
    }

    /// Whether file storage is enabled
    #[must_use]
    pub fn use_file(&self) -> bool {
        self.use_file
    }

    /// Enable or disable file storage
    pub fn set_use_file(&mut self, enabled: bool) {
        self.use_file = enabled;
    }

    /// True if no lines or arcs have been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.arcs.is_empty()
    }

    /// Replace in-memory data with the data file's contents
    ///
    /// A missing or damaged data file leaves the store empty. With file
    /// storage disabled the store is simply cleared.
    pub fn read(&mut self) {
        if self.use_file {
            let path = self.filename.clone();
            self.read_file(&path);
        } else {
            self.clear();
        }
    }

    /// Replace in-memory data with the contents of `path`
    ///
    /// A missing or damaged file leaves the store empty.
    pub fn read_file(&mut self, path: &Path) {
        let record = CoverageRecord::load(path).into_record_logged(path);
        self.clear();
        self.merge_record(record);
        debug!(path = %path.display(), files = self.lines.len(), "read coverage data");
    }

    /// Write in-memory data to the data file
    ///
    /// Does nothing when file storage is disabled.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be written
    pub fn write(&self) -> CovResult<()> {
        if self.use_file {
            self.write_file(&self.filename)?;
        }
        Ok(())
    }

    /// Write in-memory data to `path`, replacing any existing file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be written
    pub fn write_file(&self, path: &Path) -> CovResult<()> {
        self.to_record().save(path)
    }

    /// Clear in-memory data and delete the data file
    ///
    /// The file is only touched when file storage is enabled; memory is
    /// cleared either way.
    ///
    /// # Errors
    ///
    /// Returns error if an existing data file cannot be removed
    pub fn erase(&mut self) -> CovResult<()> {
        self.clear();
        if self.use_file {
            match std::fs::remove_file(&self.filename) {
                Ok(()) => debug!(path = %self.filename.display(), "erased coverage data file"),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Undecoded contents of `path`, for inspection
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed
    pub fn raw_data(path: &Path) -> CovResult<serde_json::Value> {
        raw_data(path)
    }

    /// Build the record [`Self::write`] would store
    ///
    /// `arcs` only lists files with at least one arc.
    #[must_use]
    pub fn to_record(&self) -> CoverageRecord {
        let arcs = self
            .arcs
            .iter()
            .filter(|(_, set)| !set.is_empty())
            .map(|(file, set)| (file.clone(), set.iter().copied().collect()))
            .collect();

        CoverageRecord {
            collector: self.collector.clone(),
            lines: self.line_data(),
            arcs,
        }
    }

    /// Union a decoded record into this store
    pub fn merge_record(&mut self, record: CoverageRecord) {
        self.add_line_data(record.lines);
        self.add_arc_data(record.arcs);
    }

    /// Add executed lines, unioned into each file's existing set
    pub fn add_line_data<I, F, L>(&mut self, line_data: I)
    where
        I: IntoIterator<Item = (F, L)>,
        F: Into<String>,
        L: IntoIterator<Item = LineNo>,
    {
        for (file, linenos) in line_data {
            self.lines.entry(file.into()).or_default().extend(linenos);
        }
    }

    /// Add observed arcs, unioned into each file's existing set
    pub fn add_arc_data<I, F, A>(&mut self, arc_data: I)
    where
        I: IntoIterator<Item = (F, A)>,
        F: Into<String>,
        A: IntoIterator,
        A::Item: Into<ArcPair>,
    {
        for (file, arcs) in arc_data {
            self.arcs
                .entry(file.into())
                .or_default()
                .extend(arcs.into_iter().map(Into::into));
        }
    }

    /// Sorted executed lines per file
    #[must_use]
    pub fn line_data(&self) -> BTreeMap<String, Vec<LineNo>> {
        self.lines
            .iter()
            .map(|(file, set)| (file.clone(), set.iter().copied().collect()))
            .collect()
    }

    /// Sorted arcs per file
    #[must_use]
    pub fn arc_data(&self) -> BTreeMap<String, Vec<ArcPair>> {
        self.arcs
            .iter()
            .map(|(file, set)| (file.clone(), set.iter().copied().collect()))
            .collect()
    }

    /// Files with line data
    #[must_use]
    pub fn executed_files(&self) -> Vec<&str> {
        self.lines.keys().map(String::as_str).collect()
    }

    /// Executed lines in `file`, empty if the file is unknown
    #[must_use]
    pub fn executed_lines(&self, file: &str) -> LineSet {
        self.lines.get(file).cloned().unwrap_or_default()
    }

    /// Observed arcs in `file`, empty if the file is unknown
    #[must_use]
    pub fn executed_arcs(&self, file: &str) -> ArcSet {
        self.arcs.get(file).cloned().unwrap_or_default()
    }

    /// Number of executed lines per file
    ///
    /// Keys are full paths if `full_path` is set, otherwise base names.
    /// Files are visited in sorted path order, so when two paths share a
    /// base name the one sorting last wins.
    #[must_use]
    pub fn summary(&self, full_path: bool) -> BTreeMap<String, usize> {
        let mut summary = BTreeMap::new();
        for (file, lines) in &self.lines {
            let key = if full_path {
                file.clone()
            } else {
                base_name(file)
            };
            if let Some(previous) = summary.insert(key, lines.len()) {
                debug!(file = %file, previous, "base name collision in summary");
            }
        }
        summary
    }

    /// Drop all in-memory data
    fn clear(&mut self) {
        self.lines.clear();
        self.arcs.clear();
    }
}

/// Final path component of `file`, or `file` itself if there is none
fn base_name(file: &str) -> String {
    Path::new(file)
        .file_name()
        .map_or_else(|| file.to_string(), |name| name.to_string_lossy().into_owned())
}
