//! Scan configuration types.

use std::path::PathBuf;

/// Default ceiling on a single file's content inclusion (10 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default directory traversal depth ceiling.
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// Default ceiling on the number of files admitted per scan.
pub const DEFAULT_MAX_FILES: usize = 10_000;

/// Default ceiling on total bytes admitted per scan (500 MiB).
pub const DEFAULT_MAX_TOTAL_SIZE: u64 = 500 * 1024 * 1024;

/// Whether the scan target is a directory tree or a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetKind {
    #[default]
    Directory,
    File,
}

/// Hard ceilings enforced by the scan guard. Once a ceiling is reached the
/// scan stops admitting new entries but still returns what it gathered.
#[derive(Debug, Clone)]
pub struct ScanLimits {
    pub max_depth: usize,
    pub max_files: usize,
    pub max_total_size: u64,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_files: DEFAULT_MAX_FILES,
            max_total_size: DEFAULT_MAX_TOTAL_SIZE,
        }
    }
}

/// Validated configuration for one ingestion. Immutable for the duration of
/// a scan; the caller (CLI or service layer) is responsible for having
/// materialized `root` on local storage beforehand.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Absolute path of the materialized checkout.
    pub root: PathBuf,
    /// Slash-prefixed path scoping the walk inside `root` (`"/"` = whole tree).
    pub subpath: String,
    /// Logical identifier shown in the summary, e.g. `owner/repo`.
    pub slug: String,
    /// Include glob patterns; empty means everything is included.
    pub include_patterns: Vec<String>,
    /// Exclude glob patterns; matches are never traversed or rendered.
    pub exclude_patterns: Vec<String>,
    /// Files larger than this keep their tree entry but lose their content.
    pub max_file_size: u64,
    pub target: TargetKind,
    pub branch: Option<String>,
    pub commit: Option<String>,
    pub limits: ScanLimits,
}

impl IngestConfig {
    pub fn new(root: impl Into<PathBuf>, slug: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            subpath: "/".to_string(),
            slug: slug.into(),
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            target: TargetKind::Directory,
            branch: None,
            commit: None,
            limits: ScanLimits::default(),
        }
    }

    /// Absolute path the scan actually starts at: `root` joined with the
    /// trimmed subpath.
    pub fn target_path(&self) -> PathBuf {
        let sub = self.subpath.trim_start_matches('/');
        if sub.is_empty() {
            self.root.clone()
        } else {
            self.root.join(sub)
        }
    }
}
