//! Safety guard: resource ceilings, cycle detection, and symlink containment.
//!
//! Every check happens before the corresponding resource is committed, so the
//! configured ceilings are never overshot. A refusal anywhere degrades to
//! "stop admitting more" and the scan keeps whatever it already gathered.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ScanLimits;

/// Running totals for one scan. Monotonically non-decreasing.
#[derive(Debug, Default, Clone)]
pub struct ScanStats {
    pub total_files: usize,
    pub total_size: u64,
}

/// The guard's verdict on admitting a path into the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admit,
    DepthExceeded,
    TooManyFiles,
    SizeExceeded,
    AlreadyVisited,
    Unresolvable,
}

impl Admission {
    pub fn is_admit(self) -> bool {
        matches!(self, Admission::Admit)
    }
}

/// Mutable state threaded by reference through one recursive scan: the
/// running stats plus the set of canonical directory paths already admitted.
/// One scan, one context; independent scans never share state.
pub struct ScanContext {
    limits: ScanLimits,
    pub stats: ScanStats,
    visited: HashSet<PathBuf>,
}

impl ScanContext {
    pub fn new(limits: ScanLimits) -> Self {
        Self {
            limits,
            stats: ScanStats::default(),
            visited: HashSet::new(),
        }
    }

    /// Gate a directory before descending into it. On `Admit` its canonical
    /// path is recorded in the visited set; a later encounter of the same
    /// physical directory (through any logical path) is a cycle.
    pub fn admit_dir(&mut self, path: &Path, depth: usize) -> Admission {
        if depth > self.limits.max_depth {
            debug!(path = %path.display(), max_depth = self.limits.max_depth, "skipping deep directory");
            return Admission::DepthExceeded;
        }
        if self.stats.total_files >= self.limits.max_files {
            debug!(path = %path.display(), "file ceiling reached, refusing directory");
            return Admission::TooManyFiles;
        }
        if self.stats.total_size >= self.limits.max_total_size {
            debug!(path = %path.display(), "size ceiling reached, refusing directory");
            return Admission::SizeExceeded;
        }
        let Ok(canonical) = path.canonicalize() else {
            debug!(path = %path.display(), "cannot resolve directory, refusing");
            return Admission::Unresolvable;
        };
        if !self.visited.insert(canonical) {
            debug!(path = %path.display(), "skipping already visited path");
            return Admission::AlreadyVisited;
        }
        Admission::Admit
    }

    /// Gate one file of `size` bytes. Both ceilings are checked before the
    /// stats move; on `Admit` the file is committed.
    pub fn admit_file(&mut self, path: &Path, size: u64) -> Admission {
        if self.stats.total_size + size > self.limits.max_total_size {
            debug!(path = %path.display(), size, "skipping file: would exceed total size ceiling");
            return Admission::SizeExceeded;
        }
        if self.stats.total_files + 1 > self.limits.max_files {
            debug!(path = %path.display(), "skipping file: file ceiling reached");
            return Admission::TooManyFiles;
        }
        self.stats.total_files += 1;
        self.stats.total_size += size;
        Admission::Admit
    }

    /// Whether a canonical path was already admitted in this scan.
    pub fn already_visited(&self, canonical: &Path) -> bool {
        self.visited.contains(canonical)
    }
}

/// A symlink may be followed only when its fully resolved target sits at or
/// below the resolved scan root. Resolution failures (broken or
/// self-referential links) count as unsafe.
pub fn is_safe_symlink(link: &Path, resolved_root: &Path) -> bool {
    match link.canonicalize() {
        Ok(target) => target.starts_with(resolved_root),
        Err(_) => false,
    }
}
