//! Recursive directory scanner that builds the in-memory tree model.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::IngestConfig;
use crate::content::{NotebookDecoder, is_text_file, read_file_content};
use crate::filter::{matches_include, should_exclude};

use super::guard::{Admission, ScanContext, is_safe_symlink};
use super::node::{FileContent, FsNode, sort_children};

/// Walks a directory tree under the configured filters and ceilings. One
/// walker handles one scan; the mutable [`ScanContext`] is threaded through
/// the recursion by reference.
pub struct TreeWalker<'a> {
    config: &'a IngestConfig,
    decoder: Option<&'a dyn NotebookDecoder>,
    /// Canonicalized scan root, used for symlink containment and as a
    /// fallback base when relativizing resolved paths.
    resolved_root: PathBuf,
}

impl<'a> TreeWalker<'a> {
    pub fn new(config: &'a IngestConfig, decoder: Option<&'a dyn NotebookDecoder>) -> Self {
        let resolved_root = config
            .root
            .canonicalize()
            .unwrap_or_else(|_| config.root.clone());
        Self {
            config,
            decoder,
            resolved_root,
        }
    }

    /// Scan the subtree rooted at `path`. Returns `None` when the guard
    /// refuses the directory itself; refusals further down degrade to partial
    /// results instead.
    pub fn scan(&self, path: &Path, ctx: &mut ScanContext) -> Option<FsNode> {
        self.scan_directory(path, 0, ctx)
    }

    fn scan_directory(&self, path: &Path, depth: usize, ctx: &mut ScanContext) -> Option<FsNode> {
        if !ctx.admit_dir(path, depth).is_admit() {
            return None;
        }

        let mut children: Vec<FsNode> = Vec::new();
        let mut size = 0u64;
        let mut file_count = 0usize;
        let mut dir_count = 0usize;
        let mut has_filtered_content = false;

        // A directory we cannot enumerate contributes an empty node rather
        // than failing the scan.
        let entries = fs::read_dir(path)
            .map_err(|e| warn!(path = %path.display(), error = %e, "cannot enumerate directory"))
            .ok();

        if let Some(entries) = entries {
            let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
            // Admission order must be stable, otherwise the ceilings make the
            // output depend on filesystem enumeration order.
            entries.sort_by_key(|e| e.file_name());

            for entry in entries {
                let entry_path = entry.path();

                if should_exclude(&entry_path, &self.config.root, &self.config.exclude_patterns) {
                    continue;
                }

                let Ok(meta) = fs::symlink_metadata(&entry_path) else {
                    continue;
                };
                let is_symlink = meta.file_type().is_symlink();
                // is_file() follows symlinks, so the include rule sees a
                // linked file the same way it sees a plain one.
                let is_file = entry_path.is_file();

                // Include patterns apply to files only and suppress content
                // without stopping traversal: directories are still recursed
                // so nested matches stay discoverable.
                if is_file
                    && !self.config.include_patterns.is_empty()
                    && !matches_include(&entry_path, &self.config.root, &self.config.include_patterns)
                {
                    has_filtered_content = true;
                    continue;
                }

                if is_symlink {
                    if !is_safe_symlink(&entry_path, &self.resolved_root) {
                        warn!(path = %entry_path.display(), "skipping symlink escaping the scan root");
                        continue;
                    }
                    let Ok(target) = entry_path.canonicalize() else {
                        continue;
                    };
                    if target.is_file() {
                        match self.build_file_node(&entry_path, &target, ctx) {
                            Ok(node) => {
                                size += node.size();
                                file_count += 1;
                                children.push(node);
                            }
                            Err(Admission::TooManyFiles) => break,
                            Err(_) => continue,
                        }
                    } else if target.is_dir() {
                        if ctx.already_visited(&target) {
                            debug!(path = %entry_path.display(), "skipping symlink to visited directory");
                            continue;
                        }
                        if let Some(mut sub) = self.scan_directory(&target, depth + 1, ctx) {
                            // The rendered tree shows the link the user
                            // browsed, not its physical target.
                            sub.rename(file_name_of(&entry_path), self.rel_path(&entry_path));
                            if self.config.include_patterns.is_empty() || sub.file_count() > 0 {
                                size += sub.size();
                                file_count += sub.file_count();
                                dir_count += 1 + sub.dir_count();
                                children.push(sub);
                            }
                        }
                    }
                } else if is_file {
                    match self.build_file_node(&entry_path, &entry_path, ctx) {
                        Ok(node) => {
                            size += node.size();
                            file_count += 1;
                            children.push(node);
                        }
                        Err(Admission::TooManyFiles) => break,
                        Err(_) => continue,
                    }
                } else if entry_path.is_dir() {
                    if let Some(sub) = self.scan_directory(&entry_path, depth + 1, ctx) {
                        // A recursed subtree is attached only when it still
                        // holds at least one file after include filtering, or
                        // when no include set is active.
                        if self.config.include_patterns.is_empty() || sub.file_count() > 0 {
                            size += sub.size();
                            file_count += sub.file_count();
                            dir_count += 1 + sub.dir_count();
                            children.push(sub);
                        }
                    }
                }
            }
        }

        sort_children(&mut children);

        Some(FsNode::Dir {
            name: file_name_of(path),
            rel_path: self.rel_path(path),
            children,
            size,
            file_count,
            dir_count,
            has_filtered_content,
        })
    }

    /// Gate one file through the guard and build its node. `display_path` is
    /// the logical location (the symlink itself for linked files),
    /// `data_path` is where the bytes live.
    fn build_file_node(
        &self,
        display_path: &Path,
        data_path: &Path,
        ctx: &mut ScanContext,
    ) -> Result<FsNode, Admission> {
        let size = match fs::metadata(data_path) {
            Ok(meta) => meta.len(),
            Err(e) => {
                debug!(path = %data_path.display(), error = %e, "cannot stat file, skipping");
                return Err(Admission::Unresolvable);
            }
        };
        match ctx.admit_file(display_path, size) {
            Admission::Admit => {}
            refusal => return Err(refusal),
        }
        Ok(FsNode::File {
            name: file_name_of(display_path),
            rel_path: self.rel_path(display_path),
            size,
            content: self.file_content(data_path, size),
        })
    }

    fn file_content(&self, path: &Path, size: u64) -> FileContent {
        if size > self.config.max_file_size {
            return FileContent::Oversize;
        }
        if is_text_file(path) {
            FileContent::Text(read_file_content(path, self.decoder))
        } else {
            FileContent::NonText
        }
    }

    fn rel_path(&self, path: &Path) -> PathBuf {
        if let Ok(rel) = path.strip_prefix(&self.config.root) {
            return rel.to_path_buf();
        }
        // Resolved symlink targets sit under the canonical root even when the
        // configured root spelling differs.
        path.strip_prefix(&self.resolved_root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
