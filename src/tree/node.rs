//! In-memory tree model produced by a scan.

use std::path::PathBuf;

/// How a file's bytes are represented in the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Renderable text (possibly an inline read-error placeholder).
    Text(String),
    /// Classified as binary; appears in the tree but never in the content
    /// string.
    NonText,
    /// Larger than the content-inclusion ceiling; counted and listed but its
    /// bytes are never read.
    Oversize,
}

/// One node of the scanned tree. Paths are always relative to the scan root;
/// nodes reached through a symlink carry the link's own name and location,
/// not the target's, so the rendering reflects what the user browsed.
#[derive(Debug, Clone)]
pub enum FsNode {
    File {
        name: String,
        rel_path: PathBuf,
        size: u64,
        content: FileContent,
    },
    Dir {
        name: String,
        rel_path: PathBuf,
        /// Children in display order (see [`sort_children`]).
        children: Vec<FsNode>,
        /// Sum of descendant file sizes.
        size: u64,
        file_count: usize,
        dir_count: usize,
        /// At least one file here was suppressed by an include pattern.
        /// Diagnostic only; never used for pruning.
        has_filtered_content: bool,
    },
}

impl FsNode {
    pub fn name(&self) -> &str {
        match self {
            FsNode::File { name, .. } | FsNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, FsNode::Dir { .. })
    }

    pub fn size(&self) -> u64 {
        match self {
            FsNode::File { size, .. } | FsNode::Dir { size, .. } => *size,
        }
    }

    pub fn file_count(&self) -> usize {
        match self {
            FsNode::File { .. } => 1,
            FsNode::Dir { file_count, .. } => *file_count,
        }
    }

    pub fn dir_count(&self) -> usize {
        match self {
            FsNode::File { .. } => 0,
            FsNode::Dir { dir_count, .. } => *dir_count,
        }
    }

    /// Rewrite this node's identity to a symlink's name and location.
    pub(crate) fn rename(&mut self, new_name: String, new_rel_path: PathBuf) {
        match self {
            FsNode::File { name, rel_path, .. } | FsNode::Dir { name, rel_path, .. } => {
                *name = new_name;
                *rel_path = new_rel_path;
            }
        }
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Display-order rank: README.md, non-hidden files, hidden files, non-hidden
/// directories, hidden directories.
fn rank(node: &FsNode) -> u8 {
    match node {
        FsNode::File { name, .. } if name.eq_ignore_ascii_case("readme.md") => 0,
        FsNode::File { name, .. } if !is_hidden(name) => 1,
        FsNode::File { .. } => 2,
        FsNode::Dir { name, .. } if !is_hidden(name) => 3,
        FsNode::Dir { .. } => 4,
    }
}

/// Put a directory's children into their deterministic display order, each
/// rank group sorted by name. The tree diagram and the content concatenation
/// both depend on this order for reproducible output.
pub(crate) fn sort_children(children: &mut [FsNode]) {
    children.sort_by(|a, b| rank(a).cmp(&rank(b)).then_with(|| a.name().cmp(b.name())));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> FsNode {
        FsNode::File {
            name: name.to_string(),
            rel_path: PathBuf::from(name),
            size: 0,
            content: FileContent::Text(String::new()),
        }
    }

    fn dir(name: &str) -> FsNode {
        FsNode::Dir {
            name: name.to_string(),
            rel_path: PathBuf::from(name),
            children: Vec::new(),
            size: 0,
            file_count: 0,
            dir_count: 0,
            has_filtered_content: false,
        }
    }

    #[test]
    fn test_display_order() {
        let mut children = vec![
            dir(".github"),
            file("zebra.txt"),
            dir("src"),
            file(".env"),
            file("README.md"),
            file("alpha.txt"),
            dir("docs"),
            file(".gitignore"),
        ];
        sort_children(&mut children);
        let names: Vec<&str> = children.iter().map(FsNode::name).collect();
        assert_eq!(
            names,
            vec![
                "README.md",
                "alpha.txt",
                "zebra.txt",
                ".env",
                ".gitignore",
                "docs",
                "src",
                ".github",
            ]
        );
    }

    #[test]
    fn test_readme_first_is_case_insensitive() {
        let mut children = vec![file("AUTHORS"), file("readme.MD")];
        sort_children(&mut children);
        assert_eq!(children[0].name(), "readme.MD");
    }

    #[test]
    fn test_rename_rewrites_identity() {
        let mut node = dir("target");
        node.rename("link".to_string(), PathBuf::from("sub/link"));
        assert_eq!(node.name(), "link");
        match node {
            FsNode::Dir { rel_path, .. } => assert_eq!(rel_path, PathBuf::from("sub/link")),
            _ => unreachable!(),
        }
    }
}
