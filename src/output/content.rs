//! Concatenated file-contents rendering.

use std::fmt::Write;

use crate::tree::{FileContent, FsNode};

const SEPARATOR_LEN: usize = 48;

/// Concatenate every renderable file in pre-order. Binary and oversize files
/// are omitted entirely; they still appear in the tree diagram and the
/// aggregate counts. Empty files are listed in the tree but add nothing here.
pub fn render_content(root: &FsNode) -> String {
    let mut out = String::new();
    append_node(root, &mut out);
    out
}

fn append_node(node: &FsNode, out: &mut String) {
    match node {
        FsNode::File {
            rel_path,
            content: FileContent::Text(text),
            ..
        } if !text.is_empty() => {
            let separator = "=".repeat(SEPARATOR_LEN);
            let _ = writeln!(out, "{separator}");
            let _ = writeln!(out, "File: {}", rel_path.display());
            let _ = writeln!(out, "{separator}");
            let _ = write!(out, "{text}\n\n");
        }
        FsNode::Dir { children, .. } => {
            for child in children {
                append_node(child, out);
            }
        }
        FsNode::File { .. } => {}
    }
}
