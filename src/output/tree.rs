//! Tree-diagram rendering with box-drawing connectors.

use crate::tree::FsNode;

/// Render the tree diagram for a scanned subtree. `slug` substitutes for a
/// root node whose own name is empty, so the diagram always has an anchor
/// line the reader can recognize.
pub fn render_tree(root: &FsNode, slug: &str) -> String {
    let mut out = String::from("Directory structure:\n");
    render_node(root, slug, "", true, &mut out);
    out
}

fn render_node(node: &FsNode, slug: &str, prefix: &str, is_last: bool, out: &mut String) {
    let name = if node.name().is_empty() {
        slug
    } else {
        node.name()
    };

    let mut rendered = false;
    if !name.is_empty() {
        out.push_str(prefix);
        out.push_str(if is_last { "└── " } else { "├── " });
        out.push_str(name);
        if node.is_dir() {
            out.push('/');
        }
        out.push('\n');
        rendered = true;
    }

    if let FsNode::Dir { children, .. } = node {
        let child_prefix = if rendered {
            format!("{prefix}{}", if is_last { "    " } else { "│   " })
        } else {
            prefix.to_string()
        };
        for (i, child) in children.iter().enumerate() {
            render_node(child, slug, &child_prefix, i == children.len() - 1, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::FileContent;
    use std::path::PathBuf;

    fn file(name: &str) -> FsNode {
        FsNode::File {
            name: name.to_string(),
            rel_path: PathBuf::from(name),
            size: 1,
            content: FileContent::Text("x".to_string()),
        }
    }

    fn dir(name: &str, children: Vec<FsNode>) -> FsNode {
        let file_count = children.iter().map(FsNode::file_count).sum();
        FsNode::Dir {
            name: name.to_string(),
            rel_path: PathBuf::from(name),
            size: 0,
            file_count,
            dir_count: 0,
            has_filtered_content: false,
            children,
        }
    }

    #[test]
    fn test_connectors_and_trailing_slash() {
        let root = dir(
            "repo",
            vec![file("a.txt"), dir("src", vec![file("main.rs")])],
        );
        let tree = render_tree(&root, "owner/repo");
        assert_eq!(
            tree,
            "Directory structure:\n\
             └── repo/\n    \
                 ├── a.txt\n    \
                 └── src/\n        \
                     └── main.rs\n"
        );
    }

    #[test]
    fn test_empty_root_name_uses_slug() {
        let root = dir("", vec![file("a.txt")]);
        let tree = render_tree(&root, "owner/repo");
        assert!(tree.contains("└── owner/repo/\n"));
    }
}
