//! Renderers that turn the tree model into the digest strings.
//!
//! Everything here is a pure function over the scanned tree; the walker never
//! feeds back from rendering.

mod content;
mod json;
mod summary;
mod tree;

pub use content::render_content;
pub use json::print_json;
pub use summary::{append_token_estimate, format_grouped, format_token_count, render_summary};
pub use tree::render_tree;

use serde::Serialize;

/// The bounded text artifact produced by one ingestion.
#[derive(Debug, Clone, Serialize)]
pub struct Digest {
    pub summary: String,
    pub tree: String,
    pub content: String,
    /// Files admitted into the digest.
    pub file_count: usize,
    /// Directories admitted into the digest.
    pub dir_count: usize,
}
