//! Tree model, safety guard, and the recursive walker that builds it.

mod guard;
mod node;
mod walker;

pub use guard::{Admission, ScanContext, ScanStats, is_safe_symlink};
pub use node::{FileContent, FsNode};
pub use walker::TreeWalker;
