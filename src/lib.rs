//! repotext - flatten a repository checkout into a bounded, deterministic
//! text digest: a tree diagram, concatenated file contents, and a summary
//! with a token estimate.

pub mod config;
pub mod content;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod output;
pub mod tree;

pub use config::{IngestConfig, ScanLimits, TargetKind};
pub use content::{NotebookDecoder, TokenCounter};
pub use error::IngestError;
pub use ingest::{Ingester, ingest};
pub use output::{Digest, print_json};
pub use tree::{FileContent, FsNode, ScanContext, TreeWalker};
