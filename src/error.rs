//! Error taxonomy for ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an ingestion outright.
///
/// Only configuration-level problems live here. Resource-ceiling breaches,
/// cycles, and unreadable files degrade to skips or placeholder text inside
/// the digest instead of failing the whole operation.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The resolved target path does not exist on local storage.
    #[error("{slug} cannot be found")]
    TargetNotFound { slug: String },

    /// Single-file mode was requested on something that is not a regular file.
    #[error("path {} is not a file", .0.display())]
    NotAFile(PathBuf),

    /// Single-file mode was requested on a file classified as binary.
    #[error("file {} is not a text file", .0.display())]
    NotTextFile(PathBuf),

    /// The directory scan produced no tree at all.
    #[error("no files found in {}", .0.display())]
    EmptyDigest(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
