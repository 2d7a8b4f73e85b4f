//! Entry point: dispatches single-file vs directory ingestion and assembles
//! the digest.

use std::fs;
use std::path::Path;

use crate::config::{IngestConfig, TargetKind};
use crate::content::{NotebookDecoder, TokenCounter, is_text_file, read_file_content};
use crate::error::IngestError;
use crate::output::{self, Digest, format_grouped};
use crate::tree::{FileContent, FsNode, ScanContext, TreeWalker};

/// Placeholder rendered in single-file mode when the file exceeds the
/// content-inclusion ceiling.
const CONTENT_IGNORED: &str = "[Content ignored: file too large]";

/// Runs ingestion over an already materialized source tree.
///
/// The notebook decoder and token counter are optional collaborators:
/// without a decoder, `.ipynb` files are read as plain text; without a
/// counter, the token-estimate line is omitted from the summary.
#[derive(Default)]
pub struct Ingester<'a> {
    decoder: Option<&'a dyn NotebookDecoder>,
    token_counter: Option<&'a dyn TokenCounter>,
}

impl<'a> Ingester<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decoder(mut self, decoder: &'a dyn NotebookDecoder) -> Self {
        self.decoder = Some(decoder);
        self
    }

    pub fn with_token_counter(mut self, counter: &'a dyn TokenCounter) -> Self {
        self.token_counter = Some(counter);
        self
    }

    /// Produce the summary, tree diagram, and content strings for the
    /// configured target. Ceiling breaches and unreadable entries degrade to
    /// partial results; only configuration-level problems return an error.
    pub fn ingest(&self, config: &IngestConfig) -> Result<Digest, IngestError> {
        let target = config.target_path();
        if !target.exists() {
            return Err(IngestError::TargetNotFound {
                slug: config.slug.clone(),
            });
        }
        match config.target {
            TargetKind::File => self.ingest_file(config, &target),
            TargetKind::Directory => self.ingest_directory(config, &target),
        }
    }

    fn ingest_directory(&self, config: &IngestConfig, path: &Path) -> Result<Digest, IngestError> {
        let walker = TreeWalker::new(config, self.decoder);
        let mut ctx = ScanContext::new(config.limits.clone());
        let root = walker
            .scan(path, &mut ctx)
            .ok_or_else(|| IngestError::EmptyDigest(path.to_path_buf()))?;

        let tree = output::render_tree(&root, &config.slug);
        let content = output::render_content(&root);
        let mut summary = output::render_summary(config, root.file_count());
        output::append_token_estimate(
            &mut summary,
            self.token_counter,
            &format!("{tree}{content}"),
        );

        Ok(Digest {
            summary,
            tree,
            content,
            file_count: root.file_count(),
            dir_count: root.dir_count(),
        })
    }

    fn ingest_file(&self, config: &IngestConfig, path: &Path) -> Result<Digest, IngestError> {
        let meta = fs::metadata(path)?;
        if !meta.is_file() {
            return Err(IngestError::NotAFile(path.to_path_buf()));
        }
        if !is_text_file(path) {
            return Err(IngestError::NotTextFile(path.to_path_buf()));
        }

        let size = meta.len();
        let text = if size > config.max_file_size {
            CONTENT_IGNORED.to_string()
        } else {
            read_file_content(path, self.decoder)
        };
        let line_count = text.lines().count() as u64;

        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let rel_path = path
            .strip_prefix(&config.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf());

        let node = FsNode::File {
            name: name.clone(),
            rel_path,
            size,
            content: FileContent::Text(text),
        };
        let content = output::render_content(&node);
        let tree = format!("Directory structure:\n└── {name}");

        let mut summary = format!(
            "Repository: {}\nFile: {}\nSize: {} bytes\nLines: {}\n",
            config.slug,
            name,
            format_grouped(size),
            format_grouped(line_count),
        );
        output::append_token_estimate(&mut summary, self.token_counter, &content);

        Ok(Digest {
            summary,
            tree,
            content,
            file_count: 1,
            dir_count: 0,
        })
    }
}

/// Convenience wrapper: ingest with no external collaborators.
pub fn ingest(config: &IngestConfig) -> Result<Digest, IngestError> {
    Ingester::new().ingest(config)
}
