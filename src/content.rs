//! Content classification and text extraction, plus the traits for the
//! external collaborators the renderer relies on.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// How many leading bytes are sampled to classify a file as text or binary.
const SAMPLE_LEN: u64 = 1024;

/// Decodes a structured notebook document (`.ipynb`) into renderable text.
///
/// Implementations must render their own failures into the returned string;
/// this boundary never propagates errors.
pub trait NotebookDecoder {
    fn decode(&self, path: &Path) -> String;
}

/// Estimates the token count of a rendered digest. Failures are tolerated by
/// the caller, which simply omits the estimate.
pub trait TokenCounter {
    fn count(&self, text: &str) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}

/// Classify a file as text by sampling its first [`SAMPLE_LEN`] bytes.
///
/// A file is text when every sampled byte is printable or one of the common
/// control bytes (bell, backspace, tab, newline, form feed, carriage return,
/// escape). Any read failure classifies the file as non-text.
pub fn is_text_file(path: &Path) -> bool {
    let mut sample = Vec::with_capacity(SAMPLE_LEN as usize);
    let read = File::open(path).and_then(|f| f.take(SAMPLE_LEN).read_to_end(&mut sample));
    if read.is_err() {
        return false;
    }
    sample.iter().all(|&b| is_text_byte(b))
}

fn is_text_byte(byte: u8) -> bool {
    byte >= 0x20 || matches!(byte, 7 | 8 | 9 | 10 | 12 | 13 | 27)
}

/// Read a file's renderable text.
///
/// Notebook files are handed to the decoder collaborator when one is
/// supplied; everything else is decoded as UTF-8 with undecodable sequences
/// replaced rather than failing. An I/O error yields an inline placeholder so
/// the digest still renders.
pub fn read_file_content(path: &Path, decoder: Option<&dyn NotebookDecoder>) -> String {
    if path.extension().is_some_and(|ext| ext == "ipynb") {
        if let Some(decoder) = decoder {
            return decoder.decode(path);
        }
    }
    match std::fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => format!("Error reading file: {e}"),
    }
}
