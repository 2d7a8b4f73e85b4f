//! JSON serialization of a digest.

use std::io;

use super::Digest;

/// Print the digest as pretty-printed JSON to stdout.
pub fn print_json(digest: &Digest) -> io::Result<()> {
    let json = serde_json::to_string_pretty(digest).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}
