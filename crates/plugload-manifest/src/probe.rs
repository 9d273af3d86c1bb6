//! Filesystem existence probe.

use std::fs;
use std::io;
use std::path::Path;

/// Report whether `path` is effectively absent: missing entirely, an empty
/// directory, or a zero-length file.
///
/// A missing path (any stat failure) is a normal outcome, not an error. A
/// `read_dir` failure on an existing directory propagates instead of being
/// treated as "empty" — an unreadable plugin must never be reported as a
/// confirmed-empty one. Callers decide whether to skip or abort.
pub fn is_empty_or_missing(path: &Path) -> io::Result<bool> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(_) => return Ok(true),
    };

    if metadata.is_dir() {
        let mut entries = fs::read_dir(path)?;
        return Ok(entries.next().is_none());
    }

    Ok(metadata.len() == 0)
}
