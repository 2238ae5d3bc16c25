//! Prefix scan over a single tag index file.
//!
//! Index files are assumed to be sorted by tag name. The scan is linear up to
//! the first match; once at least one entry has matched, the first line that
//! does not match ends the scan.

use super::TagEntry;
use super::parser::parse_line;
use crate::error::{TagError, TagResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Append every entry of `index` whose tag starts with `query` to `matches`.
///
/// Returns the number of appended entries. Malformed lines are skipped; a
/// file that cannot be opened or read yields [`TagError::IndexRead`].
pub fn scan_index(index: &Path, query: &str, matches: &mut Vec<TagEntry>) -> TagResult<usize> {
    let file = File::open(index).map_err(|e| TagError::index_read(index, e))?;
    let index_dir = index_directory(index);
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut found = 0;
    let mut lines_read = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| TagError::index_read(index, e))?;
        if read == 0 {
            break;
        }
        lines_read += 1;

        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        let entry = line
            .starts_with(query)
            .then(|| parse_line(&line, &index_dir))
            .flatten()
            .filter(|entry| entry.name.starts_with(query));

        match entry {
            Some(entry) => {
                matches.push(entry);
                found += 1;
            }
            // Sorted input: nothing past the end of the matching run
            None if found > 0 => break,
            None => {}
        }
    }

    debug!(
        "scanned {} lines of '{}' for '{}': {} matches",
        lines_read,
        index.display(),
        query,
        found
    );
    Ok(found)
}

/// Directory that relative paths inside `index` are resolved against.
fn index_directory(index: &Path) -> PathBuf {
    let absolute = std::path::absolute(index).unwrap_or_else(|_| index.to_path_buf());
    absolute
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}
