//! Key file loading and parsing.
//!
//! The key file is the sole source of truth for accepted keys: one key per
//! line, surrounding whitespace trimmed. Blank lines are always skipped;
//! lines starting with a comment marker are skipped when comment stripping
//! is enabled. The in-memory [`crate::KeySet`] is a cache of this file.

use crate::error::{Error, Result};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Line prefixes treated as comments when `strip_comments` is enabled.
const COMMENT_MARKERS: [char; 2] = ['#', ';'];

/// Parse key file contents into the list of accepted keys.
///
/// Lines are trimmed of surrounding whitespace. Blank lines never survive;
/// comment lines survive only when `strip_comments` is false.
pub fn parse(contents: &str, strip_comments: bool) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !(strip_comments && line.starts_with(COMMENT_MARKERS)))
        .map(str::to_owned)
        .collect()
}

/// Read the key file at `path`, creating it if absent, and parse it.
///
/// A missing file is not an error: the service starts with an empty key set
/// and the file is created so operators can append keys and hit `/refresh`.
/// Open and read failures carry the offending path.
pub async fn load(path: &Path, strip_comments: bool) -> Result<Vec<String>> {
    let mut file = tokio::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .await
        .map_err(|source| Error::KeyFile {
            path: path.to_owned(),
            source,
        })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .await
        .map_err(|source| Error::KeyFile {
            path: path.to_owned(),
            source,
        })?;

    Ok(parse(&contents, strip_comments))
}
