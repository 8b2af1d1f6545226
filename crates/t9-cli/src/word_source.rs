//! Word-list files: UTF-8 text, one word per line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Split file contents into words, keeping line order.
///
/// Trailing `\r` is stripped so CRLF files behave like LF files. Blank lines
/// are kept; the index builder skips empty words itself.
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

pub fn read_word_list(path: &Path) -> Result<Vec<String>, WordListError> {
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_word_list(&content);
    debug!(path = %path.display(), lines = words.len(), "word list loaded");
    Ok(words)
}
