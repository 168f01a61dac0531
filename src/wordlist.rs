//! Exclusion-word list loading.
//!
//! Loads a newline-separated word file for use with
//! [`Schema::excludes_from_file`](crate::Schema::excludes_from_file).

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("word list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("failed to read word list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("word list file is empty")]
    EmptyFile,
}

/// Reads an exclusion-word list from a file, one word per line.
///
/// Words are trimmed and lowercased; blank lines are dropped.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or contains
/// no words.
pub fn load_wordlist<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordlistError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("word list load FAILED: file not found {:?}", path);
        return Err(WordlistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let words: Vec<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    if words.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("word list load FAILED: empty file {:?}", path);
        return Err(WordlistError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("word list loaded: {} words from {:?}", words.len(), path);

    Ok(words)
}
