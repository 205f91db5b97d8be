//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Failure to produce a usable word list
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened or read
    Io { path: PathBuf, source: io::Error },
    /// The file was readable but held no valid word
    NoWords { path: PathBuf },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read word list {}: {source}", path.display())
            }
            Self::NoWords { path } => {
                write!(f, "Word list {} contains no valid words", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::NoWords { .. } => None,
        }
    }
}

/// Parse a word list held in memory
///
/// One word per line. Lines are trimmed and lowercased and blank lines are
/// dropped. Every other line is kept as written, duplicates included.
///
/// # Examples
/// ```
/// use anagram_solver::wordlists::loader::parse_words;
///
/// let words = parse_words("Cat\n\n  act \nO'Clock\ncat\n");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["cat", "act", "o'clock", "cat"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(line_number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }

            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    log::warn!("Skipping line {}: '{trimmed}': {e}", line_number + 1);
                    None
                }
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be opened or read, and
/// `LoadError::NoWords` if it contains no valid word.
///
/// # Examples
/// ```no_run
/// use anagram_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content);
    if words.is_empty() {
        return Err(LoadError::NoWords {
            path: path.to_path_buf(),
        });
    }

    log::debug!("Read {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// Empty entries are skipped with a warning.
///
/// # Examples
/// ```
/// use anagram_solver::wordlists::loader::words_from_slice;
/// use anagram_solver::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice
        .iter()
        .enumerate()
        .filter_map(|(position, &s)| match Word::new(s) {
            Ok(word) => Some(word),
            Err(e) => {
                log::warn!("Skipping entry {position}: '{s}': {e}");
                None
            }
        })
        .collect()
}
