//! Word lists for anagram lookup
//!
//! Provides the embedded dictionary compiled into the binary, file loading, and
//! [`WordSource`] to choose between them.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use loader::LoadError;

use crate::core::Word;
use crate::engine::WordIndex;
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The dictionary compiled into the binary
    Embedded,
    /// A text file with one word per line
    File(PathBuf),
}

impl WordSource {
    /// Load the raw word list
    ///
    /// # Errors
    ///
    /// Returns a `LoadError` if a file source cannot be read or holds no words.
    pub fn load(&self) -> Result<Vec<Word>, LoadError> {
        match self {
            Self::Embedded => Ok(loader::words_from_slice(DICTIONARY)),
            Self::File(path) => loader::load_from_file(path),
        }
    }
}

impl FromStr for WordSource {
    type Err = Infallible;

    /// `"embedded"` selects the built-in list, anything else is a file path
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded dictionary"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load a word list and build its index
///
/// This is the only fallible step of startup; a failed load never yields an index.
///
/// # Errors
///
/// Propagates the `LoadError` of [`WordSource::load`].
pub fn load_index(source: &WordSource) -> Result<WordIndex, LoadError> {
    let start = Instant::now();
    let words = source.load()?;
    let index = WordIndex::build(words);

    log::info!(
        "Loaded {} words ({} anagram signatures) from {source} in {:.1?}",
        index.len(),
        index.signature_count(),
        start.elapsed()
    );

    Ok(index)
}
