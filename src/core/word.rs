//! Dictionary word representation
//!
//! A Word stores a lowercased dictionary entry along with its signature and letter
//! counts, both computed once when the dictionary is loaded. Entries are taken as
//! they appear in the list, so punctuated forms like `o'clock` are words too.

use super::{LetterCounts, Signature};
use std::fmt;

/// A lowercase dictionary word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    len: usize,
    signature: Signature,
    counts: LetterCounts,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased; surrounding whitespace is not trimmed and the
    /// characters are not checked against any alphabet.
    ///
    /// # Errors
    /// Returns `WordError::Empty` if the text is empty.
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::core::Word;
    ///
    /// let word = Word::new("Listen").unwrap();
    /// assert_eq!(word.text(), "listen");
    /// assert_eq!(word.signature().as_str(), "eilnst");
    ///
    /// assert!(Word::new("").is_err());
    /// assert_eq!(Word::new("O'Clock").unwrap().text(), "o'clock");
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let len = text.chars().count();
        let signature = Signature::of(&text);
        let counts = LetterCounts::of(&text);

        Ok(Self {
            text,
            len,
            signature,
            counts,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false for a constructed word
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Get the count of each letter in the word
    #[inline]
    #[must_use]
    pub const fn letter_counts(&self) -> &LetterCounts {
        &self.counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.len(), 5);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_lengths_are_unrestricted() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("stressed").unwrap().len(), 8);
    }

    #[test]
    fn word_creation_empty() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_keeps_punctuation() {
        let word = Word::new("Ice-Cream").unwrap();
        assert_eq!(word.text(), "ice-cream");
        assert_eq!(word.len(), 9);
        assert_eq!(word.letter_counts().get('-'), 1);
        assert_eq!(word.signature(), &Signature::of("ice-cream"));
    }

    #[test]
    fn word_length_counts_characters() {
        let word = Word::new("café").unwrap();
        assert_eq!(word.len(), 4);
        assert_eq!(word.text().len(), 5);
    }

    #[test]
    fn word_signature() {
        let word = Word::new("tinsel").unwrap();
        assert_eq!(word.signature(), &Signature::of("listen"));
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get('s'), 1);
        assert_eq!(counts.get('p'), 1);
        assert_eq!(counts.get('e'), 2);
        assert_eq!(counts.get('d'), 1);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("CRANE").unwrap();
        let word3 = Word::new("caner").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
        assert_eq!(word1.signature(), word3.signature());
    }
}
