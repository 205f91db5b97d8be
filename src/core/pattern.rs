//! Wildcard pattern queries
//!
//! A pattern is a string of known letters and `?` wildcards. Matching is
//! position-agnostic: a word matches when it has the pattern's length, contains
//! every known letter at least as often as the pattern does, and the letters left
//! over after removing the known ones are exactly as many as there are wildcards.

use super::{LetterCounts, Word};

/// A parsed wildcard pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternQuery {
    len: usize,
    known: LetterCounts,
    wildcards: usize,
}

impl PatternQuery {
    /// The single-letter wildcard
    pub const WILDCARD: char = '?';

    /// Parse a pattern
    ///
    /// Never fails: every character other than `?` counts as a known letter,
    /// including characters no dictionary word can contain.
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::core::PatternQuery;
    ///
    /// let query = PatternQuery::parse("c?t");
    /// assert_eq!(query.len(), 3);
    /// assert_eq!(query.wildcards(), 1);
    /// assert_eq!(query.known().get('c'), 1);
    /// assert_eq!(query.known().get('t'), 1);
    /// ```
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        let mut known = LetterCounts::default();
        let mut wildcards = 0;
        let mut len = 0;

        for ch in pattern.chars() {
            len += 1;
            if ch == Self::WILDCARD {
                wildcards += 1;
            } else {
                known.insert(ch);
            }
        }

        Self {
            len,
            known,
            wildcards,
        }
    }

    /// Pattern length in characters
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Known-letter requirements
    #[inline]
    #[must_use]
    pub const fn known(&self) -> &LetterCounts {
        &self.known
    }

    /// Number of `?` characters
    #[inline]
    #[must_use]
    pub const fn wildcards(&self) -> usize {
        self.wildcards
    }

    /// True when the pattern has no known letters
    #[inline]
    #[must_use]
    pub const fn is_all_wildcards(&self) -> bool {
        self.known.is_empty()
    }

    /// Test a single word against the pattern
    ///
    /// 1. The word length must equal the pattern length.
    /// 2. Each known letter is subtracted from the word's letter counts; a
    ///    letter that is not available often enough rejects the word.
    /// 3. The leftover letters must number exactly the wildcard count, so each
    ///    wildcard absorbs one leftover letter and none is left unmatched.
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::core::{PatternQuery, Word};
    ///
    /// let query = PatternQuery::parse("c?t");
    /// assert!(query.accepts(&Word::new("cat").unwrap()));
    /// assert!(query.accepts(&Word::new("act").unwrap()));
    /// assert!(!query.accepts(&Word::new("car").unwrap()));
    /// assert!(!query.accepts(&Word::new("cart").unwrap()));
    /// ```
    #[must_use]
    pub fn accepts(&self, word: &Word) -> bool {
        if word.len() != self.len {
            return false;
        }

        word.letter_counts()
            .subtract(&self.known)
            .is_some_and(|leftover| leftover.total() == self.wildcards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn parse_counts_known_and_wildcards() {
        let query = PatternQuery::parse("a?a??");
        assert_eq!(query.len(), 5);
        assert_eq!(query.wildcards(), 3);
        assert_eq!(query.known().get('a'), 2);
        assert_eq!(query.known().total(), 2);
        assert!(!query.is_all_wildcards());
    }

    #[test]
    fn parse_empty() {
        let query = PatternQuery::parse("");
        assert!(query.is_empty());
        assert_eq!(query.wildcards(), 0);
        assert!(query.is_all_wildcards());
    }

    #[test]
    fn parse_all_wildcards() {
        let query = PatternQuery::parse("????");
        assert_eq!(query.len(), 4);
        assert_eq!(query.wildcards(), 4);
        assert!(query.is_all_wildcards());
    }

    #[test]
    fn parse_counts_characters_not_bytes() {
        let query = PatternQuery::parse("é?");
        assert_eq!(query.len(), 2);
        assert_eq!(query.known().get('é'), 1);
    }

    #[test]
    fn accepts_is_position_agnostic() {
        let query = PatternQuery::parse("t??");
        assert!(query.accepts(&word("cat")));
        assert!(query.accepts(&word("tea")));
        assert!(query.accepts(&word("art")));
        assert!(!query.accepts(&word("dog")));
    }

    #[test]
    fn accepts_requires_repeated_letters() {
        let query = PatternQuery::parse("ee???");
        assert!(query.accepts(&word("speed")));
        assert!(!query.accepts(&word("spend")));
    }

    #[test]
    fn accepts_wildcard_may_repeat_known_letter() {
        // The wildcard absorbs the second 'a'
        let query = PatternQuery::parse("a?");
        assert!(query.accepts(&word("aa")));
        assert!(query.accepts(&word("ab")));
    }

    #[test]
    fn rejects_length_mismatch() {
        let query = PatternQuery::parse("c?t");
        assert!(!query.accepts(&word("cart")));
        assert!(!query.accepts(&word("at")));
    }

    #[test]
    fn no_wildcards_requires_same_multiset() {
        let query = PatternQuery::parse("tac");
        assert!(query.accepts(&word("cat")));
        assert!(query.accepts(&word("act")));
        assert!(!query.accepts(&word("cot")));
    }

    #[test]
    fn uppercase_known_letters_never_match() {
        let query = PatternQuery::parse("C?T");
        assert!(!query.accepts(&word("cat")));
    }
}
