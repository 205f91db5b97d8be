//! Canonical anagram keys
//!
//! Two strings share a signature iff they are letter-permutations of each other.

use std::fmt;

/// Characters of a string sorted by ascending code point
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(String);

impl Signature {
    /// Compute the signature of any string
    ///
    /// No normalization happens here: `"Cat"` and `"act"` have different signatures.
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::core::Signature;
    ///
    /// assert_eq!(Signature::of("listen"), Signature::of("silent"));
    /// assert_eq!(Signature::of("listen").as_str(), "eilnst");
    /// assert_ne!(Signature::of("listen"), Signature::of("listed"));
    /// ```
    #[must_use]
    pub fn of(text: &str) -> Self {
        let mut chars: Vec<char> = text.chars().collect();
        chars.sort_unstable();
        Self(chars.into_iter().collect())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
