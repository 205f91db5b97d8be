//! Letter multisets
//!
//! `LetterCounts` maps each letter to its number of occurrences. It is the operand
//! type of the wildcard subtraction test.

use rustc_hash::FxHashMap;

/// A multiset of characters
///
/// Counts are always positive; letters whose count drops to zero are removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, usize>,
    total: usize,
}

impl LetterCounts {
    /// Count every character of `text`
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::core::LetterCounts;
    ///
    /// let counts = LetterCounts::of("speed");
    /// assert_eq!(counts.get('e'), 2);
    /// assert_eq!(counts.get('z'), 0);
    /// assert_eq!(counts.total(), 5);
    /// ```
    #[must_use]
    pub fn of(text: &str) -> Self {
        text.chars().collect()
    }

    /// Occurrences of `letter` (zero when absent)
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Sum of all counts
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate over `(letter, count)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&letter, &count)| (letter, count))
    }

    /// Add one occurrence of `letter`
    pub fn insert(&mut self, letter: char) {
        *self.counts.entry(letter).or_insert(0) += 1;
        self.total += 1;
    }

    /// Remove every letter of `required` from a copy of `self`
    ///
    /// Returns `None` as soon as some letter of `required` is not available
    /// often enough. On success the returned multiset holds the leftover letters.
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::core::LetterCounts;
    ///
    /// let word = LetterCounts::of("cot");
    /// let leftover = word.subtract(&LetterCounts::of("ct")).unwrap();
    /// assert_eq!(leftover.total(), 1);
    /// assert_eq!(leftover.get('o'), 1);
    ///
    /// assert!(word.subtract(&LetterCounts::of("cc")).is_none());
    /// ```
    #[must_use]
    pub fn subtract(&self, required: &Self) -> Option<Self> {
        let mut working = self.clone();

        for (letter, needed) in required.iter() {
            let available = working.get(letter);
            if available < needed {
                return None;
            }

            if available == needed {
                working.counts.remove(&letter);
            } else if let Some(count) = working.counts.get_mut(&letter) {
                *count -= needed;
            }
            working.total -= needed;
        }

        Some(working)
    }
}

impl FromIterator<char> for LetterCounts {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut counts = Self::default();
        for letter in iter {
            counts.insert(letter);
        }
        counts
    }
}
