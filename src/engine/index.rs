//! Anagram index over the dictionary
//!
//! The index is accumulated in an [`IndexBuilder`] and sealed into an immutable
//! [`WordIndex`]. Buckets store positions into the retained word list, so every
//! word is stored once.

use crate::core::{Signature, Word};
use rustc_hash::FxHashMap;

/// Mutable accumulation phase of a [`WordIndex`]
#[derive(Debug, Default)]
pub struct IndexBuilder {
    words: Vec<Word>,
    anagrams: FxHashMap<Signature, Vec<usize>>,
    by_length: FxHashMap<usize, Vec<usize>>,
}

impl IndexBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: Vec::with_capacity(capacity),
            anagrams: FxHashMap::default(),
            by_length: FxHashMap::default(),
        }
    }

    /// Append one word
    ///
    /// The word always enters the word list and its length bucket. It enters its
    /// anagram bucket only if an equal word is not already there.
    pub fn push(&mut self, word: Word) {
        let position = self.words.len();

        let bucket = self.anagrams.entry(word.signature().clone()).or_default();
        if !bucket
            .iter()
            .any(|&existing| self.words[existing].text() == word.text())
        {
            bucket.push(position);
        }

        self.by_length.entry(word.len()).or_default().push(position);
        self.words.push(word);
    }

    /// Seal the builder into a read-only index
    #[must_use]
    pub fn finish(self) -> WordIndex {
        log::debug!(
            "Sealed index: {} words, {} signatures, {} lengths",
            self.words.len(),
            self.anagrams.len(),
            self.by_length.len()
        );

        WordIndex {
            words: self.words,
            anagrams: self.anagrams,
            by_length: self.by_length,
        }
    }
}

impl Extend<Word> for IndexBuilder {
    fn extend<I: IntoIterator<Item = Word>>(&mut self, iter: I) {
        for word in iter {
            self.push(word);
        }
    }
}

/// Immutable anagram index plus the original word list
///
/// Shared by reference between all queries; nothing mutates it after [`WordIndex::build`].
#[derive(Debug)]
pub struct WordIndex {
    words: Vec<Word>,
    anagrams: FxHashMap<Signature, Vec<usize>>,
    by_length: FxHashMap<usize, Vec<usize>>,
}

impl WordIndex {
    /// Build the index from a word list, keeping the list's order
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::engine::WordIndex;
    /// use anagram_solver::wordlists::loader::words_from_slice;
    ///
    /// let index = WordIndex::build(words_from_slice(&["cat", "act", "tac", "dog"]));
    /// let anagrams: Vec<&str> = index.lookup_anagrams("cat").iter().map(|w| w.text()).collect();
    /// assert_eq!(anagrams, ["act", "tac"]);
    /// ```
    #[must_use]
    pub fn build(words: Vec<Word>) -> Self {
        let mut builder = IndexBuilder::with_capacity(words.len());
        builder.extend(words);
        builder.finish()
    }

    /// All dictionary words that are letter-permutations of `query`, except `query` itself
    ///
    /// `query` is used verbatim: callers trim and lowercase it. Words come back in
    /// first-seen dictionary order; an unknown signature yields an empty list.
    #[must_use]
    pub fn lookup_anagrams(&self, query: &str) -> Vec<&Word> {
        let mut family = self.anagram_family(&Signature::of(query));
        family.retain(|word| word.text() != query);
        family
    }

    /// Distinct words sharing `signature`, in first-seen order
    #[must_use]
    pub fn anagram_family(&self, signature: &Signature) -> Vec<&Word> {
        self.anagrams
            .get(signature)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(|&position| &self.words[position])
            .collect()
    }

    /// All anagram families with at least `min_size` distinct words
    ///
    /// Ordered by descending size, then by the position of the family's first word.
    #[must_use]
    pub fn families(&self, min_size: usize) -> Vec<Vec<&Word>> {
        let mut buckets: Vec<&Vec<usize>> = self
            .anagrams
            .values()
            .filter(|bucket| bucket.len() >= min_size)
            .collect();
        buckets.sort_by(|a, b| b.len().cmp(&a.len()).then(a[0].cmp(&b[0])));

        buckets
            .into_iter()
            .map(|bucket| bucket.iter().map(|&position| &self.words[position]).collect())
            .collect()
    }

    /// The full word list, duplicates included
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Words of exactly `len` letters, in dictionary order
    pub fn words_of_length(&self, len: usize) -> impl Iterator<Item = &Word> + '_ {
        self.length_bucket(len)
            .iter()
            .map(|&position| &self.words[position])
    }

    /// Positions of the words of `len` letters
    pub(crate) fn length_bucket(&self, len: usize) -> &[usize] {
        self.by_length.get(&len).map_or(&[], Vec::as_slice)
    }

    /// `(length, word count)` pairs sorted by length
    #[must_use]
    pub fn length_distribution(&self) -> Vec<(usize, usize)> {
        let mut distribution: Vec<(usize, usize)> = self
            .by_length
            .iter()
            .map(|(&len, bucket)| (len, bucket.len()))
            .collect();
        distribution.sort_unstable();
        distribution
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct signatures
    #[inline]
    #[must_use]
    pub fn signature_count(&self) -> usize {
        self.anagrams.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn texts<'a>(words: impl IntoIterator<Item = &'a Word>) -> Vec<&'a str> {
        words.into_iter().map(Word::text).collect()
    }

    fn build(words: &[&str]) -> WordIndex {
        WordIndex::build(words_from_slice(words))
    }

    #[test]
    fn lookup_excludes_query_and_keeps_order() {
        let index = build(&["cat", "act", "tac", "dog"]);
        assert_eq!(texts(index.lookup_anagrams("cat")), ["act", "tac"]);
        assert_eq!(texts(index.lookup_anagrams("tac")), ["cat", "act"]);
    }

    #[test]
    fn lookup_of_non_dictionary_word() {
        let index = build(&["cat", "act", "dog"]);
        // "tca" is not a word but shares the signature
        assert_eq!(texts(index.lookup_anagrams("tca")), ["cat", "act"]);
    }

    #[test]
    fn lookup_without_bucket_is_empty() {
        let index = build(&["cat", "act"]);
        assert!(index.lookup_anagrams("dog").is_empty());
    }

    #[test]
    fn lookup_singleton_bucket_is_empty() {
        let index = build(&["cat", "dog"]);
        assert!(index.lookup_anagrams("dog").is_empty());
    }

    #[test]
    fn lookup_empty_query() {
        let index = build(&["cat", "act"]);
        assert!(index.lookup_anagrams("").is_empty());
    }

    #[test]
    fn lookup_is_not_normalized() {
        let index = build(&["cat", "act"]);
        assert!(index.lookup_anagrams("CAT").is_empty());
        assert!(index.lookup_anagrams(" cat").is_empty());
    }

    #[test]
    fn duplicates_are_deduplicated_in_buckets() {
        let index = build(&["stop", "pots", "stop", "tops", "pots"]);
        assert_eq!(
            texts(index.anagram_family(&Signature::of("stop"))),
            ["stop", "pots", "tops"]
        );
        assert_eq!(texts(index.lookup_anagrams("stop")), ["pots", "tops"]);
    }

    #[test]
    fn duplicates_are_kept_in_word_list() {
        let index = build(&["stop", "pots", "stop"]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.signature_count(), 1);
        assert_eq!(texts(index.words_of_length(4)), ["stop", "pots", "stop"]);
    }

    #[test]
    fn every_word_lives_under_its_own_signature() {
        let index = build(&["listen", "silent", "dog", "god", "cat"]);
        for word in index.words() {
            assert!(
                index
                    .anagram_family(word.signature())
                    .iter()
                    .any(|member| member.text() == word.text())
            );
        }
        assert_eq!(index.signature_count(), 3);
    }

    #[test]
    fn words_of_length_keeps_order() {
        let index = build(&["a", "cat", "be", "dog", "an", "act"]);
        assert_eq!(texts(index.words_of_length(3)), ["cat", "dog", "act"]);
        assert_eq!(texts(index.words_of_length(2)), ["be", "an"]);
        assert_eq!(index.words_of_length(7).count(), 0);
    }

    #[test]
    fn length_distribution_sorted() {
        let index = build(&["a", "cat", "be", "dog", "an", "act"]);
        assert_eq!(index.length_distribution(), [(1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn families_sorted_by_size_then_first_seen() {
        let index = build(&["dog", "god", "cat", "act", "tac", "lone", "note", "tone"]);
        let families: Vec<Vec<&str>> = index
            .families(2)
            .into_iter()
            .map(texts)
            .collect();

        assert_eq!(
            families,
            [vec!["cat", "act", "tac"], vec!["dog", "god"], vec!["note", "tone"]]
        );
        assert_eq!(index.families(3).len(), 1);
    }

    #[test]
    fn builder_push_matches_build() {
        let mut builder = IndexBuilder::new();
        for word in words_from_slice(&["cat", "act"]) {
            builder.push(word);
        }
        let index = builder.finish();
        assert_eq!(texts(index.lookup_anagrams("cat")), ["act"]);
    }

    #[test]
    fn empty_index() {
        let index = build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.signature_count(), 0);
        assert!(index.lookup_anagrams("cat").is_empty());
        assert!(index.families(1).is_empty());
    }
}
