//! Query interface over a [`WordIndex`]

use super::WordIndex;
use crate::core::{PatternQuery, Word};
use rayon::prelude::*;

/// Length buckets at least this large are scanned in parallel
pub const PARALLEL_SCAN_THRESHOLD: usize = 4096;

/// Stateless query engine
///
/// Holds nothing but a shared reference to the index, so it is `Copy` and any
/// number of engines may query the same index concurrently.
#[derive(Debug, Clone, Copy)]
pub struct MatchEngine<'a> {
    index: &'a WordIndex,
}

impl<'a> MatchEngine<'a> {
    #[must_use]
    pub const fn new(index: &'a WordIndex) -> Self {
        Self { index }
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> &'a WordIndex {
        self.index
    }

    /// Exact anagrams of `query`, excluding `query` itself
    ///
    /// See [`WordIndex::lookup_anagrams`].
    #[must_use]
    pub fn lookup_anagrams(&self, query: &str) -> Vec<&'a Word> {
        self.index.lookup_anagrams(query)
    }

    /// All words matching a wildcard pattern, in dictionary order
    ///
    /// `?` stands for exactly one letter not claimed by the pattern's known
    /// letters; known letters may appear anywhere in the word. Duplicate lines of
    /// the word list produce duplicate matches.
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::engine::{MatchEngine, WordIndex};
    /// use anagram_solver::wordlists::loader::words_from_slice;
    ///
    /// let index = WordIndex::build(words_from_slice(&["aa", "ab", "abc"]));
    /// let engine = MatchEngine::new(&index);
    ///
    /// let matches: Vec<&str> = engine.match_pattern("??").iter().map(|w| w.text()).collect();
    /// assert_eq!(matches, ["aa", "ab"]);
    /// ```
    #[must_use]
    pub fn match_pattern(&self, pattern: &str) -> Vec<&'a Word> {
        let query = PatternQuery::parse(pattern);
        self.match_query(&query)
    }

    /// Same as [`MatchEngine::match_pattern`] for an already parsed pattern
    #[must_use]
    pub fn match_query(&self, query: &PatternQuery) -> Vec<&'a Word> {
        // Only words of the pattern's length can pass the length check
        let index = self.index;

        if query.is_all_wildcards() {
            return index.words_of_length(query.len()).collect();
        }

        let bucket = index.length_bucket(query.len());
        if bucket.len() >= PARALLEL_SCAN_THRESHOLD {
            let words = index.words();
            bucket
                .par_iter()
                .map(|&position| &words[position])
                .filter(|word| query.accepts(word))
                .collect()
        } else {
            index
                .words_of_length(query.len())
                .filter(|word| query.accepts(word))
                .collect()
        }
    }

    /// Reference implementation: test every word of the list
    ///
    /// Produces the same result as [`MatchEngine::match_query`].
    #[must_use]
    pub fn scan_all(&self, query: &PatternQuery) -> Vec<&'a Word> {
        self.index
            .words()
            .iter()
            .filter(|word| query.accepts(word))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn texts(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.text().to_string()).collect()
    }

    fn build(words: &[&str]) -> WordIndex {
        WordIndex::build(words_from_slice(words))
    }

    #[test]
    fn single_wildcard_match() {
        let index = build(&["cat", "cot", "car"]);
        let engine = MatchEngine::new(&index);

        // 'o' is the leftover letter of "cot"; "car" has no 't'
        assert_eq!(texts(&engine.match_pattern("c?t")), ["cat", "cot"]);
    }

    #[test]
    fn all_wildcards_match_every_word_of_length() {
        let index = build(&["aa", "ab", "abc", "b"]);
        let engine = MatchEngine::new(&index);

        assert_eq!(texts(&engine.match_pattern("??")), ["aa", "ab"]);
        assert_eq!(texts(&engine.match_pattern("???")), ["abc"]);
        assert_eq!(texts(&engine.match_pattern("?")), ["b"]);
    }

    #[test]
    fn empty_pattern_matches_nothing() {
        let index = build(&["a", "cat"]);
        let engine = MatchEngine::new(&index);
        assert!(engine.match_pattern("").is_empty());
    }

    #[test]
    fn pattern_without_wildcards_includes_self() {
        let index = build(&["cat", "act", "tac", "dog"]);
        let engine = MatchEngine::new(&index);

        assert_eq!(texts(&engine.match_pattern("cat")), ["cat", "act", "tac"]);
        assert_eq!(texts(&engine.lookup_anagrams("cat")), ["act", "tac"]);
    }

    #[test]
    fn duplicate_lines_surface_twice() {
        let index = build(&["stop", "pots", "stop"]);
        let engine = MatchEngine::new(&index);

        assert_eq!(texts(&engine.match_pattern("s?o?")), ["stop", "pots", "stop"]);
        assert_eq!(texts(&engine.lookup_anagrams("tops")), ["stop", "pots"]);
    }

    #[test]
    fn repeated_known_letters() {
        let index = build(&["speed", "spend", "sleep", "geese"]);
        let engine = MatchEngine::new(&index);

        assert_eq!(texts(&engine.match_pattern("e?e??")), ["speed", "sleep", "geese"]);
        assert_eq!(texts(&engine.match_pattern("eee??")), ["geese"]);
    }

    #[test]
    fn unmatched_characters_yield_empty() {
        let index = build(&["cat", "act"]);
        let engine = MatchEngine::new(&index);

        assert!(engine.match_pattern("C?T").is_empty());
        assert!(engine.match_pattern("c-t").is_empty());
        assert!(engine.match_pattern(" c?t").is_empty());
    }

    #[test]
    fn bucketed_scan_equals_full_scan() {
        let index = build(&[
            "listen", "silent", "enlist", "tinsel", "inlets", "stone", "notes", "tones", "net",
            "ten", "lens", "lent",
        ]);
        let engine = MatchEngine::new(&index);

        for pattern in ["?", "??", "???", "????", "l??", "en??", "n?t", "lis??n", "?e?", "s?????"] {
            let query = PatternQuery::parse(pattern);
            assert_eq!(
                texts(&engine.match_query(&query)),
                texts(&engine.scan_all(&query)),
                "pattern {pattern}"
            );
        }
    }

    #[test]
    fn parallel_scan_keeps_order() {
        let words: Vec<String> = (0..PARALLEL_SCAN_THRESHOLD + 10)
            .map(|i| {
                let a = (b'a' + (i % 26) as u8) as char;
                let b = (b'a' + ((i / 26) % 26) as u8) as char;
                let c = (b'a' + ((i / 676) % 26) as u8) as char;
                format!("{a}{b}{c}")
            })
            .collect();
        let slice: Vec<&str> = words.iter().map(String::as_str).collect();
        let index = build(&slice);
        let engine = MatchEngine::new(&index);

        assert_eq!(texts(&engine.match_pattern("???")), slice);

        let query = PatternQuery::parse("a??");
        assert_eq!(
            texts(&engine.match_query(&query)),
            texts(&engine.scan_all(&query))
        );
    }

    #[test]
    fn repeated_calls_are_identical() {
        let index = build(&["cat", "act", "tac", "dog", "god"]);
        let engine = MatchEngine::new(&index);

        assert_eq!(engine.match_pattern("?o?"), engine.match_pattern("?o?"));
        assert_eq!(engine.lookup_anagrams("dog"), engine.lookup_anagrams("dog"));
    }
}
