//! Dictionary statistics command
//!
//! Summarizes the loaded word list and its largest anagram families.

use crate::core::Word;
use crate::engine::WordIndex;

/// Summary of a loaded dictionary
pub struct DictionaryStats {
    pub total_words: usize,
    pub signatures: usize,
    pub words_in_families: usize,
    pub length_distribution: Vec<(usize, usize)>,
    pub longest_word: Option<String>,
    pub largest_families: Vec<Vec<String>>,
}

/// Analyze a dictionary index
///
/// `top` bounds the number of families reported. Only families with at least
/// two distinct words count as anagram families.
#[must_use]
pub fn analyze_dictionary(index: &WordIndex, top: usize) -> DictionaryStats {
    let families = index.families(2);
    let words_in_families: usize = families.iter().map(Vec::len).sum();

    // First word of maximal length in dictionary order
    let longest_word = index
        .words()
        .iter()
        .fold(None, |best: Option<&Word>, word| match best {
            Some(current) if current.len() >= word.len() => Some(current),
            _ => Some(word),
        })
        .map(|word| word.text().to_string());

    let largest_families = families
        .into_iter()
        .take(top)
        .map(|family| family.iter().map(|w| w.text().to_string()).collect())
        .collect();

    DictionaryStats {
        total_words: index.len(),
        signatures: index.signature_count(),
        words_in_families,
        length_distribution: index.length_distribution(),
        longest_word,
        largest_families,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn index() -> WordIndex {
        WordIndex::build(words_from_slice(&[
            "cat", "act", "tac", "dog", "god", "stressed", "desserts", "a", "dog",
        ]))
    }

    #[test]
    fn counts_words_and_signatures() {
        let stats = analyze_dictionary(&index(), 10);

        assert_eq!(stats.total_words, 9);
        assert_eq!(stats.signatures, 4);
        assert_eq!(stats.words_in_families, 7);
    }

    #[test]
    fn length_distribution_includes_duplicates() {
        let stats = analyze_dictionary(&index(), 10);
        assert_eq!(stats.length_distribution, [(1, 1), (3, 6), (8, 2)]);
    }

    #[test]
    fn longest_word_is_first_seen() {
        let stats = analyze_dictionary(&index(), 10);
        assert_eq!(stats.longest_word.as_deref(), Some("stressed"));
    }

    #[test]
    fn largest_families_ordered_and_limited() {
        let stats = analyze_dictionary(&index(), 2);

        assert_eq!(stats.largest_families.len(), 2);
        assert_eq!(stats.largest_families[0], ["cat", "act", "tac"]);
        assert_eq!(stats.largest_families[1], ["dog", "god"]);
    }

    #[test]
    fn empty_dictionary() {
        let index = WordIndex::build(Vec::new());
        let stats = analyze_dictionary(&index, 5);

        assert_eq!(stats.total_words, 0);
        assert!(stats.longest_word.is_none());
        assert!(stats.largest_families.is_empty());
    }
}
