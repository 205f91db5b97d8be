//! Anagram and pattern query commands
//!
//! Normalizes raw user input and wraps engine results in the
//! `{input, count, anagrams}` / `{pattern, count, matches}` shapes.

use crate::core::{PatternQuery, Word};
use crate::engine::MatchEngine;

/// Result of an anagram query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramResult {
    pub input: String,
    pub count: usize,
    pub anagrams: Vec<String>,
}

/// Result of a wildcard pattern query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternResult {
    pub pattern: String,
    pub count: usize,
    pub matches: Vec<String>,
}

/// Which query a line of user input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    Anagram(AnagramResult),
    Pattern(PatternResult),
}

/// Trim surrounding whitespace and lowercase
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn texts(words: &[&Word]) -> Vec<String> {
    words.iter().map(|w| w.text().to_string()).collect()
}

/// Look up the anagrams of raw user input
///
/// # Examples
/// ```
/// use anagram_solver::commands::anagram_query;
/// use anagram_solver::engine::{MatchEngine, WordIndex};
/// use anagram_solver::wordlists::loader::words_from_slice;
///
/// let index = WordIndex::build(words_from_slice(&["cat", "act", "tac", "dog"]));
/// let result = anagram_query("  CAT ", &MatchEngine::new(&index));
///
/// assert_eq!(result.input, "cat");
/// assert_eq!(result.count, 2);
/// assert_eq!(result.anagrams, ["act", "tac"]);
/// ```
#[must_use]
pub fn anagram_query(raw: &str, engine: &MatchEngine) -> AnagramResult {
    let input = normalize_query(raw);
    let anagrams = texts(&engine.lookup_anagrams(&input));
    log::debug!("anagram '{input}': {} results", anagrams.len());

    AnagramResult {
        input,
        count: anagrams.len(),
        anagrams,
    }
}

/// Match raw user input as a wildcard pattern
#[must_use]
pub fn pattern_query(raw: &str, engine: &MatchEngine) -> PatternResult {
    let pattern = normalize_query(raw);
    let matches = texts(&engine.match_pattern(&pattern));
    log::debug!("pattern '{pattern}': {} matches", matches.len());

    PatternResult {
        pattern,
        count: matches.len(),
        matches,
    }
}

/// Run a pattern query if the input holds a `?`, an anagram query otherwise
#[must_use]
pub fn auto_query(raw: &str, engine: &MatchEngine) -> QueryResult {
    if raw.contains(PatternQuery::WILDCARD) {
        QueryResult::Pattern(pattern_query(raw, engine))
    } else {
        QueryResult::Anagram(anagram_query(raw, engine))
    }
}
