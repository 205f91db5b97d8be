//! Benchmark command
//!
//! Times anagram and pattern queries drawn at random from the dictionary.

use crate::core::{PatternQuery, Word};
use crate::engine::MatchEngine;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_queries: usize,
    pub anagram_time: Duration,
    pub pattern_time: Duration,
    pub anagrams_found: usize,
    pub matches_found: usize,
    pub slowest_pattern: Option<(String, Duration)>,
    pub queries_per_second: f64,
}

/// Replace each letter of `word` by `?` with probability one half
#[must_use]
pub fn wildcard_pattern<R: Rng>(word: &Word, rng: &mut R) -> String {
    word.text()
        .chars()
        .map(|ch| {
            if rng.random_bool(0.5) {
                PatternQuery::WILDCARD
            } else {
                ch
            }
        })
        .collect()
}

/// Run `count` anagram lookups and `count` pattern queries
///
/// Query words are sampled without replacement from the dictionary; each pattern
/// is derived from its sampled word by [`wildcard_pattern`].
#[must_use]
pub fn run_benchmark<R: Rng>(
    engine: &MatchEngine,
    count: usize,
    rng: &mut R,
    show_progress: bool,
) -> BenchmarkResult {
    let samples: Vec<&Word> = engine
        .index()
        .words()
        .choose_multiple(rng, count)
        .collect();
    let patterns: Vec<String> = samples
        .iter()
        .map(|word| wildcard_pattern(word, rng))
        .collect();

    log::debug!("Benchmarking {} sampled words", samples.len());

    let pb = if show_progress {
        let pb = ProgressBar::new(samples.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut anagram_time = Duration::ZERO;
    let mut pattern_time = Duration::ZERO;
    let mut anagrams_found = 0;
    let mut matches_found = 0;
    let mut slowest_pattern: Option<(String, Duration)> = None;

    for (word, pattern) in samples.iter().zip(&patterns) {
        let start = Instant::now();
        anagrams_found += engine.lookup_anagrams(word.text()).len();
        anagram_time += start.elapsed();

        let start = Instant::now();
        matches_found += engine.match_pattern(pattern).len();
        let elapsed = start.elapsed();
        pattern_time += elapsed;

        if slowest_pattern
            .as_ref()
            .is_none_or(|(_, slowest)| elapsed > *slowest)
        {
            slowest_pattern = Some((pattern.clone(), elapsed));
        }

        pb.set_message(pattern.clone());
        pb.inc(1);
    }

    pb.finish_and_clear();

    let total_queries = samples.len() * 2;
    let total_time = anagram_time + pattern_time;
    let queries_per_second = if total_time.is_zero() {
        0.0
    } else {
        total_queries as f64 / total_time.as_secs_f64()
    };

    BenchmarkResult {
        total_queries,
        anagram_time,
        pattern_time,
        anagrams_found,
        matches_found,
        slowest_pattern,
        queries_per_second,
    }
}
