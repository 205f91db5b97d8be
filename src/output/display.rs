//! Display functions for command results

use super::formatters::{create_progress_bar, format_columns, pluralize};
use crate::commands::{AnagramResult, BenchmarkResult, DictionaryStats, PatternResult};
use colored::Colorize;

const COLUMN_WIDTH: usize = 60;

fn print_words(words: &[String]) {
    for line in format_columns(words, COLUMN_WIDTH - 3) {
        println!("   {line}");
    }
}

/// Print the result of an anagram query
pub fn print_anagram_result(result: &AnagramResult) {
    println!("\n{}", "─".repeat(COLUMN_WIDTH).cyan());
    println!(
        "Anagrams of {}: {}",
        result.input.to_uppercase().bright_yellow().bold(),
        pluralize(result.count, "word", "words").bright_cyan()
    );
    println!("{}", "─".repeat(COLUMN_WIDTH).cyan());

    if result.anagrams.is_empty() {
        println!("   {}", "No anagrams found".bright_black());
    } else {
        print_words(&result.anagrams);
    }
    println!();
}

/// Print the result of a wildcard pattern query
pub fn print_pattern_result(result: &PatternResult) {
    let highlighted: String = result
        .pattern
        .to_uppercase()
        .chars()
        .map(|ch| {
            if ch == '?' {
                ch.to_string().bright_magenta().to_string()
            } else {
                ch.to_string().bright_yellow().bold().to_string()
            }
        })
        .collect();

    println!("\n{}", "─".repeat(COLUMN_WIDTH).cyan());
    println!(
        "Pattern {}: {}",
        highlighted,
        pluralize(result.count, "match", "matches").bright_cyan()
    );
    println!("{}", "─".repeat(COLUMN_WIDTH).cyan());

    if result.matches.is_empty() {
        println!("   {}", "No matches found".bright_black());
    } else {
        print_words(&result.matches);
    }
    println!();
}

/// Print dictionary statistics
pub fn print_stats(stats: &DictionaryStats) {
    println!("\n{}", "═".repeat(COLUMN_WIDTH).cyan());
    println!(" {} ", "DICTIONARY STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(COLUMN_WIDTH).cyan());

    println!("\n📚 {}", "Contents:".bright_cyan().bold());
    println!("   Words:            {}", stats.total_words);
    println!("   Signatures:       {}", stats.signatures);
    println!(
        "   In families:      {}",
        format!("{}", stats.words_in_families).bright_yellow()
    );
    if let Some(longest) = &stats.longest_word {
        println!(
            "   Longest word:     {} ({} letters)",
            longest.green(),
            longest.len()
        );
    }

    println!("\n📏 {}", "Length distribution:".bright_cyan().bold());
    let max_count = stats
        .length_distribution
        .iter()
        .map(|&(_, count)| count)
        .max()
        .unwrap_or(0);
    for &(len, count) in &stats.length_distribution {
        let bar = create_progress_bar(count as f64, max_count as f64, 30);
        println!("   {len:>2}: {} {count:5}", bar.green());
    }

    if !stats.largest_families.is_empty() {
        println!("\n🔀 {}", "Largest anagram families:".bright_cyan().bold());
        for family in &stats.largest_families {
            println!(
                "   {} {}",
                format!("[{}]", family.len()).bright_black(),
                family.join(" ").bright_white()
            );
        }
    }
    println!();
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(COLUMN_WIDTH).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(COLUMN_WIDTH).cyan());

    let lookups = (result.total_queries / 2).max(1) as u32;

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Queries run:      {}", result.total_queries);
    println!(
        "   Anagram lookups:  {:.1?} total, {:.1?} avg",
        result.anagram_time,
        result.anagram_time / lookups
    );
    println!(
        "   Pattern scans:    {:.1?} total, {:.1?} avg",
        result.pattern_time,
        result.pattern_time / lookups
    );
    println!(
        "   Queries/second:   {}",
        format!("{:.0}", result.queries_per_second)
            .bright_yellow()
            .bold()
    );

    println!("\n🔎 {}", "Results:".bright_cyan().bold());
    println!("   Anagrams found:   {}", result.anagrams_found);
    println!("   Pattern matches:  {}", result.matches_found);
    if let Some((pattern, duration)) = &result.slowest_pattern {
        println!(
            "   Slowest pattern:  {} ({duration:.1?})",
            pattern.to_uppercase().yellow()
        );
    }
}
