//! Command implementations

pub mod benchmark;
pub mod query;
pub mod simple;
pub mod stats;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use query::{
    AnagramResult, PatternResult, QueryResult, anagram_query, auto_query, normalize_query,
    pattern_query,
};
pub use simple::run_simple;
pub use stats::{DictionaryStats, analyze_dictionary};
