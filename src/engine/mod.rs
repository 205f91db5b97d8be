//! Anagram and wildcard lookup
//!
//! [`WordIndex`] owns the dictionary and its anagram buckets; [`MatchEngine`] runs
//! queries against it.

mod index;
mod matcher;

pub use index::{IndexBuilder, WordIndex};
pub use matcher::{MatchEngine, PARALLEL_SCAN_THRESHOLD};
