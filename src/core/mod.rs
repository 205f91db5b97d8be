//! Core domain types for anagram lookup
//!
//! This module contains the fundamental value types: words, their canonical
//! signatures, letter multisets and parsed wildcard patterns.
//! All types here are pure and immutable once built.

mod letters;
mod pattern;
mod signature;
mod word;

pub use letters::LetterCounts;
pub use pattern::PatternQuery;
pub use signature::Signature;
pub use word::{Word, WordError};
