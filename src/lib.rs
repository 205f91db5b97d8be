//! Anagram Solver
//!
//! Exact anagram lookup and `?`-wildcard pattern lookup over a static word list.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_solver::engine::{MatchEngine, WordIndex};
//! use anagram_solver::wordlists::loader::words_from_slice;
//!
//! // Build the index once
//! let index = WordIndex::build(words_from_slice(&["listen", "silent", "enlist", "lint"]));
//! let engine = MatchEngine::new(&index);
//!
//! // Anagrams never include the query itself
//! assert_eq!(engine.lookup_anagrams("listen").len(), 2);
//!
//! // `?` matches any one letter not claimed by the known letters
//! let matches: Vec<&str> = engine.match_pattern("l??t").iter().map(|w| w.text()).collect();
//! assert_eq!(matches, ["lint"]);
//! ```

// Core domain types
pub mod core;

// Index and query engine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
