//! Simple interactive CLI mode
//!
//! Line-based query loop without TUI

use super::query::{QueryResult, auto_query};
use crate::engine::MatchEngine;
use crate::output::{print_anagram_result, print_pattern_result};
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// Each line is a query: lines containing `?` are wildcard patterns, anything
/// else is an anagram lookup. Ends on `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(engine: &MatchEngine) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Anagram Solver - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Dictionary: {} words, {} anagram signatures\n",
        engine.index().len(),
        engine.index().signature_count()
    );
    println!("  - Type letters to find their anagrams (e.g. 'listen')");
    println!("  - Use ? for any one letter to match a pattern (e.g. 'c?t')");
    println!("\nCommands: 'quit' to exit\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Query: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;
        let input = line.trim();

        match input.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
            _ => match auto_query(input, engine) {
                QueryResult::Anagram(result) => print_anagram_result(&result),
                QueryResult::Pattern(result) => print_pattern_result(&result),
            },
        }
    }
}
