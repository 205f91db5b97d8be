//! Anagram Solver - CLI
//!
//! Anagram and wildcard pattern lookup with TUI and CLI modes.

use anagram_solver::{
    commands::{analyze_dictionary, anagram_query, pattern_query, run_benchmark, run_simple},
    engine::{MatchEngine, WordIndex},
    logging::init_logger,
    output::{print_anagram_result, print_benchmark_result, print_pattern_result, print_stats},
    wordlists::{WordSource, load_index},
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "anagram_solver",
    about = "Find anagrams and ?-wildcard pattern matches in a word list",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "ANAGRAM_WORDLIST",
        default_value = "embedded"
    )]
    wordlist: WordSource,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based query loop without TUI)
    Simple,

    /// Find all anagrams of the given letters
    Anagram {
        /// Letters to rearrange
        letters: String,
    },

    /// Find all words matching a pattern, '?' standing for any one letter
    Pattern {
        /// Pattern such as 'c?t' (quote it to keep the shell from globbing)
        pattern: String,
    },

    /// Show dictionary statistics and the largest anagram families
    Stats {
        /// Number of families to list
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Benchmark query performance
    Benchmark {
        /// Number of random words to query
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    // A failed load aborts startup; no query runs against a partial index
    let index = load_index(&cli.wordlist)
        .with_context(|| format!("Failed to load word list from {}", cli.wordlist))?;
    let engine = MatchEngine::new(&index);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(engine),
        Commands::Simple => run_simple(&engine).context("Interactive session failed"),
        Commands::Anagram { letters } => {
            print_anagram_result(&anagram_query(&letters, &engine));
            Ok(())
        }
        Commands::Pattern { pattern } => {
            print_pattern_result(&pattern_query(&pattern, &engine));
            Ok(())
        }
        Commands::Stats { top } => {
            run_stats_command(&index, top);
            Ok(())
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(&engine, count);
            Ok(())
        }
    }
}

fn run_stats_command(index: &WordIndex, top: usize) {
    let stats = analyze_dictionary(index, top);
    print_stats(&stats);
}

fn run_benchmark_command(engine: &MatchEngine, count: usize) {
    println!("Running benchmark on {count} random words...");

    let result = run_benchmark(engine, count, &mut rand::rng(), true);
    print_benchmark_result(&result);
}

fn run_play_command(engine: MatchEngine) -> Result<()> {
    use anagram_solver::interactive::{App, run_tui};

    let app = App::new(engine);
    run_tui(app)
}
