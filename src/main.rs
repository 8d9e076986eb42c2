//! Crossword Fill - CLI
//!
//! Fills crossword structures from a dictionary using arc consistency and
//! heuristic backtracking search.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossword_fill::{
    commands::{
        BenchmarkConfig, SolveConfig, analyze_puzzle, benchmark::DEFAULT_NODE_BUDGET,
        run_benchmark, solve_puzzle,
    },
    core::{Crossword, Structure},
    logging::init_logger,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::StrategyType,
    wordlists::{WORDS, loader::words_from_slice},
};
use log::info;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "crossword_fill",
    about = "Crossword grid filler using arc consistency and heuristic backtracking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: heuristic (default) or naive
    #[arg(short, long, global = true, default_value = "heuristic")]
    strategy: String,

    /// Wordlist: 'default' (embedded dictionary) or path to file
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Give up after this many tentative assignments
    #[arg(long, global = true)]
    max_nodes: Option<u64>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a structure file
    Solve {
        /// Structure file ('_' = letter, anything else = block)
        structure: PathBuf,

        /// Save the filled grid to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show search statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show slots, crossings and domain pruning for a structure
    Analyze {
        /// Structure file to analyze
        structure: PathBuf,
    },

    /// Fill randomly generated grids
    Benchmark {
        /// Number of grids to generate
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Side length of each grid
        #[arg(long, default_value = "5")]
        size: usize,

        /// Random seed
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

/// Load the dictionary selected by the -w flag
///
/// - "default": the embedded dictionary
/// - "<path>": one word per line
fn load_wordlist(wordlist_mode: &str) -> Result<BTreeSet<String>> {
    use crossword_fill::wordlists::loader::load_from_file;

    let words = match wordlist_mode {
        "default" => words_from_slice(WORDS),
        path => load_from_file(path).with_context(|| format!("Failed to load wordlist {path}"))?,
    };

    info!("Loaded {} words", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let words = load_wordlist(&cli.wordlist)?;
    let strategy = StrategyType::from_name(&cli.strategy);

    match cli.command {
        Commands::Solve {
            structure,
            output,
            verbose,
        } => {
            let config = SolveConfig {
                structure,
                output,
                max_nodes: cli.max_nodes,
            };
            run_solve_command(&config, words, strategy, verbose)
        }
        Commands::Analyze { structure } => run_analyze_command(&structure, words),
        Commands::Benchmark { count, size, seed } => {
            let config = BenchmarkConfig {
                count,
                size,
                seed,
                max_nodes: cli.max_nodes.or(Some(DEFAULT_NODE_BUDGET)),
                ..BenchmarkConfig::default()
            };
            run_benchmark_command(&config, &words, strategy)
        }
    }
}

fn run_solve_command(
    config: &SolveConfig,
    words: BTreeSet<String>,
    strategy: StrategyType,
    verbose: bool,
) -> Result<()> {
    let report = solve_puzzle(config, words, strategy)
        .with_context(|| format!("Failed to solve {}", config.structure.display()))?;

    print_solve_result(&report, verbose);
    Ok(())
}

fn run_analyze_command(path: &Path, words: BTreeSet<String>) -> Result<()> {
    let structure =
        Structure::load(path).with_context(|| format!("Failed to load {}", path.display()))?;
    let crossword = Crossword::new(structure, words)?;

    let result = analyze_puzzle(&crossword);
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    config: &BenchmarkConfig,
    words: &BTreeSet<String>,
    strategy: StrategyType,
) -> Result<()> {
    println!(
        "Running benchmark on {} random {}x{} grids (seed {})...",
        config.count, config.size, config.size, config.seed
    );

    let result = run_benchmark(strategy, words, config)?;
    print_benchmark_result(&result);
    Ok(())
}
