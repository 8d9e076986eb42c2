//! Benchmark command
//!
//! Fills a batch of randomly generated grids and reports solver statistics.

use crate::core::{Crossword, PuzzleError, Structure};
use crate::solver::{Solver, SolverConfig, StrategyType};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Node budget applied per grid when none is given
pub const DEFAULT_NODE_BUDGET: u64 = 20_000;

/// Configuration for a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    /// Number of grids to generate
    pub count: usize,
    /// Side length of each square grid
    pub size: usize,
    pub seed: u64,
    /// Chance that a cell is a block
    pub block_density: f64,
    pub max_nodes: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 20,
            size: 5,
            seed: 0,
            block_density: 0.25,
            max_nodes: Some(DEFAULT_NODE_BUDGET),
        }
    }
}

/// Outcome of one benchmark grid
#[derive(Debug, Clone, Copy)]
pub struct PuzzleRun {
    pub slots: usize,
    pub solved: bool,
    pub budget_exhausted: bool,
    pub nodes: u64,
    pub backtracks: u64,
    pub duration: Duration,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub strategy: &'static str,
    pub total_puzzles: usize,
    pub solved: usize,
    /// Grids proven to have no fill
    pub unsolvable: usize,
    /// Grids abandoned at the node budget
    pub gave_up: usize,
    pub total_nodes: u64,
    pub average_nodes: f64,
    pub average_backtracks: f64,
    pub slowest: Duration,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Generate a random square structure
///
/// Each cell is a block with probability `block_density`, clamped to
/// `[0, 1]`. NaN is treated as 0.
///
/// # Errors
///
/// Returns `PuzzleError::EmptyStructure` if `size` is zero.
pub fn random_structure<R: Rng>(
    rng: &mut R,
    size: usize,
    block_density: f64,
) -> Result<Structure, PuzzleError> {
    let density = if block_density.is_nan() {
        0.0
    } else {
        block_density.clamp(0.0, 1.0)
    };
    let cells = (0..size)
        .map(|_| (0..size).map(|_| !rng.random_bool(density)).collect())
        .collect();
    Structure::from_cells(cells)
}

/// Generate the grids of a benchmark run, reproducibly from `config.seed`
///
/// # Errors
///
/// Returns `PuzzleError::EmptyStructure` if `config.size` is zero.
pub fn generate_structures(config: &BenchmarkConfig) -> Result<Vec<Structure>, PuzzleError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.count)
        .map(|_| random_structure(&mut rng, config.size, config.block_density))
        .collect()
}

/// Solve every generated grid in parallel
///
/// # Errors
///
/// Returns an error if the grids cannot be generated or `words` is empty.
pub fn run_benchmark(
    strategy: StrategyType,
    words: &BTreeSet<String>,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, PuzzleError> {
    if words.is_empty() {
        return Err(PuzzleError::EmptyWordList);
    }

    let structures = generate_structures(config)?;
    let solver_config = SolverConfig {
        max_nodes: config.max_nodes,
    };

    let pb = ProgressBar::new(structures.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let runs: Vec<PuzzleRun> = structures
        .into_par_iter()
        .map(|structure| -> Result<PuzzleRun, PuzzleError> {
            let crossword = Crossword::new(structure, words.clone())?;
            let puzzle_start = Instant::now();
            let outcome = Solver::new(strategy, &crossword)
                .with_config(solver_config)
                .solve_with_stats();
            pb.inc(1);

            Ok(PuzzleRun {
                slots: crossword.variables().len(),
                solved: outcome.assignment.is_some(),
                budget_exhausted: outcome.stats.budget_exhausted,
                nodes: outcome.stats.nodes,
                backtracks: outcome.stats.backtracks,
                duration: puzzle_start.elapsed(),
            })
        })
        .collect::<Result<_, _>>()?;
    let duration = start.elapsed();

    pb.finish_with_message("Complete!");

    Ok(summarize(strategy.name(), &runs, duration))
}

/// Aggregate per-grid runs into a benchmark result
#[must_use]
pub fn summarize(
    strategy: &'static str,
    runs: &[PuzzleRun],
    duration: Duration,
) -> BenchmarkResult {
    let total_puzzles = runs.len();
    let solved = runs.iter().filter(|run| run.solved).count();
    let gave_up = runs.iter().filter(|run| run.budget_exhausted).count();
    let total_nodes: u64 = runs.iter().map(|run| run.nodes).sum();
    let total_backtracks: u64 = runs.iter().map(|run| run.backtracks).sum();
    let per_puzzle = |total: u64| {
        if total_puzzles == 0 {
            0.0
        } else {
            total as f64 / total_puzzles as f64
        }
    };

    BenchmarkResult {
        strategy,
        total_puzzles,
        solved,
        unsolvable: total_puzzles - solved - gave_up,
        gave_up,
        total_nodes,
        average_nodes: per_puzzle(total_nodes),
        average_backtracks: per_puzzle(total_backtracks),
        slowest: runs.iter().map(|run| run.duration).max().unwrap_or_default(),
        duration,
        puzzles_per_second: if duration.is_zero() {
            0.0
        } else {
            total_puzzles as f64 / duration.as_secs_f64()
        },
    }
}
