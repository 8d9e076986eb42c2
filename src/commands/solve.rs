//! Puzzle solving command
//!
//! Loads a structure, fills it and optionally saves the rendered grid.

use crate::core::{Assignment, Crossword, PuzzleError, Structure};
use crate::output::formatters::render_grid;
use crate::solver::{SolveOutcome, Solver, SolverConfig, StrategyType};
use log::info;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Configuration for solving a puzzle
pub struct SolveConfig {
    pub structure: PathBuf,
    pub output: Option<PathBuf>,
    pub max_nodes: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(structure: PathBuf) -> Self {
        Self {
            structure,
            output: None,
            max_nodes: None,
        }
    }
}

/// Result of solving a puzzle
pub struct SolveReport {
    pub crossword: Crossword,
    pub outcome: SolveOutcome,
    pub strategy: &'static str,
    pub duration: Duration,
    /// Where the grid was saved, if it was
    pub saved_to: Option<PathBuf>,
}

impl SolveReport {
    #[must_use]
    pub const fn solved(&self) -> bool {
        self.outcome.assignment.is_some()
    }

    /// Rendered grid of the fill, if one was found
    #[must_use]
    pub fn grid(&self) -> Option<String> {
        self.outcome
            .assignment
            .as_ref()
            .map(|assignment| render_grid(&self.crossword, assignment))
    }
}

/// Load the structure named by `config` and fill it from `words`
///
/// # Errors
///
/// Returns an error if:
/// - The structure file cannot be read or holds no cells
/// - The word set is empty
/// - The output file cannot be written
pub fn solve_puzzle(
    config: &SolveConfig,
    words: BTreeSet<String>,
    strategy: StrategyType,
) -> Result<SolveReport, PuzzleError> {
    let structure = Structure::load(&config.structure)?;
    let crossword = Crossword::new(structure, words)?;
    info!(
        "Loaded {}x{} grid with {} slots from {}",
        crossword.width(),
        crossword.height(),
        crossword.variables().len(),
        config.structure.display()
    );

    let start = Instant::now();
    let outcome = Solver::new(strategy, &crossword)
        .with_config(SolverConfig {
            max_nodes: config.max_nodes,
        })
        .solve_with_stats();
    let duration = start.elapsed();

    let saved_to = match (&outcome.assignment, &config.output) {
        (Some(assignment), Some(path)) => {
            write_solution(&crossword, assignment, path)?;
            Some(path.clone())
        }
        _ => None,
    };

    Ok(SolveReport {
        crossword,
        outcome,
        strategy: strategy.name(),
        duration,
        saved_to,
    })
}

/// Write the rendered grid to `path`
///
/// # Errors
///
/// Returns `PuzzleError::Io` if the file cannot be written.
pub fn write_solution(
    crossword: &Crossword,
    assignment: &Assignment,
    path: &Path,
) -> Result<(), PuzzleError> {
    fs::write(path, render_grid(crossword, assignment)).map_err(|e| PuzzleError::io(path, e))?;
    info!("Saved grid to {}", path.display());
    Ok(())
}
