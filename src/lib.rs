//! Crossword Fill
//!
//! Fills crossword grids from a dictionary by treating every slot as a
//! constraint satisfaction variable: node consistency and AC-3 prune the
//! candidate words, then a backtracking search guided by MRV, degree and
//! least-constraining-value heuristics picks a consistent fill.
//!
//! # Quick Start
//!
//! ```rust
//! use crossword_fill::core::Crossword;
//! use crossword_fill::output::render_grid;
//! use crossword_fill::solver::{Solver, StrategyType};
//!
//! let crossword = Crossword::from_strs(
//!     "#___#\n#_##_\n#_##_\n#_##_\n#____\n",
//!     &["six", "seven", "nine", "five"],
//! )
//! .unwrap();
//!
//! let solver = Solver::new(StrategyType::default(), &crossword);
//! let assignment = solver.solve().unwrap();
//! print!("{}", render_grid(&crossword, &assignment));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
