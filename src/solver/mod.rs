//! Constraint solving for crossword fills
//!
//! Node consistency and AC-3 shrink each slot's candidates, then a
//! backtracking search guided by a [`Strategy`] picks the words.

pub mod consistency;
mod domains;
mod engine;
pub mod heuristics;
pub mod strategy;

pub use consistency::{DirectedArc, ac3, all_arcs, assignment_complete, consistent, revise};
pub use domains::DomainStore;
pub use engine::{SearchStats, SolveOutcome, Solver, SolverConfig};
pub use strategy::{HeuristicStrategy, NaiveStrategy, Strategy, StrategyType};
