//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod solve;

pub use analyze::{AnalysisResult, SlotAnalysis, analyze_puzzle};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, PuzzleRun, run_benchmark};
pub use solve::{SolveConfig, SolveReport, solve_puzzle, write_solution};
