//! Core domain types for crossword filling
//!
//! This module holds the immutable puzzle model: grid structure, slots,
//! overlaps and the dictionary. Nothing here is modified during a solve.

mod crossword;
mod error;
mod structure;
mod variable;
mod word;

pub use crossword::{Assignment, Crossword, Overlap};
pub use error::PuzzleError;
pub use structure::{OPEN_CELL, Structure};
pub use variable::{Direction, Variable};
pub use word::{WordError, letter_at, letter_count, normalize_word};
