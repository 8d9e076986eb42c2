//! Word lists for filling grids
//!
//! Provides the default dictionary compiled into the binary, plus loaders
//! for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
