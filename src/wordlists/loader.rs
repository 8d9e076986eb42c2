//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Every word is trimmed and uppercased; entries that are not purely
//! alphabetic are skipped.

use crate::core::normalize_word;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use crossword_fill::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<BTreeSet<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| normalize_word(line).ok())
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a normalized word set
///
/// # Examples
/// ```
/// use crossword_fill::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "Dog", "cat"]);
/// assert_eq!(words.len(), 2);
/// assert!(words.contains("DOG"));
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> BTreeSet<String> {
    slice
        .iter()
        .filter_map(|&word| normalize_word(word).ok())
        .collect()
}
