//! Dictionary word helpers
//!
//! Words are stored as plain uppercase `String`s. Lengths and letter offsets
//! are measured in characters so that overlap offsets line up with grid cells.

use std::fmt;

/// Error type for words that cannot be placed in a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters,
    /// Uppercasing changes the number of letters (e.g. `ß` -> `SS`)
    CaseChangesLength,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidCharacters => write!(f, "Word must contain only letters"),
            Self::CaseChangesLength => {
                write!(f, "Word changes length when uppercased")
            }
        }
    }
}

impl std::error::Error for WordError {}

/// Normalize a raw dictionary entry
///
/// Trims surrounding whitespace and uppercases the entry.
///
/// # Errors
/// Returns `WordError` if the trimmed entry is empty, contains anything
/// other than alphabetic characters, or would gain or lose letters when
/// uppercased.
///
/// # Examples
/// ```
/// use crossword_fill::core::normalize_word;
///
/// assert_eq!(normalize_word("  cat ").unwrap(), "CAT");
/// assert!(normalize_word("ice-cream").is_err());
/// ```
pub fn normalize_word(raw: &str) -> Result<String, WordError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(WordError::Empty);
    }

    if !trimmed.chars().all(char::is_alphabetic) {
        return Err(WordError::InvalidCharacters);
    }

    let upper = trimmed.to_uppercase();
    if letter_count(&upper) != letter_count(trimmed) {
        return Err(WordError::CaseChangesLength);
    }

    Ok(upper)
}

/// Number of letters in a word
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

/// Letter at a character offset, or `None` past the end of the word
#[inline]
#[must_use]
pub fn letter_at(word: &str, offset: usize) -> Option<char> {
    word.chars().nth(offset)
}
