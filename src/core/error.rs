//! Errors raised while building a puzzle model

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for loading structures and word lists
#[derive(Debug)]
pub enum PuzzleError {
    /// A structure or word list file could not be read
    Io { path: PathBuf, source: io::Error },
    /// The structure has no rows or no columns
    EmptyStructure,
    /// Rows of a structure grid have different widths
    RaggedStructure { row: usize, expected: usize, found: usize },
    /// No usable word remained after normalization
    EmptyWordList,
}

impl PuzzleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read {}: {source}", path.display())
            }
            Self::EmptyStructure => write!(f, "Structure contains no cells"),
            Self::RaggedStructure {
                row,
                expected,
                found,
            } => write!(
                f,
                "Structure row {row} has {found} cells, expected {expected}"
            ),
            Self::EmptyWordList => write!(f, "Word list contains no usable words"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn io_error_keeps_source() {
        let err = PuzzleError::io(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );

        assert!(err.to_string().contains("missing.txt"));
        assert!(err.source().is_some());
    }

    #[test]
    fn ragged_structure_message() {
        let err = PuzzleError::RaggedStructure {
            row: 2,
            expected: 5,
            found: 3,
        };
        assert_eq!(err.to_string(), "Structure row 2 has 3 cells, expected 5");
        assert!(err.source().is_none());
    }
}
