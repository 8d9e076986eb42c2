//! Grid structure parsing and slot derivation
//!
//! A structure file has one line per row. `_` marks a cell that takes a
//! letter; any other character is a block. Rows shorter than the widest row
//! are padded with blocks.

use super::{Direction, PuzzleError, Variable};
use std::fs;
use std::path::Path;

/// Marker for a fillable cell in structure text
pub const OPEN_CELL: char = '_';

/// Which cells of the grid can hold letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    width: usize,
    height: usize,
    cells: Vec<Vec<bool>>,
}

impl Structure {
    /// Parse structure text
    ///
    /// # Errors
    /// Returns `PuzzleError::EmptyStructure` if the text has no rows or only
    /// empty rows.
    ///
    /// # Examples
    /// ```
    /// use crossword_fill::core::Structure;
    ///
    /// let structure = Structure::parse("#___#\n#_##_\n").unwrap();
    /// assert_eq!(structure.width(), 5);
    /// assert_eq!(structure.height(), 2);
    /// assert!(structure.is_open(0, 1));
    /// assert!(!structure.is_open(1, 2));
    /// ```
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }

        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        let cells = lines
            .iter()
            .map(|line| {
                let mut row: Vec<bool> = line.chars().map(|c| c == OPEN_CELL).collect();
                row.resize(width, false);
                row
            })
            .collect();

        Self::from_cells(cells)
    }

    /// Build a structure from an explicit cell grid (`true` = fillable)
    ///
    /// # Errors
    /// Returns `PuzzleError::EmptyStructure` for a grid without cells and
    /// `PuzzleError::RaggedStructure` if rows differ in width.
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, PuzzleError> {
        let height = cells.len();
        let width = cells.first().map_or(0, Vec::len);

        if height == 0 || width == 0 {
            return Err(PuzzleError::EmptyStructure);
        }

        if let Some((row, found)) = cells
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(PuzzleError::RaggedStructure {
                row,
                expected: width,
                found,
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Read and parse a structure file
    ///
    /// # Errors
    /// Returns `PuzzleError::Io` if the file cannot be read, or any error
    /// from [`Structure::parse`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PuzzleError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| PuzzleError::io(path, e))?;
        Self::parse(&text)
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether `(row, col)` takes a letter; false outside the grid
    #[inline]
    #[must_use]
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Derive every across and down slot, sorted
    ///
    /// A slot starts at an open cell whose predecessor in its direction is a
    /// block or the grid edge, and runs over consecutive open cells. Runs of
    /// a single cell are not slots.
    #[must_use]
    pub fn variables(&self) -> Vec<Variable> {
        let mut variables = Vec::new();

        for row in 0..self.height {
            for col in 0..self.width {
                if !self.is_open(row, col) {
                    continue;
                }

                if col == 0 || !self.is_open(row, col - 1) {
                    let length = (col..self.width)
                        .take_while(|&c| self.is_open(row, c))
                        .count();
                    if length > 1 {
                        variables.push(Variable::new(row, col, Direction::Across, length));
                    }
                }

                if row == 0 || !self.is_open(row - 1, col) {
                    let length = (row..self.height)
                        .take_while(|&r| self.is_open(r, col))
                        .count();
                    if length > 1 {
                        variables.push(Variable::new(row, col, Direction::Down, length));
                    }
                }
            }
        }

        variables.sort_unstable();
        variables
    }
}
