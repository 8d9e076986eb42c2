//! Crossword slot representation
//!
//! A `Variable` is one across or down slot. It is a small value type with
//! structural equality and a total order, so it can key maps and sets and
//! give reproducible iteration when ties have to be broken.

use std::fmt;

/// Direction a slot runs in
///
/// `Across` sorts before `Down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// One fillable slot in the grid
///
/// Ordered lexicographically by `(row, col, direction, length)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    row: usize,
    col: usize,
    direction: Direction,
    length: usize,
}

impl Variable {
    /// Create a slot starting at `(row, col)`
    ///
    /// # Examples
    /// ```
    /// use crossword_fill::core::{Direction, Variable};
    ///
    /// let slot = Variable::new(0, 1, Direction::Down, 3);
    /// let cells: Vec<_> = slot.cells().collect();
    /// assert_eq!(cells, vec![(0, 1), (1, 1), (2, 1)]);
    /// ```
    #[must_use]
    pub const fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    /// Row of the first cell
    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Column of the first cell
    #[inline]
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of letters the slot holds
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Grid coordinates of the `offset`-th letter
    #[inline]
    #[must_use]
    pub const fn cell(&self, offset: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.row, self.col + offset),
            Direction::Down => (self.row + offset, self.col),
        }
    }

    /// Grid coordinates of every letter, in word order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(|offset| self.cell(offset))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} : {}",
            self.row, self.col, self.direction, self.length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn across_cells_advance_columns() {
        let slot = Variable::new(2, 1, Direction::Across, 4);
        let cells: Vec<_> = slot.cells().collect();
        assert_eq!(cells, vec![(2, 1), (2, 2), (2, 3), (2, 4)]);
    }

    #[test]
    fn down_cells_advance_rows() {
        let slot = Variable::new(0, 3, Direction::Down, 2);
        assert_eq!(slot.cell(0), (0, 3));
        assert_eq!(slot.cell(1), (1, 3));
    }

    #[test]
    fn equality_is_structural() {
        let a = Variable::new(1, 1, Direction::Down, 3);
        let b = Variable::new(1, 1, Direction::Down, 3);
        let c = Variable::new(1, 1, Direction::Down, 4);
        let d = Variable::new(1, 1, Direction::Across, 3);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn ordering_is_row_col_direction_length() {
        let vars: BTreeSet<Variable> = [
            Variable::new(1, 0, Direction::Across, 3),
            Variable::new(0, 2, Direction::Down, 3),
            Variable::new(0, 0, Direction::Down, 5),
            Variable::new(0, 0, Direction::Across, 5),
        ]
        .into_iter()
        .collect();

        let ordered: Vec<_> = vars.into_iter().collect();
        assert_eq!(
            ordered,
            vec![
                Variable::new(0, 0, Direction::Across, 5),
                Variable::new(0, 0, Direction::Down, 5),
                Variable::new(0, 2, Direction::Down, 3),
                Variable::new(1, 0, Direction::Across, 3),
            ]
        );
    }

    #[test]
    fn display_format() {
        let slot = Variable::new(0, 1, Direction::Across, 3);
        assert_eq!(format!("{slot}"), "(0, 1) across : 3");
    }
}
