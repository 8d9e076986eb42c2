//! The immutable puzzle model handed to the solver
//!
//! A `Crossword` bundles the grid structure, the dictionary, the derived
//! slots and the overlap relation between every pair of crossing slots.

use super::{PuzzleError, Structure, Variable, normalize_word};
use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Offsets `(ox, oy)` of the shared cell inside two crossing words
pub type Overlap = (usize, usize);

/// A (possibly partial) mapping from slots to words
pub type Assignment = BTreeMap<Variable, String>;

/// Puzzle model: structure, dictionary, slots and their crossings
#[derive(Debug, Clone)]
pub struct Crossword {
    structure: Structure,
    words: BTreeSet<String>,
    variables: Vec<Variable>,
    overlaps: FxHashMap<(Variable, Variable), Overlap>,
    neighbors: FxHashMap<Variable, Vec<Variable>>,
}

impl Crossword {
    /// Build the model for a structure and a normalized word set
    ///
    /// # Errors
    /// Returns `PuzzleError::EmptyWordList` if `words` is empty.
    pub fn new(structure: Structure, words: BTreeSet<String>) -> Result<Self, PuzzleError> {
        if words.is_empty() {
            return Err(PuzzleError::EmptyWordList);
        }

        let variables = structure.variables();

        // Every slot covering a cell, with the letter offset it uses there
        let mut slots_by_cell: FxHashMap<(usize, usize), Vec<(Variable, usize)>> =
            FxHashMap::default();
        for &variable in &variables {
            for (offset, cell) in variable.cells().enumerate() {
                slots_by_cell
                    .entry(cell)
                    .or_default()
                    .push((variable, offset));
            }
        }

        let mut overlaps = FxHashMap::default();
        for slots in slots_by_cell.values() {
            for &(x, ox) in slots {
                for &(y, oy) in slots {
                    if x != y {
                        overlaps.insert((x, y), (ox, oy));
                    }
                }
            }
        }

        let mut neighbors: FxHashMap<Variable, Vec<Variable>> = variables
            .iter()
            .map(|&variable| (variable, Vec::new()))
            .collect();
        for &(x, y) in overlaps.keys() {
            if let Some(list) = neighbors.get_mut(&x) {
                list.push(y);
            }
        }
        for list in neighbors.values_mut() {
            list.sort_unstable();
            list.dedup();
        }

        Ok(Self {
            structure,
            words,
            variables,
            overlaps,
            neighbors,
        })
    }

    /// Build a model from structure text and raw words
    ///
    /// Words are normalized; entries that are not purely alphabetic are
    /// skipped.
    ///
    /// # Errors
    /// Returns any structure parsing error, or `PuzzleError::EmptyWordList`
    /// if no word survives normalization.
    ///
    /// # Examples
    /// ```
    /// use crossword_fill::core::Crossword;
    ///
    /// let crossword = Crossword::from_strs("___\n_##\n_##\n", &["cat", "cow"]).unwrap();
    /// assert_eq!(crossword.variables().len(), 2);
    /// assert!(crossword.words().contains("CAT"));
    /// ```
    pub fn from_strs(structure: &str, words: &[&str]) -> Result<Self, PuzzleError> {
        let structure = Structure::parse(structure)?;
        let words = words
            .iter()
            .filter_map(|&word| normalize_word(word).ok())
            .collect();
        Self::new(structure, words)
    }

    /// Load a structure file and a word file (one word per line)
    ///
    /// Lines that are blank or not purely alphabetic are skipped.
    ///
    /// # Errors
    /// Returns `PuzzleError::Io` if either file cannot be read, plus the
    /// errors of [`Crossword::new`] and [`Structure::parse`].
    pub fn from_files<P, Q>(structure_path: P, words_path: Q) -> Result<Self, PuzzleError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let structure = Structure::load(structure_path)?;

        let words_path = words_path.as_ref();
        let text = fs::read_to_string(words_path).map_err(|e| PuzzleError::io(words_path, e))?;
        let words = text
            .lines()
            .filter_map(|line| normalize_word(line).ok())
            .collect();

        Self::new(structure, words)
    }

    #[inline]
    #[must_use]
    pub const fn structure(&self) -> &Structure {
        &self.structure
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.structure.width()
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.structure.height()
    }

    /// The full dictionary every domain starts from
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    /// All slots, sorted
    #[inline]
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Whether `variable` is one of this puzzle's slots
    #[must_use]
    pub fn contains(&self, variable: &Variable) -> bool {
        self.variables.binary_search(variable).is_ok()
    }

    /// Slots sharing a cell with `variable`, sorted
    ///
    /// Returns an empty slice for a slot that is not part of the puzzle.
    #[must_use]
    pub fn neighbors(&self, variable: &Variable) -> &[Variable] {
        self.neighbors.get(variable).map_or(&[], Vec::as_slice)
    }

    /// Offsets of the shared cell, if `x` and `y` cross
    ///
    /// `overlap(y, x)` is `overlap(x, y)` with the offsets swapped.
    #[inline]
    #[must_use]
    pub fn overlap(&self, x: &Variable, y: &Variable) -> Option<Overlap> {
        self.overlaps.get(&(*x, *y)).copied()
    }
}
