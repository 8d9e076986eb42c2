//! Formatting utilities for terminal output

use crate::core::{Assignment, Crossword};

/// Glyph drawn for a blocked cell
pub const BLOCK: char = '█';

/// Letters of an assignment laid out on the grid
///
/// `None` marks blocked cells and open cells no assigned word covers.
#[must_use]
pub fn letter_grid(crossword: &Crossword, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
    let mut letters = vec![vec![None; crossword.width()]; crossword.height()];

    for (variable, word) in assignment {
        for ((row, col), letter) in variable.cells().zip(word.chars()) {
            if let Some(cell) = letters.get_mut(row).and_then(|r| r.get_mut(col)) {
                *cell = Some(letter);
            }
        }
    }

    letters
}

/// Render the grid as plain text, one line per row
///
/// Blocks become `█`, filled cells their letter and unfilled open cells a
/// space.
///
/// # Examples
/// ```
/// use crossword_fill::core::{Assignment, Crossword, Direction, Variable};
/// use crossword_fill::output::formatters::render_grid;
///
/// let crossword = Crossword::from_strs("___\n_##\n", &["cat"]).unwrap();
/// let mut assignment = Assignment::new();
/// assignment.insert(Variable::new(0, 0, Direction::Across, 3), "CAT".to_string());
///
/// assert_eq!(render_grid(&crossword, &assignment), "CAT\n ██\n");
/// ```
#[must_use]
pub fn render_grid(crossword: &Crossword, assignment: &Assignment) -> String {
    let letters = letter_grid(crossword, assignment);
    let structure = crossword.structure();

    let mut out = String::with_capacity((crossword.width() + 1) * crossword.height());
    for (row, cells) in letters.iter().enumerate() {
        for (col, letter) in cells.iter().enumerate() {
            let glyph = if structure.is_open(row, col) {
                letter.unwrap_or(' ')
            } else {
                BLOCK
            };
            out.push(glyph);
        }
        out.push('\n');
    }

    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of candidates still alive, as a bar
#[must_use]
pub fn remaining_bar(remaining: usize, initial: usize, width: usize) -> String {
    create_progress_bar(remaining as f64, initial as f64, width)
}
