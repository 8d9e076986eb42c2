//! Puzzle analysis command
//!
//! Reports the slots of a puzzle, how they cross and how far node and arc
//! consistency shrink their candidate sets, without searching.

use crate::core::{Crossword, Variable};
use crate::solver::{DomainStore, ac3};

/// Candidate counts for one slot
pub struct SlotAnalysis {
    pub variable: Variable,
    pub neighbors: Vec<Variable>,
    pub initial: usize,
    pub after_node_consistency: usize,
    /// `None` when AC-3 emptied some domain
    pub after_arc_consistency: Option<usize>,
}

/// Result of analyzing a puzzle
pub struct AnalysisResult {
    pub width: usize,
    pub height: usize,
    pub word_count: usize,
    pub slots: Vec<SlotAnalysis>,
    pub arc_consistent: bool,
}

impl AnalysisResult {
    /// Candidates summed over every slot after node consistency
    #[must_use]
    pub fn total_after_node_consistency(&self) -> usize {
        self.slots.iter().map(|slot| slot.after_node_consistency).sum()
    }

    /// Candidates summed over every slot after AC-3
    #[must_use]
    pub fn total_after_arc_consistency(&self) -> Option<usize> {
        self.slots.iter().map(|slot| slot.after_arc_consistency).sum()
    }

    /// Slots left with no candidate after node consistency
    pub fn impossible_slots(&self) -> impl Iterator<Item = &SlotAnalysis> {
        self.slots
            .iter()
            .filter(|slot| slot.after_node_consistency == 0)
    }
}

/// Analyze a puzzle's slots and domains
#[must_use]
pub fn analyze_puzzle(crossword: &Crossword) -> AnalysisResult {
    let mut domains = DomainStore::initialize(crossword);
    let initial: Vec<usize> = crossword
        .variables()
        .iter()
        .map(|variable| domains.remaining(variable))
        .collect();

    domains.enforce_node_consistency();
    let after_node: Vec<usize> = crossword
        .variables()
        .iter()
        .map(|variable| domains.remaining(variable))
        .collect();

    let arc_consistent = ac3(&mut domains, crossword, None);

    let slots = crossword
        .variables()
        .iter()
        .zip(initial.into_iter().zip(after_node))
        .map(|(variable, (initial, after_node_consistency))| SlotAnalysis {
            variable: *variable,
            neighbors: crossword.neighbors(variable).to_vec(),
            initial,
            after_node_consistency,
            after_arc_consistency: arc_consistent.then(|| domains.remaining(variable)),
        })
        .collect();

    AnalysisResult {
        width: crossword.width(),
        height: crossword.height(),
        word_count: crossword.words().len(),
        slots,
        arc_consistent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    const SAMPLE: &str = "#___#\n#_##_\n#_##_\n#_##_\n#____\n";

    #[test]
    fn analyze_reports_every_slot() {
        let crossword =
            Crossword::from_strs(SAMPLE, &["six", "seven", "nine", "five", "ten"]).unwrap();
        let result = analyze_puzzle(&crossword);

        assert_eq!((result.width, result.height), (5, 5));
        assert_eq!(result.word_count, 5);
        assert_eq!(result.slots.len(), 4);
        assert!(result.slots.iter().all(|slot| slot.initial == 5));
    }

    #[test]
    fn analyze_tracks_pruning() {
        let crossword =
            Crossword::from_strs(SAMPLE, &["six", "seven", "nine", "five", "ten"]).unwrap();
        let result = analyze_puzzle(&crossword);

        let top = result
            .slots
            .iter()
            .find(|slot| slot.variable == Variable::new(0, 1, Direction::Across, 3))
            .unwrap();

        // SIX and TEN have three letters; only SIX starts with SEVEN's S.
        assert_eq!(top.after_node_consistency, 2);
        assert_eq!(top.after_arc_consistency, Some(1));
        assert_eq!(top.neighbors, vec![Variable::new(0, 1, Direction::Down, 5)]);

        assert!(result.arc_consistent);
        assert_eq!(result.total_after_node_consistency(), 2 + 1 + 2 + 2);
        assert_eq!(result.total_after_arc_consistency(), Some(1 + 1 + 2 + 1));
    }

    #[test]
    fn analyze_flags_impossible_slots() {
        let crossword = Crossword::from_strs(SAMPLE, &["six", "nine", "five"]).unwrap();
        let result = analyze_puzzle(&crossword);

        let impossible: Vec<Variable> = result
            .impossible_slots()
            .map(|slot| slot.variable)
            .collect();
        assert_eq!(impossible, vec![Variable::new(0, 1, Direction::Down, 5)]);
        assert!(!result.arc_consistent);
        assert_eq!(result.total_after_arc_consistency(), None);
    }
}
