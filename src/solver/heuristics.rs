//! Variable and value ordering heuristics
//!
//! - MRV: pick the unassigned slot with the fewest candidates left.
//! - Degree: among those, prefer the slot crossing the most other slots.
//! - LCV: try first the words that rule out the fewest neighbor candidates.

use super::DomainStore;
use crate::core::{Assignment, Crossword, Variable, letter_at};
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// Choose the next slot to fill using MRV, then degree
///
/// Remaining ties go to the smallest slot in `Variable` order. Returns
/// `None` once every slot is assigned.
#[must_use]
pub fn select_unassigned_variable(
    assignment: &Assignment,
    domains: &DomainStore,
    crossword: &Crossword,
) -> Option<Variable> {
    // `min_by_key` keeps the first of equal keys, and variables are sorted.
    crossword
        .variables()
        .iter()
        .filter(|variable| !assignment.contains_key(*variable))
        .min_by_key(|variable| {
            (
                domains.remaining(variable),
                Reverse(crossword.neighbors(variable).len()),
            )
        })
        .copied()
}

/// Letter frequencies of one unassigned neighbor at the shared cell
struct NeighborProfile {
    /// Offset of the shared cell inside the word being ordered
    offset: usize,
    /// Candidates left for the neighbor
    total: usize,
    /// Neighbor candidates per letter at the shared cell
    letters: FxHashMap<char, usize>,
}

impl NeighborProfile {
    /// How many of the neighbor's candidates `word` would rule out
    fn ruled_out_by(&self, word: &str) -> usize {
        let kept = letter_at(word, self.offset)
            .and_then(|letter| self.letters.get(&letter))
            .copied()
            .unwrap_or(0);
        self.total - kept
    }
}

/// Order the candidates of `variable` least-constraining first
///
/// A word's cost is the number of candidates, summed over unassigned
/// neighbors, that disagree with it on the shared cell. Sorting is stable,
/// so words with equal cost keep their domain order.
#[must_use]
pub fn order_domain_values(
    variable: &Variable,
    assignment: &Assignment,
    domains: &DomainStore,
    crossword: &Crossword,
) -> Vec<String> {
    let Some(domain) = domains.get(variable) else {
        return Vec::new();
    };

    let profiles: Vec<NeighborProfile> = crossword
        .neighbors(variable)
        .iter()
        .filter(|neighbor| !assignment.contains_key(*neighbor))
        .filter_map(|neighbor| {
            let (offset, neighbor_offset) = crossword.overlap(variable, neighbor)?;
            let neighbor_domain = domains.get(neighbor)?;

            let mut letters: FxHashMap<char, usize> = FxHashMap::default();
            for letter in neighbor_domain
                .iter()
                .filter_map(|word| letter_at(word, neighbor_offset))
            {
                *letters.entry(letter).or_insert(0) += 1;
            }

            Some(NeighborProfile {
                offset,
                total: neighbor_domain.len(),
                letters,
            })
        })
        .collect();

    let mut ranked: Vec<(usize, &String)> = domain
        .iter()
        .map(|word| {
            let cost = profiles
                .iter()
                .map(|profile| profile.ruled_out_by(word))
                .sum::<usize>();
            (cost, word)
        })
        .collect();
    ranked.sort_by_key(|&(cost, _)| cost);

    ranked.into_iter().map(|(_, word)| word.clone()).collect()
}
