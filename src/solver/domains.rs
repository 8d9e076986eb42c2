//! Per-slot candidate word sets
//!
//! Each domain starts as the full dictionary and only ever shrinks.

use crate::core::{Crossword, Variable, letter_count};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Mutable candidate sets, one per slot, owned by a single solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStore {
    domains: FxHashMap<Variable, BTreeSet<String>>,
}

impl DomainStore {
    /// Give every slot a copy of the full dictionary
    #[must_use]
    pub fn initialize(crossword: &Crossword) -> Self {
        let domains = crossword
            .variables()
            .iter()
            .map(|&variable| (variable, crossword.words().clone()))
            .collect();

        Self { domains }
    }

    /// Drop every word whose length differs from its slot's length
    ///
    /// Idempotent.
    pub fn enforce_node_consistency(&mut self) {
        for (variable, domain) in &mut self.domains {
            domain.retain(|word| letter_count(word) == variable.length());
        }
    }

    /// Current candidates for a slot
    #[must_use]
    pub fn get(&self, variable: &Variable) -> Option<&BTreeSet<String>> {
        self.domains.get(variable)
    }

    pub(crate) fn get_mut(&mut self, variable: &Variable) -> Option<&mut BTreeSet<String>> {
        self.domains.get_mut(variable)
    }

    /// Number of candidates left for a slot (0 for an unknown slot)
    #[inline]
    #[must_use]
    pub fn remaining(&self, variable: &Variable) -> usize {
        self.domains.get(variable).map_or(0, BTreeSet::len)
    }

    /// Whether any slot has run out of candidates
    #[must_use]
    pub fn has_empty_domain(&self) -> bool {
        self.domains.values().any(BTreeSet::is_empty)
    }

    /// Candidates summed over every slot
    #[must_use]
    pub fn total_candidates(&self) -> usize {
        self.domains.values().map(BTreeSet::len).sum()
    }
}
