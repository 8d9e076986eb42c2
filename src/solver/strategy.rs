//! Search ordering strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::DomainStore;
use super::heuristics::{order_domain_values, select_unassigned_variable};
use crate::core::{Assignment, Crossword, Variable};

/// How the backtracking search picks slots and orders their words
///
/// Ordering only changes how fast a fill is found, never whether one is.
pub trait Strategy {
    /// Pick the next unassigned slot, or `None` if every slot is assigned
    fn select_unassigned_variable(
        &self,
        assignment: &Assignment,
        domains: &DomainStore,
        crossword: &Crossword,
    ) -> Option<Variable>;

    /// Every candidate of `variable`, in the order they should be tried
    fn order_domain_values(
        &self,
        variable: &Variable,
        assignment: &Assignment,
        domains: &DomainStore,
        crossword: &Crossword,
    ) -> Vec<String>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// MRV + degree + LCV (default)
    Heuristic(HeuristicStrategy),
    /// Slot order and dictionary order, as a baseline
    Naive(NaiveStrategy),
}

impl Strategy for StrategyType {
    fn select_unassigned_variable(
        &self,
        assignment: &Assignment,
        domains: &DomainStore,
        crossword: &Crossword,
    ) -> Option<Variable> {
        match self {
            Self::Heuristic(s) => s.select_unassigned_variable(assignment, domains, crossword),
            Self::Naive(s) => s.select_unassigned_variable(assignment, domains, crossword),
        }
    }

    fn order_domain_values(
        &self,
        variable: &Variable,
        assignment: &Assignment,
        domains: &DomainStore,
        crossword: &Crossword,
    ) -> Vec<String> {
        match self {
            Self::Heuristic(s) => s.order_domain_values(variable, assignment, domains, crossword),
            Self::Naive(s) => s.order_domain_values(variable, assignment, domains, crossword),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "heuristic", "mrv", "naive", "static".
    /// Defaults to heuristic if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "naive" | "static" => Self::Naive(NaiveStrategy),
            _ => Self::Heuristic(HeuristicStrategy),
        }
    }

    /// Canonical name, as accepted by [`StrategyType::from_name`]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Heuristic(_) => "heuristic",
            Self::Naive(_) => "naive",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Heuristic(HeuristicStrategy)
    }
}

/// Minimum remaining values, then degree, for slots; least constraining
/// value for words
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeuristicStrategy;

impl Strategy for HeuristicStrategy {
    fn select_unassigned_variable(
        &self,
        assignment: &Assignment,
        domains: &DomainStore,
        crossword: &Crossword,
    ) -> Option<Variable> {
        select_unassigned_variable(assignment, domains, crossword)
    }

    fn order_domain_values(
        &self,
        variable: &Variable,
        assignment: &Assignment,
        domains: &DomainStore,
        crossword: &Crossword,
    ) -> Vec<String> {
        order_domain_values(variable, assignment, domains, crossword)
    }
}

/// First unassigned slot in slot order, words in dictionary order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaiveStrategy;

impl Strategy for NaiveStrategy {
    fn select_unassigned_variable(
        &self,
        assignment: &Assignment,
        _domains: &DomainStore,
        crossword: &Crossword,
    ) -> Option<Variable> {
        crossword
            .variables()
            .iter()
            .find(|variable| !assignment.contains_key(*variable))
            .copied()
    }

    fn order_domain_values(
        &self,
        variable: &Variable,
        _assignment: &Assignment,
        domains: &DomainStore,
        _crossword: &Crossword,
    ) -> Vec<String> {
        domains
            .get(variable)
            .map(|domain| domain.iter().cloned().collect())
            .unwrap_or_default()
    }
}
