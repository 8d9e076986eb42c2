//! Main crossword solver interface

use super::DomainStore;
use super::consistency::{ac3, assignment_complete, consistent};
use super::strategy::Strategy;
use crate::core::{Assignment, Crossword, Variable};
use log::debug;

/// Limits applied to a single solve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Stop after this many tentative assignments (`None` = unbounded)
    pub max_nodes: Option<u64>,
}

/// Counters collected during one solve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidates summed over all slots before any pruning
    pub initial_candidates: usize,
    /// Candidates left after node consistency
    pub after_node_consistency: usize,
    /// Candidates left after AC-3 (0 if AC-3 failed)
    pub after_arc_consistency: usize,
    /// Whether AC-3 finished without emptying a domain
    pub arc_consistent: bool,
    /// Tentative assignments tried
    pub nodes: u64,
    /// Tentative assignments undone
    pub backtracks: u64,
    /// Deepest recursion level reached
    pub max_depth: usize,
    /// Whether the search stopped because `max_nodes` was hit
    pub budget_exhausted: bool,
}

/// Result of a solve with its statistics
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// A complete, consistent fill, or `None` if none was found
    pub assignment: Option<Assignment>,
    pub stats: SearchStats,
}

/// Main crossword solver
///
/// Runs node consistency, AC-3 and then backtracking search with the given
/// ordering strategy. Each call to [`Solver::solve`] owns fresh domains.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    crossword: &'a Crossword,
    config: SolverConfig,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver for a puzzle
    pub const fn new(strategy: S, crossword: &'a Crossword) -> Self {
        Self {
            strategy,
            crossword,
            config: SolverConfig { max_nodes: None },
        }
    }

    /// Replace the solve limits
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Fill the grid
    ///
    /// Returns `None` if no fill exists (or none was found within the node
    /// budget).
    ///
    /// # Examples
    /// ```
    /// use crossword_fill::core::Crossword;
    /// use crossword_fill::solver::{Solver, StrategyType};
    ///
    /// let crossword = Crossword::from_strs("#_#\n___\n#_#\n", &["cat", "bag", "dog"]).unwrap();
    /// let solver = Solver::new(StrategyType::default(), &crossword);
    ///
    /// let assignment = solver.solve().unwrap();
    /// assert_eq!(assignment.len(), 2);
    /// ```
    pub fn solve(&self) -> Option<Assignment> {
        self.solve_with_stats().assignment
    }

    /// Fill the grid and report search statistics
    pub fn solve_with_stats(&self) -> SolveOutcome {
        let mut stats = SearchStats::default();
        let mut domains = DomainStore::initialize(self.crossword);
        stats.initial_candidates = domains.total_candidates();

        domains.enforce_node_consistency();
        stats.after_node_consistency = domains.total_candidates();
        debug!(
            "Node consistency: {} -> {} candidates",
            stats.initial_candidates, stats.after_node_consistency
        );

        stats.arc_consistent = ac3(&mut domains, self.crossword, None);
        if !stats.arc_consistent {
            debug!("Arc consistency emptied a domain; no fill exists");
            return SolveOutcome {
                assignment: None,
                stats,
            };
        }
        stats.after_arc_consistency = domains.total_candidates();
        debug!(
            "Arc consistency: {} -> {} candidates",
            stats.after_node_consistency, stats.after_arc_consistency
        );

        let mut search = Search {
            strategy: &self.strategy,
            crossword: self.crossword,
            domains: &domains,
            config: self.config,
            stats,
        };
        let mut assignment = Assignment::new();
        let found = search.backtrack(&mut assignment, 0);
        let stats = search.stats;

        if found {
            debug_assert!(consistent(&assignment, self.crossword));
            debug!(
                "Filled {} slots after {} nodes",
                assignment.len(),
                stats.nodes
            );
        } else if stats.budget_exhausted {
            debug!("Node budget of {:?} exhausted", self.config.max_nodes);
        } else {
            debug!("Search exhausted after {} nodes; no fill exists", stats.nodes);
        }

        SolveOutcome {
            assignment: found.then_some(assignment),
            stats,
        }
    }
}

/// State shared by every frame of one backtracking run
struct Search<'s, S: Strategy> {
    strategy: &'s S,
    crossword: &'s Crossword,
    domains: &'s DomainStore,
    config: SolverConfig,
    stats: SearchStats,
}

impl<S: Strategy> Search<'_, S> {
    /// Extend `assignment` to a complete fill
    ///
    /// On success `assignment` holds the fill and `true` is returned. On
    /// failure `assignment` is exactly what it was on entry.
    fn backtrack(&mut self, assignment: &mut Assignment, depth: usize) -> bool {
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if assignment_complete(assignment, self.crossword.variables()) {
            return true;
        }

        let Some(variable) =
            self.strategy
                .select_unassigned_variable(assignment, self.domains, self.crossword)
        else {
            return false;
        };

        let values =
            self.strategy
                .order_domain_values(&variable, assignment, self.domains, self.crossword);

        for value in values {
            if self.budget_spent() {
                self.stats.budget_exhausted = true;
                return false;
            }
            self.stats.nodes += 1;

            let mut tentative = TentativeAssignment::new(assignment, variable, value);
            if consistent(tentative.assignment(), self.crossword)
                && self.backtrack(tentative.assignment(), depth + 1)
            {
                tentative.keep();
                return true;
            }

            self.stats.backtracks += 1;
        }

        false
    }

    fn budget_spent(&self) -> bool {
        self.config
            .max_nodes
            .is_some_and(|limit| self.stats.nodes >= limit)
    }
}

/// A word placed in a slot for the duration of one search frame
///
/// The entry is removed again when the guard drops, unless [`keep`] was
/// called.
///
/// [`keep`]: TentativeAssignment::keep
struct TentativeAssignment<'g> {
    assignment: &'g mut Assignment,
    variable: Variable,
    kept: bool,
}

impl<'g> TentativeAssignment<'g> {
    fn new(assignment: &'g mut Assignment, variable: Variable, value: String) -> Self {
        assignment.insert(variable, value);
        Self {
            assignment,
            variable,
            kept: false,
        }
    }

    fn assignment(&mut self) -> &mut Assignment {
        self.assignment
    }

    fn keep(mut self) {
        self.kept = true;
    }
}

impl Drop for TentativeAssignment<'_> {
    fn drop(&mut self) {
        if !self.kept {
            self.assignment.remove(&self.variable);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;
    use crate::solver::strategy::{HeuristicStrategy, NaiveStrategy, StrategyType};

    const PLUS: &str = "#_#\n___\n#_#\n";
    const SAMPLE: &str = "#___#\n#_##_\n#_##_\n#_##_\n#____\n";

    fn solve(structure: &str, words: &[&str]) -> (Crossword, Option<Assignment>) {
        let crossword = Crossword::from_strs(structure, words).unwrap();
        let assignment = Solver::new(HeuristicStrategy, &crossword).solve();
        (crossword, assignment)
    }

    /// Try every combination of words; true if any is a valid fill
    fn brute_force_solvable(crossword: &Crossword) -> bool {
        fn extend(crossword: &Crossword, index: usize, assignment: &mut Assignment) -> bool {
            let Some(&variable) = crossword.variables().get(index) else {
                return true;
            };
            for word in crossword.words() {
                assignment.insert(variable, word.clone());
                if consistent(assignment, crossword) && extend(crossword, index + 1, assignment) {
                    return true;
                }
                assignment.remove(&variable);
            }
            false
        }
        extend(crossword, 0, &mut Assignment::new())
    }

    #[test]
    fn single_slot_takes_any_word() {
        let (crossword, assignment) = solve("___\n", &["cat", "dog"]);
        let assignment = assignment.unwrap();

        let slot = Variable::new(0, 0, Direction::Across, 3);
        assert_eq!(crossword.variables(), &[slot]);
        let word = assignment.get(&slot).unwrap();
        assert!(word == "CAT" || word == "DOG");
    }

    #[test]
    fn crossing_slots_share_letter() {
        let (crossword, assignment) = solve(PLUS, &["cat", "bag", "dog"]);
        let assignment = assignment.unwrap();

        let across = Variable::new(1, 0, Direction::Across, 3);
        let down = Variable::new(0, 1, Direction::Down, 3);
        let a = assignment.get(&across).unwrap();
        let d = assignment.get(&down).unwrap();

        assert_eq!(a.chars().nth(1), d.chars().nth(1));
        assert_ne!(a, d);
        assert!(consistent(&assignment, &crossword));
    }

    #[test]
    fn crossing_at_first_letter_of_down() {
        // The down slot hangs from the middle of the across slot.
        let (crossword, assignment) = solve("___\n#_#\n#_#\n", &["cat", "tie", "dog", "age"]);
        let assignment = assignment.unwrap();

        let across = Variable::new(0, 0, Direction::Across, 3);
        let down = Variable::new(0, 1, Direction::Down, 3);
        assert_eq!(crossword.overlap(&across, &down), Some((1, 0)));
        assert_eq!(assignment.get(&across).map(String::as_str), Some("CAT"));
        assert_eq!(assignment.get(&down).map(String::as_str), Some("AGE"));
    }

    #[test]
    fn middle_crossing_without_shared_letter_fails() {
        // CAT, TIE, DOG and AGE all have different middle letters.
        let (_, assignment) = solve(PLUS, &["cat", "tie", "dog", "age"]);
        assert!(assignment.is_none());
    }

    #[test]
    fn impossible_length_has_no_solution() {
        let (_, assignment) = solve("_____\n", &["cat", "dog", "door", "cart"]);
        assert!(assignment.is_none());
    }

    #[test]
    fn impossible_length_stops_before_search() {
        let crossword =
            Crossword::from_strs("_____\n_####\n_####\n", &["cat", "dog", "door"]).unwrap();
        let outcome = Solver::new(HeuristicStrategy, &crossword).solve_with_stats();

        assert!(outcome.assignment.is_none());
        assert!(!outcome.stats.arc_consistent);
        assert_eq!(outcome.stats.nodes, 0);
    }

    #[test]
    fn distinct_words_are_required() {
        // Only CAT fits both slots, and it may not be used twice.
        let (_, assignment) = solve(PLUS, &["cat", "dog"]);
        let (_, assignment_two) = solve("___\n###\n___\n", &["cat"]);

        assert!(assignment.is_none());
        assert!(assignment_two.is_none());
    }

    #[test]
    fn sample_grid_is_filled() {
        let (crossword, assignment) = solve(
            SAMPLE,
            &["six", "seven", "nine", "five", "ten", "four", "one", "eight"],
        );
        let assignment = assignment.unwrap();

        assert!(assignment_complete(&assignment, crossword.variables()));
        assert!(consistent(&assignment, &crossword));
        assert_eq!(
            assignment.get(&Variable::new(0, 1, Direction::Down, 5)).map(String::as_str),
            Some("SEVEN")
        );
    }

    #[test]
    fn solutions_are_sound() {
        let words = [
            "cat", "cot", "act", "tan", "ant", "oat", "toe", "ate", "eat", "tea",
        ];
        for structure in [PLUS, "___\n_#_\n___\n", "___\n___\n", SAMPLE] {
            let crossword = Crossword::from_strs(structure, &words).unwrap();
            if let Some(assignment) = Solver::new(HeuristicStrategy, &crossword).solve() {
                assert!(assignment_complete(&assignment, crossword.variables()));
                assert!(consistent(&assignment, &crossword));
            }
        }
    }

    #[test]
    fn search_agrees_with_brute_force() {
        let word_lists: [&[&str]; 4] = [
            &["cat", "act", "tab", "bat"],
            &["ab", "ba", "aa", "bb"],
            &["ab", "cd", "ef"],
            &["to", "ox", "on", "no", "tx"],
        ];
        let structures = ["___\n_#_\n___\n", "__\n__\n", "#_#\n___\n#_#\n", "__\n_#\n"];

        for structure in structures {
            for &words in &word_lists {
                let crossword = Crossword::from_strs(structure, words).unwrap();
                let expected = brute_force_solvable(&crossword);

                for name in ["heuristic", "naive"] {
                    let strategy = StrategyType::from_name(name);
                    let found = Solver::new(strategy, &crossword).solve();
                    assert_eq!(
                        found.is_some(),
                        expected,
                        "{} disagrees on {structure:?} with {words:?}",
                        strategy.name()
                    );
                }
            }
        }
    }

    #[test]
    fn empty_structure_is_trivially_filled() {
        let (crossword, assignment) = solve("_#_\n#_#\n", &["cat"]);
        assert!(crossword.variables().is_empty());
        assert_eq!(assignment, Some(Assignment::new()));
    }

    #[test]
    fn stats_track_pruning_and_search() {
        let crossword = Crossword::from_strs(PLUS, &["cat", "tie", "dog", "bag", "door"]).unwrap();
        let outcome = Solver::new(HeuristicStrategy, &crossword).solve_with_stats();

        assert!(outcome.assignment.is_some());
        let stats = outcome.stats;
        assert_eq!(stats.initial_candidates, 10);
        assert_eq!(stats.after_node_consistency, 8);
        assert!(stats.arc_consistent);
        assert!(stats.after_arc_consistency <= stats.after_node_consistency);
        assert!(stats.nodes >= 2);
        assert_eq!(stats.max_depth, 2);
        assert!(!stats.budget_exhausted);
    }

    #[test]
    fn node_budget_stops_search() {
        let crossword = Crossword::from_strs(SAMPLE, &["six", "seven", "nine", "five"]).unwrap();
        let outcome = Solver::new(NaiveStrategy, &crossword)
            .with_config(SolverConfig { max_nodes: Some(1) })
            .solve_with_stats();

        assert!(outcome.assignment.is_none());
        assert!(outcome.stats.budget_exhausted);
        assert_eq!(outcome.stats.nodes, 1);
    }

    #[test]
    fn failed_branches_leave_assignment_untouched() {
        let crossword = Crossword::from_strs(PLUS, &["cat", "dog"]).unwrap();
        let mut domains = DomainStore::initialize(&crossword);
        domains.enforce_node_consistency();

        let strategy = NaiveStrategy;
        let mut search = Search {
            strategy: &strategy,
            crossword: &crossword,
            domains: &domains,
            config: SolverConfig::default(),
            stats: SearchStats::default(),
        };
        let mut assignment = Assignment::new();

        assert!(!search.backtrack(&mut assignment, 0));
        assert!(assignment.is_empty());
        assert_eq!(search.stats.backtracks, search.stats.nodes);
    }

    #[test]
    fn guard_removes_entry_unless_kept() {
        let slot = Variable::new(0, 0, Direction::Across, 3);
        let mut assignment = Assignment::new();

        {
            let mut tentative = TentativeAssignment::new(&mut assignment, slot, "CAT".into());
            assert_eq!(tentative.assignment().len(), 1);
        }
        assert!(assignment.is_empty());

        TentativeAssignment::new(&mut assignment, slot, "DOG".into()).keep();
        assert_eq!(assignment.get(&slot).map(String::as_str), Some("DOG"));
    }
}
