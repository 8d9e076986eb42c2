//! Arc consistency (AC-3) and assignment checks
//!
//! An arc `(x, y)` is consistent when every word left for `x` has at least
//! one word left for `y` that agrees on their shared cell. `ac3` keeps
//! revising arcs until that holds everywhere or some slot runs dry.

use super::DomainStore;
use crate::core::{Assignment, Crossword, Variable, letter_at, letter_count};
use log::debug;
use rustc_hash::FxHashSet;

/// An ordered pair of crossing slots: revise the first against the second
pub type DirectedArc = (Variable, Variable);

/// Make `x` arc consistent with `y`
///
/// Removes every word from `x`'s domain that has no partner in `y`'s domain
/// agreeing on the shared cell. Returns `true` if anything was removed.
/// Slots that do not cross are never revised.
pub fn revise(
    domains: &mut DomainStore,
    crossword: &Crossword,
    x: &Variable,
    y: &Variable,
) -> bool {
    let Some((ox, oy)) = crossword.overlap(x, y) else {
        return false;
    };

    let supported: FxHashSet<char> = domains
        .get(y)
        .map(|domain| domain.iter().filter_map(|word| letter_at(word, oy)).collect())
        .unwrap_or_default();

    let Some(domain) = domains.get_mut(x) else {
        return false;
    };

    let before = domain.len();
    domain.retain(|word| letter_at(word, ox).is_some_and(|letter| supported.contains(&letter)));
    domain.len() != before
}

/// Every arc of the puzzle, in slot order
#[must_use]
pub fn all_arcs(crossword: &Crossword) -> Vec<DirectedArc> {
    crossword
        .variables()
        .iter()
        .flat_map(|&x| crossword.neighbors(&x).iter().map(move |&y| (x, y)))
        .collect()
}

/// Enforce arc consistency with AC-3
///
/// Starts from `arcs`, or from every arc of the puzzle when `None`. Arcs are
/// taken from the back of the work list. After a revision of `x` against
/// `y`, every arc `(z, x)` with `z` a neighbor of `x` other than `y` is
/// queued again.
///
/// Returns `false` as soon as any domain is empty, `true` once the work list
/// drains.
pub fn ac3(
    domains: &mut DomainStore,
    crossword: &Crossword,
    arcs: Option<Vec<DirectedArc>>,
) -> bool {
    if domains.has_empty_domain() {
        debug!("AC-3: a domain was already empty");
        return false;
    }

    let mut queue = arcs.unwrap_or_else(|| all_arcs(crossword));
    let mut revisions = 0usize;

    while let Some((x, y)) = queue.pop() {
        if !revise(domains, crossword, &x, &y) {
            continue;
        }
        revisions += 1;

        if domains.remaining(&x) == 0 {
            debug!("AC-3: domain of {x} wiped out after {revisions} revisions");
            return false;
        }

        queue.extend(
            crossword
                .neighbors(&x)
                .iter()
                .filter(|&&z| z != y)
                .map(|&z| (z, x)),
        );
    }

    debug!("AC-3: consistent after {revisions} revisions");
    true
}

/// Whether every slot of the puzzle has exactly one non-empty word
#[must_use]
pub fn assignment_complete(assignment: &Assignment, variables: &[Variable]) -> bool {
    assignment.len() == variables.len()
        && assignment
            .iter()
            .all(|(variable, word)| !word.is_empty() && variables.contains(variable))
}

/// Whether a (possibly partial) assignment breaks no constraint
///
/// Checks that words are distinct, that every word fits its slot's length,
/// and that crossing slots which are both assigned agree on the shared
/// letter.
#[must_use]
pub fn consistent(assignment: &Assignment, crossword: &Crossword) -> bool {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    if !assignment.values().all(|word| seen.insert(word.as_str())) {
        return false;
    }

    if assignment
        .iter()
        .any(|(variable, word)| letter_count(word) != variable.length())
    {
        return false;
    }

    for (a, word_a) in assignment {
        for b in crossword.neighbors(a) {
            let Some(word_b) = assignment.get(b) else {
                continue;
            };
            let Some((oa, ob)) = crossword.overlap(a, b) else {
                continue;
            };
            if letter_at(word_a, oa) != letter_at(word_b, ob) {
                return false;
            }
        }
    }

    true
}
