//! Pure predicates over a clause and the current partial assignment.
//!
//! None of these functions mutate anything; they are the shared
//! vocabulary `propagation`, `pure_literal` and `formula` build on, kept
//! in one place so the three-way distinction between "satisfied",
//! "falsified" and "unit" is made exactly once.

use crate::cnf::CNFClause;
use crate::formula::Formula;

/// A clause is satisfied if at least one of its literals is true.
pub fn sat(clause: &CNFClause, formula: &Formula) -> bool {
    clause.vars.iter().any(|&lit| formula.literal_true(lit))
}

/// A clause is a conflict (falsified) if every one of its literals is
/// false. The empty clause is a conflict by this definition, consistent
/// with the vacuous "no literal can save it" reading.
pub fn conflict(clause: &CNFClause, formula: &Formula) -> bool {
    clause.vars.iter().all(|&lit| formula.literal_false(lit))
}

/// A clause is unit if exactly one literal is unassigned and every other
/// literal is false; that single literal is returned. A clause that is
/// already satisfied is never unit, even if it happens to have exactly
/// one unassigned literal among otherwise-false ones.
pub fn unit(clause: &CNFClause, formula: &Formula) -> Option<crate::cnf::CNFVar> {
    let mut candidate = None;
    for &lit in &clause.vars {
        if formula.literal_true(lit) {
            return None;
        }
        if !formula.literal_false(lit) {
            if candidate.is_some() {
                return None;
            }
            candidate = Some(lit);
        }
    }
    candidate
}

/// True iff some variable occurs with both polarities in the clause.
/// Re-exposed here so callers working purely in terms of `eval` don't
/// need to reach into `cnf` directly; the check itself lives with the
/// clause type since construction filters on it too.
pub fn tautology(clause: &CNFClause) -> bool {
    clause.is_tautology()
}

/// A clause is "live" (still relevant to search) while it is neither
/// satisfied nor a conflict. Live clauses are exactly the ones that
/// still constrain the remaining unassigned variables.
pub fn is_live(clause: &CNFClause, formula: &Formula) -> bool {
    !sat(clause, formula) && !conflict(clause, formula)
}
