//! Solver counters and final-model validation.
//!
//! A plain counters struct the driver increments as it works, reported to
//! the caller alongside the result rather than folded into it.

use crate::cnf::CNFClause;
use crate::formula::Formula;

/// Running counters for one solve. All fields start at zero and are only
/// ever incremented by the driver; nothing resets them except a fresh
/// `Stats::default()` at the start of a new solve (a restart resets the
/// search, not the statistics).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub decisions: u64,
    pub propagations: u64,
    pub pure_literals: u64,
    pub backtracks: u64,
    pub restarts: u64,
    /// Conflicts observed since the last restart (or since the start of
    /// search, if no restart has happened yet). Incremented by unit
    /// propagation on detecting an inconsistency, per the preserved
    /// behavior of not surfacing the conflict as a return value.
    pub conflicts_since_restart: u64,
}

impl Stats {
    pub fn new() -> Stats {
        Stats::default()
    }

    pub fn on_restart(&mut self) {
        self.restarts += 1;
        self.conflicts_since_restart = 0;
    }
}

/// Checks that every clause in `clauses` is satisfied by `formula`'s
/// current (UNASSIGNED-completed-to-FALSE) assignment. Used as the final
/// soundness check before a SATISFIABLE result is handed back to the
/// caller; a failure here indicates a broken invariant in the driver, not
/// a legitimate UNSAT instance.
pub fn validate_model(clauses: &[CNFClause], formula: &Formula) -> bool {
    clauses.iter().all(|clause| crate::eval::sat(clause, formula))
}

/// Checks a total valuation (one `bool` per variable, ascending) against
/// `clauses` directly, without needing a `Formula`. Exposed for callers
/// outside this crate (the CLI's `-a/--assignment` re-validation) that
/// only have the valuation `solver::solve` returned, not driver internals.
pub fn validate_valuation(clauses: &[CNFClause], valuation: &[bool]) -> bool {
    clauses
        .iter()
        .all(|clause| clause.vars.iter().any(|lit| valuation[lit.id - 1] == lit.sign))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cnf::{CNFVar, CNF};
    use crate::formula::VarValue;

    #[test]
    fn restart_resets_conflict_counter_but_not_restart_count() {
        let mut stats = Stats::new();
        stats.conflicts_since_restart = 5;
        stats.on_restart();
        assert_eq!(stats.restarts, 1);
        assert_eq!(stats.conflicts_since_restart, 0);
    }

    #[test]
    fn validate_model_detects_unsatisfied_clause() {
        let mut clause = CNFClause::new();
        clause.push(CNFVar::pos(1));
        let cnf = CNF::single(clause.clone());
        let mut formula = Formula::new(cnf, 1).unwrap();
        assert!(!validate_model(&[clause.clone()], &formula));
        formula.set(1, VarValue::True);
        assert!(validate_model(&[clause], &formula));
    }
}
