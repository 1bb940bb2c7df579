//! Exhaustive brute-force satisfiability oracle.
//!
//! Not part of the DPLL search engine; kept solely as an independent
//! reference for differential testing (try every valuation, see whether
//! the formula in question comes out satisfiable).
//!
//! Exponential in the variable count: only suitable for the small
//! instances exercised by the property tests.

use crate::cnf::CNF;
use crate::sat_solution::{SolverResult, Valuation};

/// Decides satisfiability of `cnf` by trying every valuation of
/// `num_variables` variables.
pub fn solve(cnf: &CNF, num_variables: usize) -> SolverResult {
    let mut valuation = vec![false; num_variables];
    if guess(cnf, 0, &mut valuation) {
        SolverResult::Satisfiable(valuation)
    } else {
        SolverResult::Unsatisfiable
    }
}

fn guess(cnf: &CNF, change: usize, valuation: &mut Valuation) -> bool {
    if change == valuation.len() {
        return satisfies(cnf, valuation);
    }
    if guess(cnf, change + 1, valuation) {
        return true;
    }
    valuation[change] = true;
    let found = guess(cnf, change + 1, valuation);
    if !found {
        valuation[change] = false;
    }
    found
}

fn satisfies(cnf: &CNF, valuation: &[bool]) -> bool {
    cnf.clauses
        .iter()
        .all(|clause| clause.vars.iter().any(|lit| valuation[lit.id - 1] == lit.sign))
}
