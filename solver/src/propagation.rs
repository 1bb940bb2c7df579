//! Fixed-point unit propagation.
//!
//! Deliberately a full rescan of every clause on every pass rather than
//! incremental occurrence-list bookkeeping: a clause's "live" status can
//! only be invalidated by assignments made since the last pass, and
//! re-deriving it from scratch each time avoids the desynchronization
//! risk of cached per-variable occurrence lists when backtracking rewinds
//! assignments out from under them.

use crate::decision_stack::DecisionStack;
use crate::eval;
use crate::formula::{Formula, VarValue};
use crate::stats::Stats;

/// Outcome of a propagation pass. A conflict is not reported here: per
/// the driver's contract, the caller re-checks `formula.has_conflict()`
/// itself after the call returns.
#[derive(Debug, PartialEq, Eq)]
pub enum PropagationResult {
    /// All clauses are satisfied.
    Satisfied,
    /// Fixed point reached; some clauses may remain unsatisfied but none
    /// are unit and none are in conflict.
    Unknown,
}

/// Repeatedly scans every clause, assigning the consequence of any unit
/// clause found, until a full pass makes no new assignment (fixed point)
/// or a conflicting unit is found.
///
/// On detecting a literal whose variable is already assigned to the
/// opposite value, the pass stops immediately without completing: the
/// conflict itself is left for `formula.has_conflict()` to report, per
/// the documented propagation policy of not returning a conflict signal
/// from this routine directly.
pub fn unit_propagation(
    formula: &mut Formula,
    stack: &mut DecisionStack,
    stats: &mut Stats,
) -> PropagationResult {
    loop {
        let mut made_progress = false;
        for i in 0..formula.clauses.len() {
            let clause = &formula.clauses[i];
            if eval::sat(clause, formula) {
                continue;
            }
            if let Some(lit) = eval::unit(clause, formula) {
                let val = VarValue::of_sign(lit.sign);
                match formula.value(lit.id) {
                    VarValue::Unassigned => {
                        stack.push_forced(formula, lit.id, val);
                        stats.propagations += 1;
                        made_progress = true;
                    }
                    existing if existing == val => {
                        // Already holds; nothing to do.
                    }
                    _ => {
                        stats.conflicts_since_restart += 1;
                        return PropagationResult::Unknown;
                    }
                }
            }
        }
        if !made_progress {
            break;
        }
    }

    if formula.satisfied() {
        PropagationResult::Satisfied
    } else {
        PropagationResult::Unknown
    }
}
