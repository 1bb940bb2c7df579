//! Pure-literal elimination.
//!
//! A single pass: for every unassigned variable, scan the live clauses to
//! see which polarities it appears in. A variable observed in exactly one
//! polarity is assigned to satisfy it, pushed as a propagation rather
//! than a decision, since it cannot conflict with anything already
//! satisfied or pending.

use crate::decision_stack::DecisionStack;
use crate::eval;
use crate::formula::{Formula, VarValue};
use crate::stats::Stats;

/// Runs one pass of pure-literal elimination. Returns `true` iff at least
/// one variable was assigned.
pub fn pure_literal_elimination(
    formula: &mut Formula,
    stack: &mut DecisionStack,
    stats: &mut Stats,
) -> bool {
    let mut polarity_seen = vec![(false, false); formula.num_variables + 1];

    for clause in &formula.clauses {
        if eval::sat(clause, formula) {
            continue;
        }
        for &lit in &clause.vars {
            if formula.value(lit.id) != VarValue::Unassigned {
                continue;
            }
            let entry = &mut polarity_seen[lit.id];
            if lit.sign {
                entry.0 = true;
            } else {
                entry.1 = true;
            }
        }
    }

    let mut changed = false;
    for var in 1..=formula.num_variables {
        if formula.value(var) != VarValue::Unassigned {
            continue;
        }
        let (pos, neg) = polarity_seen[var];
        let value = match (pos, neg) {
            (true, false) => Some(VarValue::True),
            (false, true) => Some(VarValue::False),
            _ => None,
        };
        if let Some(value) = value {
            stack.push_forced(formula, var, value);
            stats.pure_literals += 1;
            changed = true;
        }
    }

    changed
}
