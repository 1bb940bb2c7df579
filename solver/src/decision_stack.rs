//! The append-only log of variable assignments the DPLL driver builds up
//! during search.
//!
//! Each entry remembers not just which variable got which value, but
//! whether the assignment was a free choice (a *decision*) or forced by
//! unit propagation or pure-literal elimination. Backtracking undoes
//! entries down to and including the most recent decision, flips its
//! value, and re-pushes it as a decision at the same decision level.

use crate::cnf::VarId;
use crate::formula::{Formula, VarValue};

/// Why a variable received its current value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
    /// A free choice made by the branching heuristic.
    Decision,
    /// Forced by unit propagation or pure-literal elimination.
    Forced,
}

/// One entry in the decision stack.
#[derive(Clone, Copy, Debug)]
pub struct StackEntry {
    pub variable: VarId,
    pub value: VarValue,
    pub reason: Reason,
    pub decision_level: u32,
}

/// The decision stack itself. Holds no assignment state of its own beyond
/// the log; `Formula::value` remains the single source of truth for "what
/// is variable v assigned to right now".
#[derive(Clone, Debug, Default)]
pub struct DecisionStack {
    entries: Vec<StackEntry>,
    current_level: u32,
}

impl DecisionStack {
    pub fn new() -> DecisionStack {
        DecisionStack {
            entries: Vec::new(),
            current_level: 0,
        }
    }

    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records a forced assignment (unit propagation / pure literal) at
    /// the current decision level and applies it to `formula`.
    pub fn push_forced(&mut self, formula: &mut Formula, variable: VarId, value: VarValue) {
        formula.set(variable, value);
        self.entries.push(StackEntry {
            variable,
            value,
            reason: Reason::Forced,
            decision_level: self.current_level,
        });
    }

    /// Records a free decision, opening a new decision level, and applies
    /// it to `formula`.
    pub fn push_decision(&mut self, formula: &mut Formula, variable: VarId, value: VarValue) {
        self.current_level += 1;
        formula.set(variable, value);
        self.entries.push(StackEntry {
            variable,
            value,
            reason: Reason::Decision,
            decision_level: self.current_level,
        });
    }

    /// Undoes entries back to and including the most recent decision,
    /// then re-pushes that variable **as a decision** with the opposite
    /// value, at the same decision level it was originally decided at.
    /// Re-pushing as a decision, rather than as forced, keeps the current
    /// decision level consistent with the count of decision entries on the
    /// stack: the level dips by one when the old decision is popped and is
    /// restored by the flip, rather than permanently losing a decision.
    /// Returns `false` if there is no decision left to flip (the stack
    /// holds only level-0 forced entries), meaning the search has
    /// exhausted every branch: the formula is unsatisfiable.
    pub fn backtrack(&mut self, formula: &mut Formula) -> bool {
        while let Some(entry) = self.entries.pop() {
            formula.clear(entry.variable);
            if entry.reason == Reason::Decision {
                self.current_level -= 1;
                let flipped = !entry.value;
                self.push_decision(formula, entry.variable, flipped);
                return true;
            }
        }
        self.current_level = 0;
        false
    }

    /// Undoes every entry above decision level 0, returning to the state
    /// search was in right after preprocessing. Used when a restart
    /// discards the search tree built up so far; level-0 entries are
    /// forced assignments made before any decision was taken and remain
    /// valid regardless of how the tree above them is thrown away.
    pub fn clear(&mut self, formula: &mut Formula) {
        while self.entries.last().map_or(false, |e| e.decision_level > 0) {
            let entry = self.entries.pop().unwrap();
            formula.clear(entry.variable);
        }
        self.current_level = 0;
    }

    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }
}
