use crate::cnf::{CNFClause, CNFVar, VarId, CNF};
use crate::error::SolveError;

/// The truth value of a variable in the current (partial) model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VarValue {
    /// Variable is assigned true
    True,
    /// Variable is assigned false
    False,
    /// Variable has not been assigned yet
    Unassigned,
}

impl VarValue {
    /// The value that satisfies a literal with the given polarity.
    pub fn of_sign(sign: bool) -> VarValue {
        if sign {
            VarValue::True
        } else {
            VarValue::False
        }
    }
}

impl std::ops::Not for VarValue {
    type Output = VarValue;
    fn not(self) -> VarValue {
        match self {
            VarValue::True => VarValue::False,
            VarValue::False => VarValue::True,
            VarValue::Unassigned => VarValue::Unassigned,
        }
    }
}

/// The mutable state the DPLL driver operates on: the clauses of the
/// formula, indexed 1..=num_variables, plus the dense assignment vector
/// (index 0 unused) and the per-variable "does this variable occur
/// anywhere" flag.
///
/// `Formula` is the single source of truth for the current partial model;
/// the decision stack is a log of how `assignment` was built up; it never
/// duplicates the assignment itself.
#[derive(Clone, Debug)]
pub struct Formula {
    pub clauses: Vec<CNFClause>,
    pub num_variables: usize,
    assignment: Vec<VarValue>,
    variable_used: Vec<bool>,
}

impl Formula {
    /// Builds a `Formula` from a parsed/constructed `CNF`, validating that
    /// every literal references a variable in `[1, num_variables]`.
    ///
    /// `num_variables` is taken from the caller (typically the DIMACS
    /// header) rather than inferred from the clauses, so that formulas
    /// with trailing unused variables still get an assignment slot for
    /// them (reported as `0` per the output contract).
    pub fn new(cnf: CNF, num_variables: usize) -> Result<Formula, SolveError> {
        for clause in &cnf.clauses {
            for lit in &clause.vars {
                if lit.id == 0 || lit.id > num_variables {
                    return Err(SolveError::InvariantViolation(format!(
                        "literal references variable {} outside [1, {}]",
                        lit.id, num_variables
                    )));
                }
            }
        }

        let mut variable_used = vec![false; num_variables + 1];
        for clause in &cnf.clauses {
            for lit in &clause.vars {
                variable_used[lit.id] = true;
            }
        }

        Ok(Formula {
            clauses: cnf.clauses,
            num_variables,
            assignment: vec![VarValue::Unassigned; num_variables + 1],
            variable_used,
        })
    }

    #[inline]
    pub fn value(&self, var: VarId) -> VarValue {
        self.assignment[var]
    }

    #[inline]
    pub fn is_used(&self, var: VarId) -> bool {
        self.variable_used[var]
    }

    /// Direct assignment mutation. Only the decision stack (via `push`)
    /// and backtracking (via `clear`) are expected to call this; it is
    /// `pub(crate)` to keep `assignment` as the single writable copy of
    /// the model while still letting `decision_stack` live in its own
    /// module.
    pub(crate) fn set(&mut self, var: VarId, value: VarValue) {
        self.assignment[var] = value;
    }

    pub(crate) fn clear(&mut self, var: VarId) {
        self.assignment[var] = VarValue::Unassigned;
    }

    /// True iff a literal evaluates to true under the current assignment.
    pub fn literal_true(&self, lit: CNFVar) -> bool {
        self.value(lit.id) == VarValue::of_sign(lit.sign)
    }

    /// True iff a literal evaluates to false under the current assignment.
    pub fn literal_false(&self, lit: CNFVar) -> bool {
        self.value(lit.id) == VarValue::of_sign(!lit.sign)
    }

    /// True iff every clause is satisfied by the current assignment.
    pub fn satisfied(&self) -> bool {
        self.clauses
            .iter()
            .all(|clause| crate::eval::sat(clause, self))
    }

    /// True iff some clause is falsified by the current assignment.
    pub fn has_conflict(&self) -> bool {
        self.clauses
            .iter()
            .any(|clause| crate::eval::conflict(clause, self))
    }

    /// Returns the first unassigned variable in `1..=num_variables`, or
    /// `None` if every variable has a value. Used by the driver's BRANCH
    /// step once a heuristic reports no candidate (it should agree).
    pub fn first_unassigned(&self) -> Option<VarId> {
        (1..=self.num_variables).find(|&v| self.value(v) == VarValue::Unassigned)
    }

    /// Completes a partial assignment into a total `Vec<bool>` valuation,
    /// one entry per variable (`assignment[0]` corresponds to variable 1),
    /// with any variable left `Unassigned` reported as `false` per the
    /// output contract ("variables left UNASSIGNED after search are
    /// reported as 0").
    pub fn to_valuation(&self) -> Vec<bool> {
        (1..=self.num_variables)
            .map(|v| self.value(v) == VarValue::True)
            .collect()
    }
}
