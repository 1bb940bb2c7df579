use itertools::Itertools;
use std::collections::HashSet;
use std::fmt;
use std::iter::FromIterator;

/// Type used for referencing logical variables. Variables are positive
/// integers in `[1, N]`; `0` never denotes a variable.
pub type VarId = usize;

/// Representation of a CNF formula as parsed or constructed by a caller,
/// before it is handed to the solver.
///
/// `CNF` only knows about clauses; it carries no assignment state. The
/// solver turns a `CNF` into a [`crate::formula::Formula`] which adds the
/// assignment vector and the `variable_used` flags.
#[derive(Clone, Debug, Default)]
pub struct CNF {
    /// Vector of inner clauses
    pub clauses: Vec<CNFClause>,
    pub num_variables: usize,
}

/// Representation of a clause (disjunction of literals).
///
/// Literal order is insertion order: no algorithm in this crate depends on
/// any particular ordering, so none is imposed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CNFClause {
    /// Vector of inner literals, in insertion order
    pub vars: Vec<CNFVar>,
}

/// A literal: a variable together with its polarity.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash)]
pub struct CNFVar {
    /// Identifier of a variable
    pub id: VarId,
    /// Variable is negated iff `sign == false`
    pub sign: bool,
}

impl CNF {
    /// Creates an empty CNF formula
    #[inline]
    pub fn empty() -> CNF {
        CNF {
            clauses: Vec::new(),
            num_variables: 0,
        }
    }

    /// Creates a singleton CNF formula out of a single clause
    #[inline]
    pub fn single(clause: CNFClause) -> CNF {
        CNF {
            num_variables: clause.max_variable_id(),
            clauses: vec![clause],
        }
    }

    /// Adds a new clause to the formula. Tautological clauses (containing
    /// both polarities of some variable) are dropped silently, matching
    /// the DIMACS reader's contract.
    pub fn push(&mut self, c: CNFClause) {
        if c.is_tautology() {
            return;
        }
        self.num_variables = self.num_variables.max(c.max_variable_id());
        self.clauses.push(c);
    }

    pub fn extend(&mut self, c: CNF) {
        self.num_variables = self.num_variables.max(c.num_variables);
        for clause in c.clauses {
            self.push(clause);
        }
    }

    /// Returns number of clauses in the formula
    #[inline]
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Collects all variable identifiers that appear in the formula
    pub fn vars(&self) -> HashSet<VarId> {
        self.clauses
            .iter()
            .flat_map(|clause| clause.vars.iter().map(CNFVar::id))
            .unique()
            .collect()
    }
}

impl FromIterator<CNFClause> for CNF {
    fn from_iter<I: IntoIterator<Item = CNFClause>>(iter: I) -> Self {
        let mut cnf = CNF::empty();
        for clause in iter {
            cnf.push(clause);
        }
        cnf
    }
}

impl IntoIterator for CNF {
    type Item = CNFClause;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

impl CNFClause {
    /// Creates an empty CNF clause
    #[inline]
    pub fn new() -> CNFClause {
        CNFClause { vars: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> CNFClause {
        CNFClause {
            vars: Vec::with_capacity(capacity),
        }
    }

    /// Creates a CNF clause containing a single literal
    #[inline]
    pub fn single(var: CNFVar) -> CNFClause {
        CNFClause { vars: vec![var] }
    }

    /// Adds a single literal to the clause. Re-inserting a literal that is
    /// already present is a no-op; insertion order is otherwise preserved.
    pub fn push(&mut self, v: CNFVar) {
        if !self.vars.contains(&v) {
            self.vars.push(v);
        }
    }

    /// Returns the greatest variable identifier used in the clause
    pub fn max_variable_id(&self) -> usize {
        self.vars.iter().map(|lit| lit.id).max().unwrap_or(0)
    }

    /// Concatenates clauses, respecting the no-duplicate-literal invariant
    pub fn extend(&mut self, c: CNFClause) {
        self.vars.reserve(c.len());
        for v in c {
            self.push(v)
        }
    }

    /// Number of literals in the clause
    #[inline]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// True iff some variable appears with both polarities in this clause.
    pub fn is_tautology(&self) -> bool {
        self.vars.iter().any(|lit| self.vars.contains(&-*lit))
    }
}

impl Default for CNFClause {
    fn default() -> Self {
        CNFClause::new()
    }
}

impl FromIterator<CNFVar> for CNFClause {
    fn from_iter<I: IntoIterator<Item = CNFVar>>(iter: I) -> Self {
        let mut clause = CNFClause::new();
        for v in iter {
            clause.push(v);
        }
        clause
    }
}

impl IntoIterator for CNFClause {
    type Item = CNFVar;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}

impl CNFVar {
    /// Creates a literal with given identifier and polarity
    #[inline]
    pub fn new(id: VarId, sign: bool) -> CNFVar {
        CNFVar { id, sign }
    }

    /// Creates a positive literal with given identifier
    #[inline]
    pub fn pos(id: VarId) -> CNFVar {
        CNFVar { id, sign: true }
    }

    /// Creates a negative literal with given identifier
    #[inline]
    pub fn neg(id: VarId) -> CNFVar {
        CNFVar { id, sign: false }
    }

    /// The identifier of the underlying variable
    #[inline]
    pub fn id(&self) -> VarId {
        self.id
    }

    /// True iff the literal is positive
    #[inline]
    pub fn sign(&self) -> bool {
        self.sign
    }

    /// Converts to a signed DIMACS-style integer. Not overflow-friendly for
    /// variable ids beyond `i32::MAX`.
    pub fn to_i32(&self) -> i32 {
        if self.sign {
            self.id as i32
        } else {
            -(self.id as i32)
        }
    }
}

impl std::ops::Neg for CNFVar {
    type Output = CNFVar;
    fn neg(mut self) -> Self::Output {
        self.sign = !self.sign;
        self
    }
}

impl From<CNFVar> for (VarId, bool) {
    fn from(lit: CNFVar) -> Self {
        (lit.id, lit.sign)
    }
}

impl fmt::Display for CNF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.clauses {
            writeln!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl fmt::Display for CNFClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.vars {
            write!(f, "({})  ", c)?;
        }
        Ok(())
    }
}

impl fmt::Display for CNFVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_i32())
    }
}
