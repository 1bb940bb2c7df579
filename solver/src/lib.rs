//! A DPLL-based solver for propositional formulas in conjunctive normal
//! form: decide → propagate → detect conflict → backtrack, with
//! pure-literal elimination and a choice of branching heuristics.
//!
//! Intended for instructional use and small-to-medium instances, not as
//! a competitive solver: no clause learning, no watched literals, no
//! incremental solving across calls.

/// Exhaustive reference oracle used by the differential test suite.
pub mod bruteforce;
/// The CNF representation of a formula: literals, clauses, formulas.
pub mod cnf;
/// Solver configuration: branching strategy, resource limits, engine toggles.
pub mod config;
mod decision_stack;
/// The DIMACS CNF text format reader and writer.
pub mod dimacs;
/// The DPLL search engine itself.
mod dpll;
/// Parse and solve error types.
pub mod error;
mod eval;
/// The mutable search state: clauses, assignment, per-variable usage.
pub mod formula;
/// Branching heuristics the driver chooses among.
pub mod heuristics;
mod propagation;
mod pure_literal;
mod resource;
/// The terminal outcome of a solve and its DIMACS-style rendering.
pub mod sat_solution;
/// Running counters for one solve.
pub mod stats;

pub use cnf::{CNFClause, CNFVar, VarId, CNF};
pub use config::SolverConfig;
pub use decision_stack::{DecisionStack, Reason, StackEntry};
pub use dimacs::{read as read_dimacs, write as write_dimacs, ParseMode};
pub use dpll::solve;
pub use error::{ParseError, SolveError};
pub use formula::{Formula, VarValue};
pub use heuristics::{Lcg32, Strategy};
pub use resource::StopReason;
pub use sat_solution::{SolverResult, Valuation};
pub use stats::Stats;
