//! The DPLL driver: decide → propagate → detect → backtrack.
//!
//! One outer state machine calls decision, propagation, pure-literal, and
//! backtracking in sequence each iteration. Resource limits are enforced
//! by polling [`crate::resource::ResourceGuard`] at the top of the loop
//! rather than through any cooperative yielding, since the search is
//! single-threaded and synchronous throughout.

use log::{debug, trace, warn};

use crate::config::SolverConfig;
use crate::decision_stack::DecisionStack;
use crate::formula::{Formula, VarValue};
use crate::heuristics::{self, Lcg32};
use crate::propagation::{unit_propagation, PropagationResult};
use crate::pure_literal::pure_literal_elimination;
use crate::resource::{ProgressGuard, ResourceGuard, StopReason};
use crate::sat_solution::SolverResult;
use crate::stats::{validate_model, Stats};

/// Runs one solve to completion (or until a resource limit stops it).
///
/// Takes ownership of `formula` via `&mut` for the duration of the call;
/// on return the formula's assignment reflects whatever partial or total
/// model the search ended on, which callers generally ignore in favor of
/// the valuation carried inside `SolverResult::Satisfiable`.
pub fn solve(formula: &mut Formula, config: &SolverConfig) -> (SolverResult, Stats) {
    let mut stats = Stats::new();
    let mut stack = DecisionStack::new();
    let mut rng = Lcg32::new(config.rng_seed);
    let mut guard = ResourceGuard::new(config.timeout, config.max_decisions);

    if let Some(result) = preprocess(formula, &mut stack, &mut stats, config) {
        debug!("preprocessing reached a terminal result before branching began");
        return (result, stats);
    }

    loop {
        if let Some(reason) = guard.check(&stats) {
            debug!("driver stopping: {:?}", reason);
            return (SolverResult::from_stop_reason(reason), stats);
        }

        let progress = ProgressGuard::new(stack.len(), &stats);

        if formula.satisfied() {
            return (finish_satisfiable(formula), stats);
        }

        if formula.has_conflict() {
            if !backtrack(&mut stack, formula, &mut stats) {
                return (SolverResult::Unsatisfiable, stats);
            }
            continue;
        }

        if config.enable_propagation {
            trace!("running unit propagation");
            if unit_propagation(formula, &mut stack, &mut stats) == PropagationResult::Satisfied {
                return (finish_satisfiable(formula), stats);
            }
            if formula.has_conflict() {
                if !backtrack(&mut stack, formula, &mut stats) {
                    return (SolverResult::Unsatisfiable, stats);
                }
                continue;
            }
        }

        if config.enable_pure_literal {
            trace!("running pure-literal elimination");
            pure_literal_elimination(formula, &mut stack, &mut stats);
            if formula.has_conflict() {
                if !backtrack(&mut stack, formula, &mut stats) {
                    return (SolverResult::Unsatisfiable, stats);
                }
                continue;
            }
            if formula.satisfied() {
                return (finish_satisfiable(formula), stats);
            }
        }

        match heuristics::choose(formula, config.strategy, &mut rng) {
            Some(var) => {
                trace!("branching on variable {}", var);
                stack.push_decision(formula, var, VarValue::True);
                stats.decisions += 1;
            }
            None => {
                return (
                    if formula.satisfied() {
                        finish_satisfiable(formula)
                    } else {
                        SolverResult::Unsatisfiable
                    },
                    stats,
                );
            }
        }

        if config.enable_restarts && stats.conflicts_since_restart >= config.restart_threshold as u64 {
            debug!("restarting after {} conflicts", stats.conflicts_since_restart);
            stack.clear(formula);
            stats.on_restart();
        }

        if progress.stalled(stack.len(), &stats) {
            warn!("progress guard fired: no decision, propagation, or backtrack occurred");
            return (SolverResult::from_stop_reason(StopReason::NoProgress), stats);
        }
    }
}

/// Alternates pure-literal elimination and unit propagation before the
/// main loop starts branching, to a fixed point (no change in stack
/// size across one full pass of both). Returns `Some` if the formula is
/// resolved outright during preprocessing.
fn preprocess(
    formula: &mut Formula,
    stack: &mut DecisionStack,
    stats: &mut Stats,
    config: &SolverConfig,
) -> Option<SolverResult> {
    loop {
        let before = stack.len();

        if config.enable_pure_literal {
            pure_literal_elimination(formula, stack, stats);
            if formula.has_conflict() {
                return Some(SolverResult::Unsatisfiable);
            }
            if formula.satisfied() {
                return Some(finish_satisfiable(formula));
            }
        }

        if config.enable_propagation {
            unit_propagation(formula, stack, stats);
            if formula.has_conflict() {
                return Some(SolverResult::Unsatisfiable);
            }
            if formula.satisfied() {
                return Some(finish_satisfiable(formula));
            }
        }

        if stack.len() == before {
            return None;
        }
    }
}

/// Pops back to and flips the most recent decision, counting the attempt
/// whether or not one was available to flip.
fn backtrack(stack: &mut DecisionStack, formula: &mut Formula, stats: &mut Stats) -> bool {
    let ok = stack.backtrack(formula);
    if ok {
        stats.backtracks += 1;
    }
    ok
}

/// Builds the SAT result, validating the model as a final soundness
/// check. A validation failure indicates a broken driver invariant, not
/// a legitimate instance property, and is surfaced as `SolverResult::Error`
/// rather than silently returned as if it were trustworthy.
fn finish_satisfiable(formula: &Formula) -> SolverResult {
    if !validate_model(&formula.clauses, formula) {
        return SolverResult::Error(
            "driver reported SATISFIABLE but the model fails validation".to_string(),
        );
    }
    SolverResult::Satisfiable(formula.to_valuation())
}
