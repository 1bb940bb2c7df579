//! Differential tests: the DPLL driver must agree with the exhaustive
//! brute-force oracle on satisfiability, and any model it returns must
//! actually satisfy the formula.
//!
//! `proptest` generates random CNF formulas; `solver::bruteforce` is the
//! reference oracle they're checked against, since there is no external
//! reference solver in this crate's dependency stack. Variable counts are
//! kept small (brute force is exponential) but still exercise
//! multi-level backtracking.

use proptest::{bool::weighted, collection::vec, prelude::*};

use solver::config::SolverConfig;
use solver::formula::Formula;
use solver::heuristics::Strategy;
use solver::sat_solution::SolverResult;
use solver::{bruteforce, solve, CNFClause, CNFVar, CNF};

const MAX_NUM_VARIABLES: usize = 10;
const MAX_NUM_LITERALS: usize = 4;
const MAX_NUM_CLAUSES: usize = 8;

fn cnf_from(clauses: Vec<CNFClause>) -> CNF {
    clauses.into_iter().collect()
}

fn run_dpll(cnf: CNF, num_variables: usize, strategy: Strategy) -> SolverResult {
    let mut formula = Formula::new(cnf, num_variables).expect("variables are in range by construction");
    let mut config = SolverConfig::default();
    config.strategy = strategy;
    solve(&mut formula, &config).0
}

fn is_satisfied(clauses: &[CNFClause], assignment: &[bool]) -> bool {
    clauses
        .iter()
        .all(|clause| clause.vars.iter().any(|var| assignment[var.id - 1] == var.sign))
}

fn check_all_strategies(clauses: Vec<CNFClause>, num_variables: usize) {
    let cnf = cnf_from(clauses.clone());
    let reference = bruteforce::solve(&cnf, num_variables);

    for strategy in [
        Strategy::First,
        Strategy::MostFrequent,
        Strategy::JeroslowWang,
        Strategy::Random,
    ] {
        let result = run_dpll(cnf.clone(), num_variables, strategy);
        assert_eq!(
            result.is_unsat(),
            reference.is_unsat(),
            "strategy {:?} disagreed with brute force on satisfiability",
            strategy
        );
        if let SolverResult::Satisfiable(assignment) = result {
            assert!(
                is_satisfied(&clauses, &assignment),
                "strategy {:?} returned a model that does not satisfy the formula",
                strategy
            );
        }
    }
}

proptest! {
    #[test]
    fn only_positive_unit_clauses(num_variables in 1..=MAX_NUM_VARIABLES) {
        let clauses = (1..=num_variables)
            .map(|id| CNFClause::single(CNFVar::pos(id)))
            .collect::<Vec<_>>();
        check_all_strategies(clauses, num_variables);
    }

    #[test]
    fn only_negative_unit_clauses(num_variables in 1..=MAX_NUM_VARIABLES) {
        let clauses = (1..=num_variables)
            .map(|id| CNFClause::single(CNFVar::neg(id)))
            .collect::<Vec<_>>();
        check_all_strategies(clauses, num_variables);
    }

    #[test]
    fn only_unit_clauses(signs in vec(weighted(0.5), 1..=MAX_NUM_VARIABLES)) {
        let num_variables = signs.len();
        let clauses = signs
            .iter()
            .cloned()
            .enumerate()
            .map(|(idx, sign)| CNFClause::single(CNFVar::new(idx + 1, sign)))
            .collect::<Vec<_>>();
        check_all_strategies(clauses, num_variables);
    }

    #[test]
    fn arbitrary_cnf_formula(
        clauses in vec(vec((1..=MAX_NUM_VARIABLES, weighted(0.5)), 1..=MAX_NUM_LITERALS), 1..=MAX_NUM_CLAUSES)
    ) {
        let num_variables = clauses
            .iter()
            .flat_map(|clause| clause.iter().map(|(var, _)| *var))
            .max()
            .expect("at least one clause with at least one literal");

        let clauses = clauses
            .into_iter()
            .map(|clause| clause.into_iter().map(|(id, sign)| CNFVar::new(id, sign)).collect())
            .collect::<Vec<CNFClause>>();

        check_all_strategies(clauses, num_variables);
    }
}
