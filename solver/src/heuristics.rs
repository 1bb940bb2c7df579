//! Branching heuristics.
//!
//! Four strategies: first-unassigned, most-frequent, Jeroslow-Wang, and a
//! seeded random choice. All four share the `is_live` predicate from
//! `eval` rather than each re-deriving which clauses still matter.

use crate::cnf::VarId;
use crate::eval;
use crate::formula::Formula;

/// Selects which branching heuristic the driver's BRANCH step uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Smallest unassigned variable index.
    First,
    /// Unassigned variable maximizing `freq(+v) + freq(-v)` over live clauses.
    MostFrequent,
    /// Unassigned variable maximizing `Σ 2^(-|C|)` over live clauses containing it.
    JeroslowWang,
    /// Uniform choice over the unassigned set, via a seeded LCG.
    Random,
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Strategy, String> {
        match s {
            "first" => Ok(Strategy::First),
            "frequent" => Ok(Strategy::MostFrequent),
            "jw" => Ok(Strategy::JeroslowWang),
            "random" => Ok(Strategy::Random),
            other => Err(format!(
                "unknown strategy {:?}; expected one of first, frequent, jw, random",
                other
            )),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::First => "first",
            Strategy::MostFrequent => "frequent",
            Strategy::JeroslowWang => "jw",
            Strategy::Random => "random",
        };
        write!(f, "{}", name)
    }
}

/// A 32-bit linear congruential generator, parameters from Numerical
/// Recipes. Deliberately not the `rand` crate: the random branching
/// strategy is required to be a process-wide, explicitly-seeded generator
/// whose sequence is reproducible across platforms and crate versions,
/// which a dependency's internal algorithm choice does not guarantee.
#[derive(Debug, Clone, Copy)]
pub struct Lcg32 {
    state: u32,
}

impl Lcg32 {
    pub fn new(seed: u32) -> Lcg32 {
        Lcg32 { state: seed }
    }

    /// Advances the generator and returns the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(1_664_525)
            .wrapping_add(1_013_904_223);
        self.state
    }

    /// Returns a value uniformly distributed in `0..bound`. `bound` must
    /// be nonzero; callers only invoke this with a nonempty candidate set.
    pub fn next_below(&mut self, bound: usize) -> usize {
        (self.next_u32() as usize) % bound
    }
}

/// Picks the next decision variable according to `strategy`. Returns
/// `None` iff no unassigned variable remains, which the driver treats as
/// "the formula has no unassigned variables left".
pub fn choose(formula: &Formula, strategy: Strategy, rng: &mut Lcg32) -> Option<VarId> {
    match strategy {
        Strategy::First => formula.first_unassigned(),
        Strategy::MostFrequent => most_frequent(formula),
        Strategy::JeroslowWang => jeroslow_wang(formula),
        Strategy::Random => random(formula, rng),
    }
}

fn unassigned_variables(formula: &Formula) -> impl Iterator<Item = VarId> + '_ {
    (1..=formula.num_variables).filter(move |&v| formula.value(v) == crate::formula::VarValue::Unassigned)
}

fn most_frequent(formula: &Formula) -> Option<VarId> {
    let mut best: Option<(VarId, u64)> = None;
    for var in unassigned_variables(formula) {
        let freq = live_clause_count_containing(formula, var);
        if best.map_or(true, |(_, b)| freq > b) {
            best = Some((var, freq));
        }
    }
    best.map(|(var, _)| var)
}

fn live_clause_count_containing(formula: &Formula, var: VarId) -> u64 {
    formula
        .clauses
        .iter()
        .filter(|clause| {
            eval::is_live(clause, formula) && clause.vars.iter().any(|lit| lit.id == var)
        })
        .count() as u64
}

fn jeroslow_wang(formula: &Formula) -> Option<VarId> {
    let mut best: Option<(VarId, f64)> = None;
    for var in unassigned_variables(formula) {
        let score: f64 = formula
            .clauses
            .iter()
            .filter(|clause| {
                eval::is_live(clause, formula) && clause.vars.iter().any(|lit| lit.id == var)
            })
            .map(|clause| 2f64.powi(-(clause.len() as i32)))
            .sum();
        if best.map_or(true, |(_, b)| score > b) {
            best = Some((var, score));
        }
    }
    best.map(|(var, _)| var)
}

fn random(formula: &Formula, rng: &mut Lcg32) -> Option<VarId> {
    let candidates: Vec<VarId> = unassigned_variables(formula).collect();
    if candidates.is_empty() {
        return None;
    }
    let idx = rng.next_below(candidates.len());
    Some(candidates[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cnf::{CNFVar, CNF};

    fn cnf_from(clauses: Vec<Vec<CNFVar>>) -> CNF {
        clauses
            .into_iter()
            .map(|lits| lits.into_iter().collect())
            .collect()
    }

    #[test]
    fn first_picks_smallest_unassigned_index() {
        let cnf = cnf_from(vec![vec![CNFVar::pos(3), CNFVar::pos(1), CNFVar::pos(2)]]);
        let formula = Formula::new(cnf, 3).unwrap();
        assert_eq!(formula.first_unassigned(), Some(1));
    }

    #[test]
    fn most_frequent_prefers_variable_in_more_live_clauses() {
        let cnf = cnf_from(vec![
            vec![CNFVar::pos(1), CNFVar::pos(2)],
            vec![CNFVar::neg(1), CNFVar::pos(3)],
            vec![CNFVar::pos(1)],
        ]);
        let formula = Formula::new(cnf, 3).unwrap();
        assert_eq!(most_frequent(&formula), Some(1));
    }

    #[test]
    fn jeroslow_wang_weighs_shorter_clauses_higher() {
        // Variable 2 appears only in a long clause; variable 1 appears in
        // a unit-length clause, which should dominate the JW score.
        let cnf = cnf_from(vec![
            vec![CNFVar::pos(1)],
            vec![CNFVar::pos(2), CNFVar::pos(3), CNFVar::neg(4)],
        ]);
        let formula = Formula::new(cnf, 4).unwrap();
        assert_eq!(jeroslow_wang(&formula), Some(1));
    }

    #[test]
    fn random_is_deterministic_for_a_fixed_seed() {
        let cnf = cnf_from(vec![vec![CNFVar::pos(1), CNFVar::pos(2), CNFVar::pos(3)]]);
        let formula = Formula::new(cnf, 3).unwrap();
        let mut rng_a = Lcg32::new(42);
        let mut rng_b = Lcg32::new(42);
        assert_eq!(random(&formula, &mut rng_a), random(&formula, &mut rng_b));
    }

    #[test]
    fn no_unassigned_variables_yields_none() {
        let cnf = CNF::empty();
        let formula = Formula::new(cnf, 0).unwrap();
        assert_eq!(formula.first_unassigned(), None);
        assert_eq!(most_frequent(&formula), None);
        assert_eq!(jeroslow_wang(&formula), None);
    }
}
