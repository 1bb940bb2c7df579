//! Benchmarks the DPLL driver across branching strategies on synthetic
//! random 3-CNF instances.
//!
//! One `criterion` group per branching strategy, one `bench_function` per
//! instance size, batched with `BatchSize::SmallInput` since cloning a
//! formula is cheap relative to solving it. No `.cnf` fixtures are checked
//! into this crate, so corpora are generated in-process with `rand` (a
//! dev-dependency kept for exactly this, separate from the core
//! random-branching LCG, which must stay reproducible across platforms).

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use solver::config::SolverConfig;
use solver::formula::Formula;
use solver::heuristics::Strategy;
use solver::{solve, CNFClause, CNFVar, CNF};

/// Generates a random 3-CNF instance: `num_clauses` clauses of exactly 3
/// distinct literals each, drawn uniformly from `num_variables` variables
/// with a uniformly random polarity. Deterministic for a fixed seed so
/// benchmark runs are reproducible across invocations.
fn random_3cnf(num_variables: usize, num_clauses: usize, seed: u64) -> CNF {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut cnf = CNF::empty();
    for _ in 0..num_clauses {
        let mut clause = CNFClause::with_capacity(3);
        while clause.len() < 3 {
            let id = rng.gen_range(1, num_variables + 1);
            let sign = rng.gen_bool(0.5);
            clause.push(CNFVar::new(id, sign));
        }
        cnf.push(clause);
    }
    cnf.num_variables = cnf.num_variables.max(num_variables);
    cnf
}

/// Random 3-CNF instances near the satisfiability threshold (clause/variable
/// ratio ~4.2) are the hardest for DPLL-style search, so benchmarking at
/// that ratio is the most informative use of a fixed time budget.
fn corpus(num_variables: usize) -> CNF {
    let num_clauses = (num_variables as f64 * 4.2) as usize;
    random_3cnf(num_variables, num_clauses, num_variables as u64)
}

fn bench_strategy(c: &mut Criterion, name: &str, strategy: Strategy) {
    let mut group = c.benchmark_group(name);

    for &num_variables in &[20usize, 40, 60] {
        let cnf = corpus(num_variables);
        let mut config = SolverConfig::default();
        config.strategy = strategy;

        group.bench_function(format!("vars-{}", num_variables), |b| {
            b.iter_batched(
                || Formula::new(cnf.clone(), num_variables).expect("valid variable range"),
                |mut formula| black_box(solve(&mut formula, &config)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_strategy(c, "first", Strategy::First);
    bench_strategy(c, "most-frequent", Strategy::MostFrequent);
    bench_strategy(c, "jeroslow-wang", Strategy::JeroslowWang);
    bench_strategy(c, "random", Strategy::Random);
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}
criterion_main!(benches);
