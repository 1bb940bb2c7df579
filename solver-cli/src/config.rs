use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;
use solver::{dimacs::ParseMode, config::SolverConfig, heuristics::Strategy};

/// Everything the CLI needs to run one solve, built from parsed `clap`
/// flags on top of [`SolverConfig::cli_default`].
pub struct Config {
    pub input: PathBuf,
    pub verbose: bool,
    pub show_assignment: bool,
    pub show_stats: bool,
    pub parse_mode: ParseMode,
    pub solver: SolverConfig,
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Config> {
        let input = PathBuf::from(
            matches
                .value_of("input")
                .context("missing required input path")?,
        );

        let mut solver = SolverConfig::cli_default();

        if let Some(strategy) = matches.value_of("strategy") {
            solver.strategy = Strategy::from_str(strategy).map_err(anyhow::Error::msg)?;
        }

        if let Some(secs) = matches.value_of("timeout") {
            let secs: u64 = secs.parse().context("--timeout expects a non-negative integer")?;
            solver.timeout = SolverConfig::timeout_from_cli_secs(secs);
        }

        if let Some(decisions) = matches.value_of("decisions") {
            let decisions: u32 = decisions
                .parse()
                .context("--decisions expects a non-negative integer")?;
            solver.max_decisions = SolverConfig::max_decisions_from_cli(decisions);
        }

        if let Some(seed) = matches.value_of("seed") {
            solver.rng_seed = seed.parse().context("--seed expects a 32-bit integer")?;
        }

        Ok(Config {
            input,
            verbose: matches.is_present("verbose"),
            show_assignment: matches.is_present("assignment"),
            show_stats: matches.is_present("stats"),
            parse_mode: if matches.is_present("permissive") {
                ParseMode::Permissive
            } else {
                ParseMode::Strict
            },
            solver,
        })
    }
}
