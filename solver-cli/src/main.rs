mod config;

use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::{App, Arg};
use log::{info, LevelFilter};

use config::Config;
use solver::dimacs;
use solver::sat_solution::SolverResult;
use solver::stats::validate_valuation;

fn make_config() -> Result<Config> {
    let matches = App::new("satisfy")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Radoslaw Rowicki <radrowicki@gmail.com>")
        .about("A DPLL-based solver for DIMACS CNF formulas")
        .arg(
            Arg::with_name("input")
                .help("Path to a DIMACS CNF input file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Enable debug logging"),
        )
        .arg(
            Arg::with_name("assignment")
                .short("a")
                .long("assignment")
                .help("Print a human-readable assignment and validate it"),
        )
        .arg(
            Arg::with_name("stats")
                .short("s")
                .long("stats")
                .help("Print solver counters"),
        )
        .arg(
            Arg::with_name("timeout")
                .short("t")
                .long("timeout")
                .takes_value(true)
                .value_name("SEC")
                .help("Timeout in seconds (0 = unlimited)"),
        )
        .arg(
            Arg::with_name("decisions")
                .short("d")
                .long("decisions")
                .takes_value(true)
                .value_name("N")
                .help("Max decisions (0 = unlimited)"),
        )
        .arg(
            Arg::with_name("strategy")
                .long("strategy")
                .takes_value(true)
                .possible_values(&["first", "frequent", "jw", "random"])
                .help("Branching heuristic"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .value_name("N")
                .help("Seed for the random-strategy LCG"),
        )
        .arg(
            Arg::with_name("permissive")
                .long("permissive")
                .help("Tolerate clause-count mismatches and drop empty clauses instead of rejecting them"),
        )
        .get_matches();

    Config::from_matches(&matches)
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::new().filter(None, level).init();
}

fn run() -> Result<i32> {
    let config = make_config()?;
    init_logging(config.verbose);

    let file = File::open(&config.input)
        .with_context(|| format!("could not open {}", config.input.display()))?;
    let mut formula = dimacs::read(BufReader::new(file), config.parse_mode)
        .with_context(|| format!("failed to parse {}", config.input.display()))?;

    let (result, stats) = solver::solve(&mut formula, &config.solver);
    info!("solve finished: {:?}", result);

    print!("{}", result.to_dimacs());

    if config.show_assignment {
        if let SolverResult::Satisfiable(valuation) = &result {
            for (idx, value) in valuation.iter().enumerate() {
                println!("variable {} = {}", idx + 1, value);
            }
            println!(
                "assignment validates: {}",
                validate_valuation(&formula.clauses, valuation)
            );
        }
    }

    if config.show_stats {
        println!("{}", result.stats_report(&stats));
    }

    Ok(result.exit_code())
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };
    std::process::exit(code);
}
