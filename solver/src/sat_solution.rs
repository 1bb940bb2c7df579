use crate::resource::StopReason;
use crate::stats::Stats;

/// A total valuation, one entry per variable in ascending order.
pub type Valuation = Vec<bool>;

/// The terminal outcome of a solve, together with the counters collected
/// along the way.
///
/// `Timeout` and `Unknown` collapse to the same `s UNKNOWN` line at the
/// DIMACS-style output boundary (spec's documented interface contract),
/// but are kept distinct internally so `-s/--stats` can report *why* the
/// solver gave up.
#[derive(Debug, PartialEq)]
pub enum SolverResult {
    Satisfiable(Valuation),
    Unsatisfiable,
    Unknown,
    Timeout,
    Error(String),
}

impl SolverResult {
    pub fn from_stop_reason(reason: StopReason) -> SolverResult {
        match reason {
            StopReason::Timeout => SolverResult::Timeout,
            StopReason::DecisionCapReached
            | StopReason::NoProgress
            | StopReason::IterationCapReached => SolverResult::Unknown,
        }
    }

    pub fn is_sat(&self) -> bool {
        matches!(self, SolverResult::Satisfiable(_))
    }

    pub fn is_unsat(&self) -> bool {
        matches!(self, SolverResult::Unsatisfiable)
    }

    /// True for any result reported as `s UNKNOWN` at the output boundary.
    pub fn is_unknown(&self) -> bool {
        matches!(self, SolverResult::Unknown | SolverResult::Timeout)
    }

    /// The exit code this result maps to at the CLI boundary: 10 SAT, 20
    /// UNSAT, 0 UNKNOWN/TIMEOUT, 1 error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SolverResult::Satisfiable(_) => 10,
            SolverResult::Unsatisfiable => 20,
            SolverResult::Unknown | SolverResult::Timeout => 0,
            SolverResult::Error(_) => 1,
        }
    }

    /// Renders the DIMACS-style output: `s SATISFIABLE|UNSATISFIABLE|UNKNOWN`
    /// followed, on SAT, by `<v> = <bit>` lines in ascending variable order.
    pub fn to_dimacs(&self) -> String {
        match self {
            SolverResult::Unsatisfiable => "s UNSATISFIABLE\n".to_string(),
            SolverResult::Unknown | SolverResult::Timeout => "s UNKNOWN\n".to_string(),
            SolverResult::Error(msg) => format!("s UNKNOWN\nc error: {}\n", msg),
            SolverResult::Satisfiable(valuation) => {
                let mut out = String::from("s SATISFIABLE\n");
                for (idx, value) in valuation.iter().enumerate() {
                    out.push_str(&format!("{} = {}\n", idx + 1, *value as u8));
                }
                out
            }
        }
    }

    /// Human-readable counters line, used by `-s/--stats`.
    pub fn stats_report(&self, stats: &Stats) -> String {
        format!(
            "decisions={} propagations={} pure_literals={} backtracks={} restarts={}",
            stats.decisions,
            stats.propagations,
            stats.pure_literals,
            stats.backtracks,
            stats.restarts
        )
    }
}
