//! DIMACS CNF text format reader and writer.
//!
//! Reads a document line by line, classifying each line by its leading
//! character and accumulating literals across lines until a terminating
//! `0`, reporting diagnostics with the offending line number. Builds a
//! [`Formula`] through its normal public constructor, so this module
//! cannot violate any core invariant by construction — it is pure
//! text-to-`CNF`/`CNF`-to-text plumbing.

use std::io::BufRead;

use log::warn;

use crate::cnf::{CNFClause, CNFVar, CNF};
use crate::error::ParseError;
use crate::formula::Formula;

/// Maximum accepted line length, chosen to comfortably exceed any
/// legitimate individual clause line while still catching corrupt input.
const MAX_LINE_LEN: usize = 64 * 1024;

/// Strict mode rejects every malformed-input condition below as an
/// error; permissive mode tolerates clause-count mismatches and drops
/// (rather than rejects) an empty clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    Strict,
    Permissive,
}

/// Reads a DIMACS CNF document from `r`, returning a [`Formula`] with
/// variable count taken from the problem line.
pub fn read(r: impl BufRead, mode: ParseMode) -> Result<Formula, ParseError> {
    let mut num_variables: Option<usize> = None;
    let mut expected_clauses: Option<usize> = None;
    let mut cnf = CNF::empty();
    let mut current = CNFClause::new();
    let mut saw_any_line = false;
    let mut line_no = 0usize;

    for line in r.lines() {
        line_no += 1;
        let line = line.map_err(ParseError::Io)?;
        if line.len() > MAX_LINE_LEN {
            return Err(ParseError::LineTooLong { line: line_no });
        }
        saw_any_line = true;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('c') {
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix('p') {
            let (n, m) = parse_problem_line(rest, line_no)?;
            num_variables = Some(n);
            expected_clauses = Some(m);
            continue;
        }

        if num_variables.is_none() {
            return Err(ParseError::MissingProblemLine);
        }
        let n = num_variables.unwrap();

        for token in trimmed.split_whitespace() {
            let lit: i64 = token
                .parse()
                .map_err(|_| ParseError::MalformedProblemLine {
                    line: line_no,
                    text: line.clone(),
                })?;
            if lit == 0 {
                if current.is_empty() {
                    match mode {
                        ParseMode::Strict => {
                            return Err(ParseError::UnterminatedClause { line: line_no })
                        }
                        ParseMode::Permissive => {
                            warn!("line {}: dropping empty clause in permissive mode", line_no);
                        }
                    }
                } else {
                    cnf.push(std::mem::replace(&mut current, CNFClause::new()));
                }
                continue;
            }
            let var = lit.unsigned_abs() as usize;
            if var == 0 || var > n {
                return Err(ParseError::LiteralOutOfRange {
                    line: line_no,
                    literal: lit,
                    num_vars: n,
                });
            }
            current.push(CNFVar::new(var, lit > 0));
        }
    }

    if !saw_any_line {
        return Err(ParseError::EmptyFile);
    }
    let num_variables = num_variables.ok_or(ParseError::MissingProblemLine)?;

    if !current.is_empty() {
        return Err(ParseError::UnterminatedClause { line: line_no });
    }

    if let Some(expected) = expected_clauses {
        let found = cnf.len();
        if expected != found {
            match mode {
                ParseMode::Strict => {
                    return Err(ParseError::ClauseCountMismatch { expected, found })
                }
                ParseMode::Permissive => {
                    warn!(
                        "problem line declared {} clauses, found {}; tolerating in permissive mode",
                        expected, found
                    );
                }
            }
        }
    }

    Formula::new(cnf, num_variables).map_err(|e| ParseError::MalformedProblemLine {
        line: 0,
        text: e.to_string(),
    })
}

fn parse_problem_line(rest: &str, line_no: usize) -> Result<(usize, usize), ParseError> {
    let rest = rest.trim();
    let rest = rest.strip_prefix("cnf").unwrap_or(rest).trim();
    let mut parts = rest.split_whitespace();
    let malformed = || ParseError::MalformedProblemLine {
        line: line_no,
        text: format!("p cnf {}", rest),
    };
    let n: usize = parts.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
    let m: usize = parts.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
    if parts.next().is_some() || n == 0 {
        return Err(malformed());
    }
    Ok((n, m))
}

/// Serializes a `Formula` back to DIMACS text: a `p cnf N M` header
/// followed by one clause per line, each terminated by `0`.
pub fn write(formula: &Formula) -> String {
    let mut out = format!("p cnf {} {}\n", formula.num_variables, formula.clauses.len());
    for clause in &formula.clauses {
        for lit in &clause.vars {
            out.push_str(&lit.to_i32().to_string());
            out.push(' ');
        }
        out.push_str("0\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_str(text: &str, mode: ParseMode) -> Result<Formula, ParseError> {
        read(Cursor::new(text.as_bytes()), mode)
    }

    #[test]
    fn parses_problem_line_and_clauses() {
        let formula = read_str("c a comment\np cnf 3 2\n1 -2 0\n2 3 0\n", ParseMode::Strict).unwrap();
        assert_eq!(formula.num_variables, 3);
        assert_eq!(formula.clauses.len(), 2);
    }

    #[test]
    fn missing_problem_line_is_an_error() {
        let err = read_str("1 2 0\n", ParseMode::Strict).unwrap_err();
        assert!(matches!(err, ParseError::MissingProblemLine));
    }

    #[test]
    fn literal_out_of_range_is_rejected() {
        let err = read_str("p cnf 2 1\n1 3 0\n", ParseMode::Strict).unwrap_err();
        assert!(matches!(err, ParseError::LiteralOutOfRange { .. }));
    }

    #[test]
    fn unterminated_clause_is_rejected() {
        let err = read_str("p cnf 2 1\n1 2", ParseMode::Strict).unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedClause { .. }));
    }

    #[test]
    fn strict_mode_rejects_clause_count_mismatch() {
        let err = read_str("p cnf 2 2\n1 2 0\n", ParseMode::Strict).unwrap_err();
        assert!(matches!(err, ParseError::ClauseCountMismatch { .. }));
    }

    #[test]
    fn permissive_mode_tolerates_clause_count_mismatch() {
        let formula = read_str("p cnf 2 2\n1 2 0\n", ParseMode::Permissive).unwrap();
        assert_eq!(formula.clauses.len(), 1);
    }

    #[test]
    fn tautological_clause_is_dropped_silently() {
        let formula = read_str("p cnf 3 1\n1 -1 2 0\n", ParseMode::Strict).unwrap();
        assert_eq!(formula.clauses.len(), 0);
    }

    #[test]
    fn empty_clause_rejected_in_strict_mode_dropped_in_permissive() {
        assert!(read_str("p cnf 1 1\n0\n", ParseMode::Strict).is_err());
        let formula = read_str("p cnf 1 1\n0\n", ParseMode::Permissive).unwrap();
        assert_eq!(formula.clauses.len(), 0);
    }

    #[test]
    fn write_then_read_round_trips_non_tautological_clauses() {
        let formula = read_str("p cnf 3 2\n1 -2 0\n2 3 0\n", ParseMode::Strict).unwrap();
        let text = write(&formula);
        let reparsed = read_str(&text, ParseMode::Strict).unwrap();
        let original: std::collections::HashSet<Vec<i32>> = formula
            .clauses
            .iter()
            .map(|c| {
                let mut v: Vec<i32> = c.vars.iter().map(|l| l.to_i32()).collect();
                v.sort_unstable();
                v
            })
            .collect();
        let after: std::collections::HashSet<Vec<i32>> = reparsed
            .clauses
            .iter()
            .map(|c| {
                let mut v: Vec<i32> = c.vars.iter().map(|l| l.to_i32()).collect();
                v.sort_unstable();
                v
            })
            .collect();
        assert_eq!(original, after);
    }
}
