use thiserror::Error;

/// Errors produced while reading a DIMACS CNF document.
///
/// Every variant that can be tied to a specific line carries a 1-based
/// line number, matching the convention of the file being read.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("I/O error while reading DIMACS input: {0}")]
    Io(#[from] std::io::Error),

    #[error("no problem line ('p cnf <vars> <clauses>') found before end of input")]
    MissingProblemLine,

    #[error("line {line}: malformed problem line: {text:?}")]
    MalformedProblemLine { line: usize, text: String },

    #[error("line {line}: clause is not terminated by a trailing 0")]
    UnterminatedClause { line: usize },

    #[error("line {line}: literal {literal} is out of range for {num_vars} declared variables")]
    LiteralOutOfRange {
        line: usize,
        literal: i64,
        num_vars: usize,
    },

    #[error("input is empty")]
    EmptyFile,

    #[error("problem line declared {expected} clauses, but {found} were read")]
    ClauseCountMismatch { expected: usize, found: usize },

    #[error("line {line}: line exceeds the maximum accepted length")]
    LineTooLong { line: usize },
}

/// Errors raised by the solving pipeline itself, as opposed to parsing.
///
/// These represent a broken internal invariant rather than a problem with
/// the input; under correct operation none of these should ever surface.
#[derive(Error, Debug)]
pub enum SolveError {
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}
