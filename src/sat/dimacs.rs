#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A reader and writer for the DIMACS CNF file format.
//!
//! The format includes comment lines starting with `c`, a problem line
//! `p cnf <num_variables> <num_clauses>`, and clause lines of whitespace-
//! separated integer literals terminated by `0`. A clause may span several
//! lines, and a `%` marks end-of-data in some competition files.
//!
//! External DIMACS variables are 1-indexed; they map onto the solver's
//! 0-indexed variables via [`Literal::from_dimacs`]. The reader yields the
//! clause list together with the variable count, which is the declared
//! count from the problem line or the maximum variable actually seen,
//! whichever is larger.

use crate::sat::literal::Literal;
use itertools::Itertools;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::Path;
use thiserror::Error;

/// Failures while reading DIMACS input.
#[derive(Debug, Error)]
pub enum DimacsError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: malformed problem header")]
    BadHeader { line: usize },
    #[error("line {line}: '{token}' is not a literal")]
    BadLiteral { line: usize, token: String },
}

/// Parses DIMACS formatted data into `(clauses, num_variables)`.
///
/// # Errors
///
/// Returns a [`DimacsError`] on I/O failure, a malformed problem line, or a
/// token that is not an integer literal.
pub fn parse_dimacs<R: BufRead, L: Literal>(
    reader: R,
) -> Result<(Vec<Vec<L>>, usize), DimacsError> {
    let mut clauses: Vec<Vec<L>> = Vec::new();
    let mut current: Vec<L> = Vec::new();
    let mut declared_vars = 0usize;
    let mut max_var = 0usize;

    'lines: for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        let mut tokens = line.split_whitespace().peekable();

        match tokens.peek() {
            None => {}
            Some(t) if t.starts_with('c') => {}
            Some(&"%") => break,
            Some(&"p") => {
                let mut rest = tokens.skip(1);
                if rest.next() != Some("cnf") {
                    return Err(DimacsError::BadHeader { line: line_no });
                }
                declared_vars = rest
                    .next()
                    .and_then(|s| s.parse().ok())
                    .ok_or(DimacsError::BadHeader { line: line_no })?;
            }
            Some(_) => {
                for token in tokens {
                    if token == "%" {
                        break 'lines;
                    }
                    let value: i32 = token.parse().map_err(|_| DimacsError::BadLiteral {
                        line: line_no,
                        token: token.to_string(),
                    })?;

                    if value == 0 {
                        clauses.push(std::mem::take(&mut current));
                    } else {
                        max_var = max_var.max(value.unsigned_abs() as usize);
                        current.push(L::from_dimacs(value));
                    }
                }
            }
        }
    }

    // tolerate a final clause missing its terminating 0
    if !current.is_empty() {
        clauses.push(current);
    }

    Ok((clauses, declared_vars.max(max_var)))
}

/// Parses DIMACS data held in a string.
///
/// # Errors
///
/// See [`parse_dimacs`].
pub fn parse_dimacs_text<L: Literal>(text: &str) -> Result<(Vec<Vec<L>>, usize), DimacsError> {
    parse_dimacs(Cursor::new(text))
}

/// Parses the DIMACS file at `path`.
///
/// # Errors
///
/// See [`parse_dimacs`]; additionally fails if the file cannot be opened.
pub fn parse_file<L: Literal>(path: &Path) -> Result<(Vec<Vec<L>>, usize), DimacsError> {
    let file = File::open(path)?;
    parse_dimacs(BufReader::new(file))
}

/// Renders a clause set in DIMACS format, `p cnf` header included. The
/// front-end uses this to print a solution as unit clauses.
#[must_use]
pub fn to_dimacs<L: Literal>(clauses: &[Vec<L>], num_vars: usize) -> String {
    let mut out = format!("p cnf {num_vars} {}\n", clauses.len());
    for clause in clauses {
        let line = clause.iter().map(|l| l.to_dimacs()).join(" ");
        if line.is_empty() {
            out.push_str("0\n");
        } else {
            out.push_str(&line);
            out.push_str(" 0\n");
        }
    }
    out
}
