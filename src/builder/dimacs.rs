/*!
Reading formulas in the DIMACS representation.

The reader is split into two phases:
- The preamble, which is a (possibly empty) sequence of comment lines followed by the problem line `p cnf <variables> <clauses>`.
- The formula, which is a sequence of integers (spanning any number of lines) where each clause is terminated by `0`.

Comments may appear throughout the formula, and the formula ends either at the end of the input or at a line beginning with `%` (the SATLIB convention).

No check is made that the formula agrees with the problem line, as this is done when a [SoftFormula](crate::maxsat::soft::SoftFormula) is built.
*/

use std::io::BufRead;

use crate::{
    structures::formula::Formula,
    types::err::{self, ErrorKind},
};

/// Reads a formula in the DIMACS representation.
///
/// ```rust
/// # use otter_maxsat::builder::dimacs::parse_dimacs;
/// let dimacs = "
/// c A comment
/// p cnf 2 3
///  1  2 0
/// -1 -2 0
///  1
/// -2 0
/// ";
///
/// let formula = parse_dimacs(dimacs.as_bytes()).unwrap();
/// assert_eq!(formula.variable_count, 2);
/// assert_eq!(formula.clause_count, 3);
/// assert_eq!(formula.clauses[2], vec![1, -2]);
/// ```
pub fn parse_dimacs(mut reader: impl BufRead) -> Result<Formula, ErrorKind> {
    let mut buffer = String::with_capacity(1024);
    let mut line_counter = 0;

    let mut formula = 'preamble_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => return Err(err::ParseError::MissingProblem.into()),
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ParseError::Line(line_counter).into()),
        }

        let line = buffer.trim_start();
        match line.chars().next() {
            None | Some('c') => continue 'preamble_loop,

            Some('p') => break 'preamble_loop parse_problem(line)?,

            Some(_) => return Err(err::ParseError::MissingProblem.into()),
        }
    };

    let mut clause_buffer: Vec<isize> = Vec::default();

    'formula_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break 'formula_loop,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ParseError::Line(line_counter).into()),
        }

        let line = buffer.trim_start();
        match line.chars().next() {
            Some('%') => break 'formula_loop,

            Some('c') => {}

            Some('p') => return Err(err::ParseError::MisplacedProblem(line_counter).into()),

            _ => {
                for item in line.split_whitespace() {
                    match item.parse::<isize>() {
                        Ok(0) => formula.push_clause(std::mem::take(&mut clause_buffer)),
                        Ok(literal) => clause_buffer.push(literal),
                        Err(_) => return Err(err::ParseError::Line(line_counter).into()),
                    }
                }
            }
        }
    }

    if !clause_buffer.is_empty() {
        return Err(err::MalformedInputError::UnterminatedClause.into());
    }

    log::info!("Parsed {} clauses over {} variables", formula.clauses.len(), formula.variable_count);

    Ok(formula)
}

/// The formula declared by a problem line, without clauses.
fn parse_problem(line: &str) -> Result<Formula, ErrorKind> {
    let mut problem_details = line.split_whitespace();

    match (problem_details.next(), problem_details.next()) {
        (Some("p"), Some("cnf")) => {}
        _ => return Err(err::ParseError::ProblemSpecification.into()),
    }

    let mut count = || -> Result<usize, ErrorKind> {
        match problem_details.next().map(str::parse::<usize>) {
            Some(Ok(count)) => Ok(count),
            _ => Err(err::ParseError::ProblemSpecification.into()),
        }
    };

    let variable_count = count()?;
    let clause_count = count()?;

    Ok(Formula::new(variable_count, clause_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clauses_span_lines() {
        let dimacs = "p cnf 3 2\n1 -2\n3 0 -1\n 0\n";
        let formula = parse_dimacs(dimacs.as_bytes()).unwrap();
        assert_eq!(formula.clauses, vec![vec![1, -2, 3], vec![-1]]);
    }

    #[test]
    fn satlib_end_marker() {
        let dimacs = "c satlib\np cnf 2 1\n1 2 0\n%\n0\n";
        let formula = parse_dimacs(dimacs.as_bytes()).unwrap();
        assert_eq!(formula.clauses, vec![vec![1, 2]]);
    }

    #[test]
    fn empty_clause() {
        let dimacs = "p cnf 1 2\n0\n1 0\n";
        let formula = parse_dimacs(dimacs.as_bytes()).unwrap();
        assert_eq!(formula.clauses, vec![vec![], vec![1]]);
    }

    #[test]
    fn missing_problem() {
        assert_eq!(
            parse_dimacs("c nothing\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::MissingProblem))
        );
        assert_eq!(
            parse_dimacs("1 2 0\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::MissingProblem))
        );
    }

    #[test]
    fn bad_problem() {
        assert_eq!(
            parse_dimacs("p wcnf 2 1\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::ProblemSpecification))
        );
        assert_eq!(
            parse_dimacs("p cnf two 1\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::ProblemSpecification))
        );
        assert_eq!(
            parse_dimacs("p cnf 2\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::ProblemSpecification))
        );
    }

    #[test]
    fn misplaced_problem() {
        assert_eq!(
            parse_dimacs("p cnf 2 1\n1 0\np cnf 2 1\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::MisplacedProblem(3)))
        );
    }

    #[test]
    fn bad_token() {
        assert_eq!(
            parse_dimacs("p cnf 2 1\n1 x 0\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::Line(2)))
        );
    }

    #[test]
    fn declared_counts_are_not_trusted() {
        let formula = parse_dimacs("p cnf 1 18446744073709551615\n1 0\n".as_bytes()).unwrap();
        assert_eq!(formula.clause_count, usize::MAX);
        assert_eq!(formula.clauses, vec![vec![1]]);
    }

    #[test]
    fn unterminated() {
        assert_eq!(
            parse_dimacs("p cnf 2 1\n1 2\n".as_bytes()),
            Err(ErrorKind::MalformedInput(
                err::MalformedInputError::UnterminatedClause
            ))
        );
    }
}
