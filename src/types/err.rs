//! Error types used in the library.
//!
//! - Some of these are internally expected --- e.g. BCP errors are used to control the flow of a solve.
//! - Some are about the input --- e.g. a [MalformedInputError] when a formula does not agree with its declared counts.
//! - Some indicate a defect in the library --- e.g. an [EncodingBoundsError] or [NoModel](ErrorKind::NoModel), which should never be seen.
//!
//! Note, an unsatisfiable solve is *not* an error, and is instead reported through a [Report](crate::reports::Report).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{db::ClauseKey, structures::atom::Atom};

/// The general error type of the library, wrapping the more specific error types.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    AtomDB(AtomDBError),
    ClauseDB(ClauseDBError),
    EncodingBounds(EncodingBoundsError),
    MalformedInput(MalformedInputError),
    Parse(ParseError),
    Search(SearchError),

    /// Some method was called on a context in a state which does not support the method.
    InvalidState,

    /// A result was requested before any satisfiable budget was found.
    NoModel,
}

/// Noted errors during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// Somehow resolution resolved to an empty clause.
    EmptyResolution,

    /// A literal at the level of the conflict was found without a reason.
    MissingReason,

    /// Analysis was requested when no decision had been made.
    NoDecision,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,

    /// An atom was used before being obtained from the context.
    Unknown(Atom),
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(ClauseKey),
}


/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// A clause is missing.
    Missing,

    /// Some attempt was made to store a clause with fewer than two literals.
    ///
    /// Empty and unit clauses are handled by the valuation of a context, rather than the clause database.
    ShortClause,

    /// All possible keys have been used.
    StorageExhausted,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// A request to the ladder encoding outside the bounds fixed when the ladder was made.
///
/// These indicate a defect, rather than an issue with the input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncodingBoundsError {
    /// A budget outside of `[0, clause_count - 1]`.
    Budget { budget: usize, clause_count: usize },

    /// A cell outside of the ladder grid.
    Cell { row: usize, column: usize },

    /// A budget was encoded a second time.
    Repeat(usize),
}

impl From<EncodingBoundsError> for ErrorKind {
    fn from(e: EncodingBoundsError) -> Self {
        ErrorKind::EncodingBounds(e)
    }
}

/// Ways in which a formula may disagree with itself.
///
/// Clauses are indexed from 0, variables from 1.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MalformedInputError {
    /// The declared count of clauses differs from the count found.
    ClauseCount { declared: usize, found: usize },

    /// The literal `0` was found before the end of a clause.
    ZeroLiteral { clause: usize, position: usize },

    /// A variable outside of `[1, variable_count]`.
    VariableRange { clause: usize, literal: isize },

    /// The input ended in the middle of a clause.
    UnterminatedClause,

    /// More variables and clauses were declared than there are atoms to represent them.
    Capacity { variables: usize, clauses: usize },
}

impl From<MalformedInputError> for ErrorKind {
    fn from(e: MalformedInputError) -> Self {
        ErrorKind::MalformedInput(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// The problem specification of some DIMACS input is not in the header of the input.
    MisplacedProblem(usize),

    /// No problem specification was found.
    MissingProblem,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors during a relaxation search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchError {
    /// Every budget was found unsatisfiable, including the budget which permits every clause to be relaxed.
    Exhausted,

    /// The engine could not determine satisfiability for the given budget, e.g. as a time limit was reached.
    Interrupted(usize),
}

impl From<SearchError> for ErrorKind {
    fn from(e: SearchError) -> Self {
        ErrorKind::Search(e)
    }
}
