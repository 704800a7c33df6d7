//! The abstract elements of a solve, and their representation.
//!
//! - [atoms](atom) (aka. variables) are handles into the atom database of a context.
//! - [literals](literal) are atoms paired with a polarity.
//! - [clauses](clause) are disjunctions of literals.
//! - [formulas](formula) are the input to a MaxSAT solve, as read from a DIMACS file.

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
