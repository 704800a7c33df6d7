/*!
The interface between the MaxSAT layer and a SAT engine.

The [relaxation search](crate::maxsat::search) needs only four things of an engine:
- Fresh atoms.
- Permanent clauses.
- Solves under assumptions, where the assumptions do not persist past the solve.
- The value of an atom on the model of the most recent satisfiable solve.

These are gathered in the [Engine] trait, which is implemented for any [GenericContext].
Other implementations are used in tests, e.g. to record the clauses written by the [ladder encoding](crate::maxsat::ladder).
*/

use crate::{
    builder::ClauseOk,
    context::GenericContext,
    reports::Report,
    structures::{atom::Atom, clause::CClause, literal::CLiteral},
    types::err::ErrorKind,
};

/// A SAT engine, for use by the MaxSAT layer.
pub trait Engine {
    /// A fresh atom.
    fn fresh_atom(&mut self) -> Result<Atom, ErrorKind>;

    /// Adds `clause` to the engine, permanently.
    ///
    /// A clause which makes the engine inconsistent is noted by the engine, and is not an error.
    fn add_clause(&mut self, clause: CClause) -> Result<ClauseOk, ErrorKind>;

    /// Determines satisfiability when each of the `assumptions` is true.
    fn solve_given(&mut self, assumptions: Vec<CLiteral>) -> Result<Report, ErrorKind>;

    /// The value of `atom` on the model found by the most recent solve, if the solve was satisfiable and the model values `atom`.
    fn value_of(&self, atom: Atom) -> Option<bool>;
}

impl<R: rand::Rng + std::default::Default> Engine for GenericContext<R> {
    fn fresh_atom(&mut self) -> Result<Atom, ErrorKind> {
        Ok(GenericContext::fresh_atom(self)?)
    }

    fn add_clause(&mut self, clause: CClause) -> Result<ClauseOk, ErrorKind> {
        GenericContext::add_clause(self, clause)
    }

    fn solve_given(&mut self, assumptions: Vec<CLiteral>) -> Result<Report, ErrorKind> {
        GenericContext::solve_given(self, assumptions)
    }

    fn value_of(&self, atom: Atom) -> Option<bool> {
        GenericContext::value_of(self, atom)
    }
}
