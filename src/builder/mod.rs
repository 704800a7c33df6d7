/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [fresh_atom](crate::context::GenericContext::fresh_atom), to obtain a fresh atom.
- [add_clause](crate::context::GenericContext::add_clause), to add a clause.

A formula may be added to a context by interweaving these two methods.
In rough strokes, the pattern is to:
- Obtain a collection of atoms to represent a clause.
- Create [CLiteral](crate::structures::literal::CLiteral)s from the atoms.
- Bundle the literals into a [CClause].
- Add the clause to the context.

Formulas in the DIMACS representation are read by [dimacs::parse_dimacs], which returns a [Formula](crate::structures::formula::Formula) rather than writing to a context, as a MaxSAT solve extends each clause before the clause is added.

# Example

```rust
# use otter_maxsat::builder::ClauseOk;
# use otter_maxsat::context::Context;
# use otter_maxsat::config::Config;
# use otter_maxsat::reports::Report;
# use otter_maxsat::structures::literal::{CLiteral, Literal};
#
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_or_max_atom();
let q = the_context.fresh_or_max_atom();

let clause_a = vec![CLiteral::new(p, true), CLiteral::new(q, false)];
let clause_b = vec![CLiteral::new(p, false), CLiteral::new(q, true)];
let clause_c = vec![CLiteral::new(p, false), CLiteral::new(p, true)];

assert_eq!(the_context.add_clause(clause_a), Ok(ClauseOk::Added));
assert_eq!(the_context.add_clause(clause_b), Ok(ClauseOk::Added));
assert_eq!(the_context.add_clause(clause_c), Ok(ClauseOk::Tautology));
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
```
*/

pub mod dimacs;

use std::collections::HashSet;

use crate::{
    context::{ContextState, GenericContext},
    db::watches::Watch,
    misc::log::targets,
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{CClause, Clause},
        literal::Literal,
    },
    types::err::{self, ErrorKind},
};

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context.
    Added,

    /// The clause was a tautology (and so was not added to the context).
    Tautology,

    /// The clause was satisfied by a literal fixed at level zero (and so was not added to the context).
    Satisfied,

    /// Every literal of the clause was false at level zero, and so the context is now inconsistent.
    Inconsistent,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Returns a fresh atom.
    ///
    /// For a practical alternative, see [fresh_or_max_atom](GenericContext::fresh_or_max_atom).
    pub fn fresh_atom(&mut self) -> Result<Atom, err::AtomDBError> {
        let previous_value = self.rng.random_bool(self.config.polarity_lean.value);
        self.fresh_atom_fundamental(previous_value)
    }

    /// Returns a fresh atom, or the maximum atom.
    ///
    /// In short, a safe alternative to unwrapping the result of [fresh_atom](GenericContext::fresh_atom), by defaulting to the maximum limit of an atom.
    /// And, as exhausting the atom limit is unlikely in many applications, this may be preferred.
    pub fn fresh_or_max_atom(&mut self) -> Atom {
        match self.fresh_atom() {
            Ok(atom) => atom,
            Err(_) => ATOM_MAX,
        }
    }

    /// The fundamental method for obtaining a fresh atom --- on Ok the atom is part of the language of the context.
    pub fn fresh_atom_fundamental(&mut self, previous_value: bool) -> Result<Atom, err::AtomDBError> {
        let atom = self.atom_db.fresh_atom(previous_value)?;
        self.watches.add_atom();

        if self.state == ContextState::Configuration {
            self.state = ContextState::Input;
        }

        Ok(atom)
    }

    /// Adds a clause to the context.
    ///
    /// Clauses are simplified with respect to the valuation at level zero:
    /// - Duplicate literals are removed, and tautologies are skipped.
    /// - Literals false at level zero are removed, and clauses with a literal true at level zero are skipped.
    ///
    /// After simplification, an empty clause makes the context [inconsistent](ContextState::Inconsistent), a unit clause is recorded on the valuation (and propagated), and any other clause is stored in the clause database.
    ///
    /// An inconsistent context is reported through [ClauseOk], rather than as an error.
    pub fn add_clause(&mut self, clause: impl Into<CClause>) -> Result<ClauseOk, ErrorKind> {
        let mut clause: CClause = clause.into();

        for literal in &clause {
            self.check_atom(literal.atom())?;
        }

        if self.state == ContextState::Inconsistent {
            return Ok(ClauseOk::Inconsistent);
        }
        if self.trail.level() > 0 {
            return Err(ErrorKind::InvalidState);
        }

        let mut seen = HashSet::with_capacity(clause.len());
        clause.retain(|literal| seen.insert(*literal));
        if clause.is_tautology() {
            return Ok(ClauseOk::Tautology);
        }

        if clause
            .iter()
            .any(|literal| self.atom_db.value_of_literal(*literal) == Some(true))
        {
            return Ok(ClauseOk::Satisfied);
        }
        clause.retain(|literal| self.atom_db.value_of_literal(*literal).is_none());

        self.state = ContextState::Input;

        match clause.len() {
            0 => {
                log::info!(target: targets::CLAUSE_DB, "Empty clause added");
                self.state = ContextState::Inconsistent;
                Ok(ClauseOk::Inconsistent)
            }

            1 => {
                let literal = clause[0];
                self.atom_db.set_value(literal, 0, None);
                self.trail.store_assignment(literal);

                match self.propagate() {
                    Ok(()) => Ok(ClauseOk::Added),
                    Err(err::BCPError::Conflict(key)) => {
                        log::info!(target: targets::CLAUSE_DB, "Conflict from unit {literal} at {key}");
                        self.state = ContextState::Inconsistent;
                        Ok(ClauseOk::Inconsistent)
                    }
                }
            }

            _ => {
                let (first, second) = (clause[0], clause[1]);
                let key = self.clause_db.store(clause, true)?;
                self.watches.watch(first, Watch { key, blocker: second });
                self.watches.watch(second, Watch { key, blocker: first });
                Ok(ClauseOk::Added)
            }
        }
    }
}
