//! Clauses are disjunctions of literals.
//!
//! The canonical representation of a clause is a vector of [CLiteral]s, and most of the library works with [CClause] directly.
//! The [Clause] trait gathers a few useful methods for anything which is a sequence of literals.
//!
//! ```rust
//! # use otter_maxsat::structures::clause::Clause;
//! # use otter_maxsat::structures::literal::{CLiteral, Literal};
//! let clause = vec![CLiteral::new(1, true), CLiteral::new(2, false)];
//!
//! assert_eq!(clause.as_dimacs(true), "1 -2 0");
//! assert_eq!(clause.size(), 2);
//! ```

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical representation of a clause.
pub type CClause = Vec<CLiteral>;

/// Methods common to anything which is a sequence of literals.
pub trait Clause {
    /// The literals of the clause, in order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// The atoms of the clause, in order and with repetition.
    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.literals().map(|literal| literal.atom())
    }

    /// The clause as a string of integers, optionally terminated by `0`.
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = self
            .literals()
            .map(|literal| literal.as_int().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if zero {
            if !the_string.is_empty() {
                the_string.push(' ');
            }
            the_string.push('0');
        }
        the_string
    }

    /// True if some literal and its negation both occur in the clause.
    fn is_tautology(&self) -> bool {
        let mut literals = self.literals().copied().collect::<Vec<_>>();
        literals.sort_unstable();
        literals
            .windows(2)
            .any(|pair| pair[0].atom() == pair[1].atom() && pair[0] != pair[1])
    }
}

impl Clause for [CLiteral] {
    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl Clause for CClause {
    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl From<CLiteral> for CClause {
    fn from(literal: CLiteral) -> Self {
        vec![literal]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tautology() {
        let p = CLiteral::new(1, true);
        let q = CLiteral::new(2, true);
        assert!(vec![p, q, -p].is_tautology());
        assert!(!vec![p, q, p].is_tautology());
    }

    #[test]
    fn empty_dimacs() {
        let empty: CClause = Vec::default();
        assert_eq!(empty.as_dimacs(true), "0");
        assert_eq!(empty.as_dimacs(false), "");
    }
}
