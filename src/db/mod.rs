/*!
Databases for holding information relevant to a solve.

- [The atom database](crate::db::atom) holds the current valuation, the decision level and reason of each valued atom, and the activity of each atom.
- [The clause database](crate::db::clause) holds the clauses of the formula and the clauses added during a solve.
- [Watch lists](crate::db::watches) record, for each literal, the clauses which watch the literal.
- [The trail](crate::db::trail) records the order in which atoms were valued, split by decision level.

Each database is a field of a context, so methods which need to read one database and write another borrow the databases separately.
*/

pub mod atom;
pub mod clause;
pub mod trail;
pub mod watches;

/// The index of a decision level.
pub type LevelIndex = u32;

/// A key to access a clause stored in the [clause database](crate::db::clause).
///
/// The kind of a clause is encoded in the key, as original clauses are never removed while addition clauses may be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClauseKey {
    /// A clause of the formula, whether given at the start or added between solves.
    Original(u32),

    /// A clause learnt during a solve.
    Addition(u32),
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original(index) => write!(f, "Original({index})"),
            Self::Addition(index) => write!(f, "Addition({index})"),
        }
    }
}
