/*!
Watch lists, for each literal.

The list of a literal contains the keys of stored clauses for which the literal is one of the two watched literals.
A list is examined when the literal becomes false, i.e. when the negation of the literal is added to the trail.

Each watch includes a *blocker*, some other literal of the clause.
If the blocker is true the clause is satisfied, and the clause need not be examined.
*/

use crate::{db::ClauseKey, structures::literal::CLiteral};

/// A watch on a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Watch {
    /// The key of the clause.
    pub key: ClauseKey,

    /// Some other literal of the clause.
    pub blocker: CLiteral,
}

/// Watch lists, indexed by the [index](CLiteral::index) of a literal.
#[derive(Default)]
pub struct Watches {
    lists: Vec<Vec<Watch>>,
}

impl Watches {
    /// Adds (empty) lists for both literals of a fresh atom.
    pub fn add_atom(&mut self) {
        self.lists.push(Vec::default());
        self.lists.push(Vec::default());
    }

    /// Adds `watch` to the list of `literal`.
    pub fn watch(&mut self, literal: CLiteral, watch: Watch) {
        self.lists[literal.index()].push(watch);
    }

    /// Takes the list of `literal`, leaving an empty list until the list is [restored](Watches::restore).
    ///
    /// Used during BCP, as while the list is examined other lists may be extended.
    pub fn take(&mut self, literal: CLiteral) -> Vec<Watch> {
        std::mem::take(&mut self.lists[literal.index()])
    }

    /// Restores the list of `literal`, appending any watches made while the list was taken.
    pub fn restore(&mut self, literal: CLiteral, mut list: Vec<Watch>) {
        let slot = &mut self.lists[literal.index()];
        list.append(slot);
        *slot = list;
    }

    /// The list of `literal`.
    pub fn list(&self, literal: CLiteral) -> &[Watch] {
        &self.lists[literal.index()]
    }

    /// Removes any watch on a clause for which `removed` holds.
    pub fn purge(&mut self, removed: impl Fn(ClauseKey) -> bool) {
        for list in self.lists.iter_mut() {
            list.retain(|watch| !removed(watch.key));
        }
    }
}
