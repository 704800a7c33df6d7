/*!
A database of 'atom related' things, accessed via fields on a context.

Things include:
- The current (often partial) valuation, and for each valued atom the decision level and reason for the value.
- The previous value of each atom, for phase saving.
- The activity of each atom, stored on an [IndexHeap] so an atom without a value and with the most activity can be found quickly.
- The valuation found by the most recent satisfiable solve, as a model.

# Activity
Activity follows MiniSAT: an atom is bumped by a quantity which grows by the inverse of the decay factor after each conflict, and all activities are rescaled whenever some activity grows too large.
*/

use crate::{
    config::{Activity, Config},
    db::{ClauseKey, LevelIndex},
    generic::index_heap::IndexHeap,
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::{CLiteral, Literal},
    },
    types::err::AtomDBError,
};

/// The limit on activity, before all activities are rescaled.
const ACTIVITY_LIMIT: Activity = 1e100;

/// The atom database.
pub struct AtomDB {
    /// The current value of each atom.
    values: Vec<Option<bool>>,

    /// The most recent value of each atom, kept after the value is dropped.
    previous_values: Vec<bool>,

    /// The decision level at which each atom was valued.
    levels: Vec<Option<LevelIndex>>,

    /// The clause which forced the value of each atom, if the value was forced.
    reasons: Vec<Option<ClauseKey>>,

    /// The activity of each atom, with those atoms which may be without a value on the heap.
    activity_heap: IndexHeap<Activity>,

    /// The current quantity by which to bump activity.
    bump: Activity,

    /// The decay factor.
    decay: Activity,

    /// The valuation found by the most recent satisfiable solve.
    model: Vec<Option<bool>>,
}

impl AtomDB {
    pub fn new(config: &Config) -> Self {
        AtomDB {
            values: Vec::default(),
            previous_values: Vec::default(),
            levels: Vec::default(),
            reasons: Vec::default(),
            activity_heap: IndexHeap::default(),
            bump: config.atom_db.bump.value,
            decay: config.atom_db.decay.value,
            model: Vec::default(),
        }
    }

    /// A fresh atom, without a value, and whose previous value is `previous_value`.
    pub fn fresh_atom(&mut self, previous_value: bool) -> Result<Atom, AtomDBError> {
        let atom = match Atom::try_from(self.values.len()) {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => return Err(AtomDBError::AtomsExhausted),
        };

        self.values.push(None);
        self.previous_values.push(previous_value);
        self.levels.push(None);
        self.reasons.push(None);

        self.activity_heap.add(atom as usize, 0.0);
        self.activity_heap.activate(atom as usize);

        Ok(atom)
    }

    /// A count of atoms in the database.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// The current valuation, indexed by atoms.
    pub fn valuation(&self) -> &[Option<bool>] {
        &self.values
    }

    /// The value of `atom` on the current valuation, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.values.get(atom as usize).copied().flatten()
    }

    /// Some(true) if `literal` is true on the current valuation, Some(false) if the negation of `literal` is true, and None otherwise.
    pub fn value_of_literal(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// The decision level at which `atom` was valued, if valued.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.levels.get(atom as usize).copied().flatten()
    }

    /// The clause which forced the value of `atom`, if `atom` is valued due to some clause.
    pub fn reason_of(&self, atom: Atom) -> Option<ClauseKey> {
        self.reasons.get(atom as usize).copied().flatten()
    }

    /// Values the atom of `literal` to make `literal` true.
    ///
    /// The atom is not removed from the activity heap, and instead atoms popped from the heap are checked for a value before use.
    pub fn set_value(&mut self, literal: CLiteral, level: LevelIndex, reason: Option<ClauseKey>) {
        let index = literal.atom() as usize;
        self.values[index] = Some(literal.polarity());
        self.levels[index] = Some(level);
        self.reasons[index] = reason;
    }

    /// Clears the value of `atom`, noting the value as the previous value of the atom.
    pub fn drop_value(&mut self, atom: Atom) {
        let index = atom as usize;
        if let Some(value) = self.values[index].take() {
            self.previous_values[index] = value;
        }
        self.levels[index] = None;
        self.reasons[index] = None;
        self.activity_heap.activate(index);
    }

    /// The most recent value of `atom`.
    pub fn previous_value_of(&self, atom: Atom) -> bool {
        self.previous_values[atom as usize]
    }

    /// Bumps the activity of `atom`, rescaling all activities if required.
    pub fn bump_activity(&mut self, atom: Atom) {
        let bump = self.bump;
        self.activity_heap
            .apply_to_index(atom as usize, |activity| activity + bump);

        if *self.activity_heap.value_at(atom as usize) > ACTIVITY_LIMIT {
            let factor = 1.0 / ACTIVITY_LIMIT;
            self.activity_heap.apply_to_all(|activity| activity * factor);
            self.bump *= factor;
        }
    }

    /// Decays the activity of all atoms, by increasing the quantity of future bumps.
    pub fn decay_activity(&mut self) {
        self.bump /= self.decay;
    }

    /// Pops the atom with the most activity from the activity heap, regardless of whether the atom has a value.
    pub fn heap_pop_most_active(&mut self) -> Option<Atom> {
        self.activity_heap.pop_max().map(|index| index as Atom)
    }

    /// Atoms without a value on the current valuation.
    pub fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, value)| value.is_none())
            .map(|(atom, _)| atom as Atom)
    }

    /// Stores the current valuation as the model.
    pub fn store_model(&mut self) {
        self.model.clone_from(&self.values);
    }

    /// Clears any stored model.
    pub fn clear_model(&mut self) {
        self.model.clear();
    }

    /// The value of `atom` on the model, if the model values `atom`.
    pub fn model_value_of(&self, atom: Atom) -> Option<bool> {
        self.model.get(atom as usize).copied().flatten()
    }
}
