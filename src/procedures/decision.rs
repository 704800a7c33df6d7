/*!
Procedures for making decisions.

A decision is a choice of value for some atom without a value, made when propagation is exhausted and every assumption has been made.

# Choice of atom
With probability given by the [random decision bias](crate::config::Config::random_decision_bias) an atom without a value is chosen at random.
Otherwise, the atom without a value with the most activity is chosen.

# Choice of value
If [phase saving](crate::config::Switches::phase_saving) is enabled, the atom takes the value it had most recently.
Otherwise the value is chosen at random, weighted by the [polarity lean](crate::config::Config::polarity_lean).
*/

use rand::{seq::IteratorRandom, Rng};

use crate::{
    context::GenericContext,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
pub enum DecisionOk {
    /// Some truth value was chosen for some atom.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

/// Methods related to making decisions.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Chooses a literal to make true, using rng to determine whether to make a random decision or to take the atom with the highest activity.
    ///
    /// The literal is not recorded on the valuation.
    pub fn make_decision(&mut self) -> DecisionOk {
        // Takes ownership of rng to satisfy the borrow checker.
        // Avoidable, at the cost of a less generic atom method.
        let mut rng = std::mem::take(&mut self.rng);
        let chosen_atom = self.atom_without_value(&mut rng);
        self.rng = rng;

        match chosen_atom {
            Some(chosen_atom) => {
                self.counters.total_decisions += 1;

                let decision_literal = match self.config.switch.phase_saving {
                    true => {
                        let previous_value = self.atom_db.previous_value_of(chosen_atom);
                        CLiteral::new(chosen_atom, previous_value)
                    }
                    false => {
                        let random_value = self.rng.random_bool(self.config.polarity_lean.value);
                        CLiteral::new(chosen_atom, random_value)
                    }
                };
                log::trace!("Decision {decision_literal}");

                DecisionOk::Literal(decision_literal)
            }
            None => DecisionOk::Exhausted,
        }
    }

    /// Returns an atom which has no value on the current valuation, either by random decision or by most activity.
    pub fn atom_without_value(&mut self, rng: &mut impl Rng) -> Option<Atom> {
        match rng.random_bool(self.config.random_decision_bias.value) {
            true => self.atom_db.unvalued_atoms().choose(rng),
            false => {
                while let Some(atom) = self.atom_db.heap_pop_most_active() {
                    if self.atom_db.value_of(atom).is_none() {
                        return Some(atom);
                    }
                }
                self.atom_db.unvalued_atoms().next()
            }
        }
    }
}
