/*!
A context method to aid boolean constraint propagation

See [GenericContext::bcp] for the relevant context method.

# Overview
Propagates a literal being made true.

This is done by examining clauses watching the negation of the literal and updating the watches of the clause, if possible, asserting the remaining watched literal of the clause if not, or identifying the clause conflicts with the current valuation.

# Complications

The watch list being examined is [taken](crate::db::watches::Watches::take) from the database for the duration of the examination, and [restored](crate::db::watches::Watches::restore) afterwards.
This allows watches on other literals to be made while the list is examined, without a conflicting borrow.
Still, no watch is made on the examined literal while the list is taken, as the examined literal is false and so is not a candidate for a watch.

# Heuristics

Each watch carries a blocker literal, and a clause whose blocker is true is skipped without access to the clause database.
*/

use crate::{
    context::GenericContext,
    db::watches::Watch,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    ///
    /// # Soundness
    /// The watched literals of a stored clause are at positions 0 and 1, and on return any literal asserted by a clause is at position 0 of the clause.
    pub fn bcp(&mut self, literal: CLiteral) -> Result<(), err::BCPError> {
        let false_literal = literal.negate();
        let mut list = self.watches.take(false_literal);

        let mut result = Ok(());
        let mut index = 0;
        let mut kept = 0;

        'watch_loop: while index < list.len() {
            let watch = list[index];
            index += 1;

            if self.atom_db.value_of_literal(watch.blocker) == Some(true) {
                list[kept] = watch;
                kept += 1;
                continue 'watch_loop;
            }

            let db_clause = match self.clause_db.get_mut(watch.key) {
                Ok(stored) => stored,
                // Watches on removed clauses are dropped.
                Err(_) => continue 'watch_loop,
            };

            if db_clause[0] == false_literal {
                db_clause.swap(0, 1);
            }

            let first = db_clause[0];
            let fresh_watch = Watch {
                key: watch.key,
                blocker: first,
            };

            if first != watch.blocker && self.atom_db.value_of_literal(first) == Some(true) {
                list[kept] = fresh_watch;
                kept += 1;
                continue 'watch_loop;
            }

            for position in 2..db_clause.len() {
                if self.atom_db.value_of_literal(db_clause[position]) != Some(false) {
                    db_clause.swap(1, position);
                    self.watches.watch(db_clause[1], fresh_watch);
                    continue 'watch_loop;
                }
            }

            list[kept] = fresh_watch;
            kept += 1;

            match self.atom_db.value_of_literal(first) {
                None => {
                    log::trace!(target: targets::PROPAGATION, "Consequence of {} and {literal}: {first}", watch.key);
                    let level = self.trail.level();
                    self.atom_db.set_value(first, level, Some(watch.key));
                    self.trail.store_assignment(first);
                }

                Some(false) => {
                    log::trace!(target: targets::PROPAGATION, "Consequence of {} and {literal} is contradiction.", watch.key);
                    result = Err(err::BCPError::Conflict(watch.key));
                    break 'watch_loop;
                }

                Some(true) => {}
            }
        }

        while index < list.len() {
            list[kept] = list[index];
            kept += 1;
            index += 1;
        }
        list.truncate(kept);
        self.watches.restore(false_literal, list);

        result
    }

    /// Applies [BCP](GenericContext::bcp) to each literal on the trail which has not been propagated, until a conflict is found or every literal has been propagated.
    pub fn propagate(&mut self) -> Result<(), err::BCPError> {
        while let Some(literal) = self.trail.next_to_propagate() {
            self.bcp(literal)?;
        }
        Ok(())
    }
}
