/*!
Analysis of an unsatisfiable clause.

# Conflict analysis

Takes a key to a clause which is unsatisfiable on the current valuation and returns an asserting clause.

Resolution is applied between the clause and the reasons for the values of literals at the current level, in reverse order of assignment, until exactly one literal of the current level remains (the first unique implication point).
The negation of the remaining literal is placed at position 0 of the result, and a literal of the greatest remaining level at position 1, so the clause may be watched and asserted immediately after a backjump.

Literals valued at level zero are dropped during resolution, as they are fixed for the life of the context.

Each atom met during analysis has its activity bumped, as does each clause used.

# Failed assumptions

If an assumption is false when it is to be made, the assumptions responsible are found by following the reasons for the negation of the assumption back to the assumptions made (see [analyse_final](GenericContext::analyse_final)).

# Example

```rust, ignore
let (clause, level) = self.conflict_analysis(key)?;
self.backjump(level);
self.assert_learnt(clause, level)?;
```
*/

use crate::{
    context::GenericContext,
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Derives an asserting clause from the conflict at `key`, returned with the level at which the clause asserts its first literal.
    ///
    /// # Soundness
    /// The clause at `key` must be unsatisfiable on the current valuation, and some literal of the clause must have been valued at the current level, which is above zero.
    pub fn conflict_analysis(
        &mut self,
        key: ClauseKey,
    ) -> Result<(CClause, LevelIndex), ErrorKind> {
        let level = self.trail.level();
        if level == 0 {
            return Err(err::AnalysisError::NoDecision.into());
        }

        let mut seen = vec![false; self.atom_db.count()];
        let mut learnt: CClause = vec![CLiteral::new(0, false)];

        let mut path_count: usize = 0;
        let mut trail_index = self.trail.literals.len();
        let mut reason = key;
        let mut skip_first = false;

        let asserted = loop {
            self.clause_db.bump_activity(reason);
            let db_clause = self.clause_db.get(reason)?;
            let start = skip_first as usize;

            for literal in db_clause[start..].iter() {
                let atom = literal.atom();
                if seen[atom as usize] {
                    continue;
                }
                let atom_level = self
                    .atom_db
                    .level_of(atom)
                    .ok_or(err::AnalysisError::MissingReason)?;
                if atom_level == 0 {
                    continue;
                }

                seen[atom as usize] = true;
                self.atom_db.bump_activity(atom);

                match atom_level == level {
                    true => path_count += 1,
                    false => learnt.push(*literal),
                }
            }

            let literal = loop {
                trail_index = trail_index
                    .checked_sub(1)
                    .ok_or(err::AnalysisError::EmptyResolution)?;
                let literal = self.trail.literals[trail_index];
                if seen[literal.atom() as usize] {
                    break literal;
                }
            };

            seen[literal.atom() as usize] = false;
            path_count = path_count
                .checked_sub(1)
                .ok_or(err::AnalysisError::EmptyResolution)?;

            if path_count == 0 {
                break literal;
            }

            reason = self
                .atom_db
                .reason_of(literal.atom())
                .ok_or(err::AnalysisError::MissingReason)?;
            skip_first = true;
        };

        learnt[0] = asserted.negate();

        let mut backjump_level = 0;
        let mut backjump_position = 1;
        for (position, literal) in learnt.iter().enumerate().skip(1) {
            let literal_level = self.atom_db.level_of(literal.atom()).unwrap_or(0);
            if literal_level > backjump_level {
                backjump_level = literal_level;
                backjump_position = position;
            }
        }
        if learnt.len() > 1 {
            learnt.swap(1, backjump_position);
        }

        log::trace!(target: targets::ANALYSIS, "Learnt {} asserting at level {backjump_level}", learnt.as_dimacs(false));

        Ok((learnt, backjump_level))
    }

    /// Records the assumptions responsible for `assumption` being false, including `assumption`, as the failed assumptions of the context.
    ///
    /// # Soundness
    /// Only assumptions may be valued without a reason above level zero, and so this should only be called before any decision is made.
    pub fn analyse_final(&mut self, assumption: CLiteral) -> Result<(), ErrorKind> {
        self.failed_assumptions.clear();
        self.failed_assumptions.push(assumption);

        let conflict_atom = assumption.atom();
        if self.atom_db.level_of(conflict_atom).unwrap_or(0) == 0 {
            return Ok(());
        }

        let mut seen = vec![false; self.atom_db.count()];
        seen[conflict_atom as usize] = true;

        let level_start = match self.trail.level_indicies.first() {
            Some(start) => *start,
            None => return Ok(()),
        };

        for index in (level_start..self.trail.literals.len()).rev() {
            let literal = self.trail.literals[index];
            let atom = literal.atom();
            if !seen[atom as usize] {
                continue;
            }

            match self.atom_db.reason_of(atom) {
                None => self.failed_assumptions.push(literal),

                Some(key) => {
                    let db_clause = self.clause_db.get(key)?;
                    for other in db_clause[1..].iter() {
                        if self.atom_db.level_of(other.atom()).unwrap_or(0) > 0 {
                            seen[other.atom() as usize] = true;
                        }
                    }
                }
            }
            seen[atom as usize] = false;
        }

        self.failed_assumptions.dedup();

        log::trace!(target: targets::ANALYSIS, "Failed assumptions: {}", self.failed_assumptions.as_dimacs(false));

        Ok(())
    }
}
