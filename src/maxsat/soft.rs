/*!
A formula whose every clause is soft.

Each clause *i* of a [Formula] is extended with a fresh relaxation atom r<sub>i</sub>, and the extended clause is added to an [Engine] as a permanent clause.
So, any clause may be satisfied by valuing its relaxation atom true, and the number of relaxation atoms valued true bounds the number of clauses violated.

This is the only place clauses are added to an engine without being guarded by some assumption.

Before anything is added to the engine the formula is checked against its declared counts:
- The count of clauses must be the declared count.
- A clause may end with `0`, though no other literal may be `0`.
- Each variable must be within `[1, variable_count]`.
- There must be an atom for each variable and each clause.

Declared variables which do not appear in any clause are permitted, and are given atoms all the same.

```rust
# use otter_maxsat::config::Config;
# use otter_maxsat::context::Context;
# use otter_maxsat::maxsat::soft::SoftFormula;
# use otter_maxsat::structures::formula::Formula;
let mut engine = Context::from_config(Config::default());
let formula = Formula::from_clauses(2, vec![vec![1, -2, 0], vec![2]]);

let soft = SoftFormula::build(&mut engine, &formula).unwrap();
assert_eq!(soft.clause_count(), 2);
assert_eq!(soft.relaxation_atoms().len(), 2);
assert_eq!(soft.violated(&[false, false]), vec![1]);
```
*/

use crate::{
    engine::Engine,
    misc::log::targets,
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::CClause,
        formula::Formula,
        literal::{CLiteral, Literal},
    },
    types::err::{ErrorKind, MalformedInputError},
};

/// A formula with a relaxation atom for each clause, stored in some engine.
#[derive(Clone, Debug)]
pub struct SoftFormula {
    /// The clauses of the formula, without any terminating `0`.
    clauses: Vec<Vec<isize>>,

    /// The atom of each variable, with the atom of variable *v* at index *v - 1*.
    variable_atoms: Vec<Atom>,

    /// The relaxation atom of each clause.
    relaxation_atoms: Vec<Atom>,
}

impl SoftFormula {
    /// Checks `formula` and adds each clause of the formula, extended by a fresh relaxation atom, to `engine`.
    pub fn build<E: Engine>(engine: &mut E, formula: &Formula) -> Result<Self, ErrorKind> {
        let clauses = Self::checked_clauses(formula)?;

        let variable_atoms = (0..formula.variable_count)
            .map(|_| engine.fresh_atom())
            .collect::<Result<Vec<_>, _>>()?;

        let relaxation_atoms = (0..clauses.len())
            .map(|_| engine.fresh_atom())
            .collect::<Result<Vec<_>, _>>()?;

        for (clause, relaxation) in clauses.iter().zip(&relaxation_atoms) {
            let mut soft_clause: CClause = clause
                .iter()
                .map(|&literal| {
                    let atom = variable_atoms[literal.unsigned_abs() - 1];
                    CLiteral::new(atom, literal.is_positive())
                })
                .collect();
            soft_clause.push(CLiteral::new(*relaxation, true));

            engine.add_clause(soft_clause)?;
        }

        log::info!(target: targets::RELAXATION, "Relaxed {} clauses over {} variables", clauses.len(), variable_atoms.len());

        Ok(SoftFormula {
            clauses,
            variable_atoms,
            relaxation_atoms,
        })
    }

    /// The clauses of `formula`, without terminating `0`s, if the formula agrees with its declared counts.
    fn checked_clauses(formula: &Formula) -> Result<Vec<Vec<isize>>, ErrorKind> {
        if formula.clauses.len() != formula.clause_count {
            return Err(MalformedInputError::ClauseCount {
                declared: formula.clause_count,
                found: formula.clauses.len(),
            }
            .into());
        }

        let capacity = ATOM_MAX as usize;
        if formula.variable_count > capacity
            || formula.clause_count > capacity - formula.variable_count
        {
            return Err(MalformedInputError::Capacity {
                variables: formula.variable_count,
                clauses: formula.clause_count,
            }
            .into());
        }

        let mut clauses = Vec::with_capacity(formula.clauses.len());

        for (index, clause) in formula.clauses.iter().enumerate() {
            let literals = match clause.split_last() {
                Some((&0, literals)) => literals,
                _ => clause.as_slice(),
            };

            for (position, &literal) in literals.iter().enumerate() {
                if literal == 0 {
                    return Err(MalformedInputError::ZeroLiteral {
                        clause: index,
                        position,
                    }
                    .into());
                }
                if literal.unsigned_abs() > formula.variable_count {
                    return Err(MalformedInputError::VariableRange {
                        clause: index,
                        literal,
                    }
                    .into());
                }
            }

            clauses.push(literals.to_vec());
        }

        Ok(clauses)
    }

    /// The count of clauses, each of which is soft.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The count of (declared) variables.
    pub fn variable_count(&self) -> usize {
        self.variable_atoms.len()
    }

    /// The clauses, without relaxation atoms.
    pub fn clauses(&self) -> &[Vec<isize>] {
        &self.clauses
    }

    /// The atom of each variable, with the atom of variable *v* at index *v - 1*.
    pub fn variable_atoms(&self) -> &[Atom] {
        &self.variable_atoms
    }

    /// The relaxation atom of each clause, in order.
    pub fn relaxation_atoms(&self) -> &[Atom] {
        &self.relaxation_atoms
    }

    /// The indicies of those clauses violated by `valuation`, where the value of variable *v* is at index *v - 1*.
    pub fn violated(&self, valuation: &[bool]) -> Vec<usize> {
        self.clauses
            .iter()
            .enumerate()
            .filter(|(_, clause)| {
                !clause.iter().any(|&literal| {
                    let value = valuation
                        .get(literal.unsigned_abs() - 1)
                        .copied()
                        .unwrap_or(false);
                    value == literal.is_positive()
                })
            })
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, context::Context};

    fn built(formula: &Formula) -> Result<SoftFormula, ErrorKind> {
        let mut engine = Context::from_config(Config::default());
        SoftFormula::build(&mut engine, formula)
    }

    #[test]
    fn clause_count_disagrees() {
        let mut formula = Formula::new(2, 3);
        formula.push_clause(vec![1, 2]);
        assert_eq!(
            built(&formula).err(),
            Some(ErrorKind::MalformedInput(MalformedInputError::ClauseCount {
                declared: 3,
                found: 1
            }))
        );
    }

    #[test]
    fn zero_mid_clause() {
        let formula = Formula::from_clauses(3, vec![vec![1, 0, 2, 0]]);
        assert_eq!(
            built(&formula).err(),
            Some(ErrorKind::MalformedInput(MalformedInputError::ZeroLiteral {
                clause: 0,
                position: 1
            }))
        );
    }

    #[test]
    fn variable_out_of_range() {
        let formula = Formula::from_clauses(2, vec![vec![1], vec![-3, 1]]);
        assert_eq!(
            built(&formula).err(),
            Some(ErrorKind::MalformedInput(MalformedInputError::VariableRange {
                clause: 1,
                literal: -3
            }))
        );
    }

    #[test]
    fn declared_beyond_atoms() {
        let too_many = ATOM_MAX as usize + 1;
        let formula = Formula::from_clauses(too_many, vec![vec![1]]);
        assert_eq!(
            built(&formula).err(),
            Some(ErrorKind::MalformedInput(MalformedInputError::Capacity {
                variables: too_many,
                clauses: 1
            }))
        );

        let formula = Formula::from_clauses(ATOM_MAX as usize, vec![vec![1]]);
        assert_eq!(
            built(&formula).err(),
            Some(ErrorKind::MalformedInput(MalformedInputError::Capacity {
                variables: ATOM_MAX as usize,
                clauses: 1
            }))
        );
    }

    #[test]
    fn unused_variables() {
        let formula = Formula::from_clauses(5, vec![vec![1, -2]]);
        let soft = built(&formula).unwrap();
        assert_eq!(soft.variable_count(), 5);
        assert_eq!(soft.clause_count(), 1);
    }

    #[test]
    fn terminators_are_dropped() {
        let formula = Formula::from_clauses(2, vec![vec![1, 2, 0], vec![0]]);
        let soft = built(&formula).unwrap();
        assert_eq!(soft.clauses(), &[vec![1, 2], vec![]]);
        assert_eq!(soft.violated(&[true, true]), vec![1]);
    }
}
