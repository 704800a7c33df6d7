/*!
A ladder (or sequential counter) encoding of "at most *k* of *n* relaxation atoms are true".

# The grid

The encoding uses a grid of atoms e<sub>i,j</sub>, for rows *i* in `[0, n - 2]` and columns *j* in `[0, n - 1]`, where e<sub>i,j</sub> is read as "at least *j + 1* of r<sub>0</sub>, …, r<sub>i</sub> are true".
The bounds of the grid are fixed when the ladder is made.
Atoms of the grid are obtained from the engine a column at a time, on first use, and are shared by every budget.
As the encoding of budget *k* uses columns `[0, k - 1]` only, a search which stops at budget *k* obtains *k* columns.

# The clauses

Given a budget *k* in `[0, n - 1]` and an assumption atom a<sub>k</sub>, each clause below is written with ¬a<sub>k</sub> as an additional literal, so the clauses constrain a solve only when a<sub>k</sub> is assumed.

- For *k* = 0, each relaxation atom is false: ¬r<sub>i</sub>.
- For *k* ≥ 1:
  + Link: r<sub>i</sub> → e<sub>i,0</sub>, for *i* in `[0, n - 2]`.
  + Monotonicity: e<sub>i,j</sub> → e<sub>i+1,j</sub>, for *i* in `[0, n - 3]` and *j* in `[0, k - 1]`.
  + Carry: e<sub>i,j</sub> ∧ r<sub>i+1</sub> → e<sub>i+1,j+1</sub>, for *i* in `[0, n - 3]` and *j* in `[0, k - 2]`.
  + Cutoff: ¬(e<sub>i,k-1</sub> ∧ r<sub>i+1</sub>), for *i* in `[0, n - 2]`.
  + Tightness: ¬e<sub>i,j</sub>, for *j* in `[0, k - 1]` and *i* in `[0, j - 1]`.

The link, monotonicity, and carry clauses force e<sub>i,j</sub> whenever at least *j + 1* of r<sub>0</sub>, …, r<sub>i</sub> are true, and so the cutoff clauses are violated exactly when some r<sub>i+1</sub> is the *k + 1*th true relaxation atom.
Tightness clauses are not required, though they help propagation, and may be disabled with the [tightness](crate::config::Switches::tightness) switch.

A budget of *n* permits every clause to be relaxed, and so is not encoded.

```rust
# use otter_maxsat::config::Config;
# use otter_maxsat::context::Context;
# use otter_maxsat::maxsat::ladder::Ladder;
# use otter_maxsat::reports::Report;
# use otter_maxsat::structures::literal::{CLiteral, Literal};
let mut engine = Context::from_config(Config::default());
let relaxation = (0..3).map(|_| engine.fresh_or_max_atom()).collect::<Vec<_>>();
let assumption = engine.fresh_or_max_atom();

let mut ladder = Ladder::new(relaxation.clone(), true);
assert!(ladder.encode(&mut engine, 1, assumption).is_ok());

let mut assumptions = vec![CLiteral::new(assumption, true)];
assumptions.push(CLiteral::new(relaxation[0], true));
assert_eq!(engine.solve_given(assumptions.clone()), Ok(Report::Satisfiable));

assumptions.push(CLiteral::new(relaxation[2], true));
assert_eq!(engine.solve_given(assumptions), Ok(Report::Unsatisfiable));
```
*/

use crate::{
    engine::Engine,
    misc::log::targets,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{EncodingBoundsError, ErrorKind},
};

/// A ladder encoding over some fixed relaxation atoms.
pub struct Ladder {
    /// The relaxation atoms, r<sub>0</sub>, …, r<sub>n-1</sub>.
    relaxation: Vec<Atom>,

    /// The columns of the grid obtained so far, each with one atom per row.
    columns: Vec<Vec<Atom>>,

    /// Whether each budget has been encoded.
    encoded: Vec<bool>,

    /// Whether to write tightness clauses.
    tightness: bool,
}

impl Ladder {
    /// A ladder over `relaxation`, without any atoms of the grid.
    pub fn new(relaxation: Vec<Atom>, tightness: bool) -> Self {
        let encoded = vec![false; relaxation.len()];
        Ladder {
            relaxation,
            columns: Vec::default(),
            encoded,
            tightness,
        }
    }

    /// The count of relaxation atoms.
    pub fn size(&self) -> usize {
        self.relaxation.len()
    }

    /// The count of rows of the grid.
    pub fn rows(&self) -> usize {
        self.relaxation.len().saturating_sub(1)
    }

    /// The count of columns of the grid.
    pub fn columns(&self) -> usize {
        self.relaxation.len()
    }

    /// The count of columns obtained from an engine so far.
    pub fn columns_obtained(&self) -> usize {
        self.columns.len()
    }

    /// The atom e<sub>row,column</sub>, obtaining any missing columns up to `column` from `engine`.
    pub fn cell<E: Engine>(
        &mut self,
        engine: &mut E,
        row: usize,
        column: usize,
    ) -> Result<Atom, ErrorKind> {
        if row >= self.rows() || column >= self.columns() {
            log::error!(target: targets::ENCODING, "Cell ({row}, {column}) outside of the grid");
            return Err(EncodingBoundsError::Cell { row, column }.into());
        }

        while self.columns.len() <= column {
            let column = (0..self.rows())
                .map(|_| engine.fresh_atom())
                .collect::<Result<Vec<_>, _>>()?;
            self.columns.push(column);
        }

        Ok(self.columns[column][row])
    }

    /// Writes the clauses of the encoding for `budget` to `engine`, each with the negation of `assumption`.
    ///
    /// Returns the count of clauses written.
    pub fn encode<E: Engine>(
        &mut self,
        engine: &mut E,
        budget: usize,
        assumption: Atom,
    ) -> Result<usize, ErrorKind> {
        let size = self.size();

        match self.encoded.get(budget) {
            None => {
                log::error!(target: targets::ENCODING, "Budget {budget} outside of [0, {size})");
                return Err(EncodingBoundsError::Budget {
                    budget,
                    clause_count: size,
                }
                .into());
            }
            Some(true) => return Err(EncodingBoundsError::Repeat(budget).into()),
            Some(false) => {}
        }

        let gate = CLiteral::new(assumption, false);
        let mut clauses: Vec<CClause> = Vec::default();

        let r = self
            .relaxation
            .iter()
            .map(|atom| CLiteral::new(*atom, true))
            .collect::<Vec<_>>();

        if budget == 0 {
            for literal in &r {
                clauses.push(vec![-*literal, gate]);
            }
        } else {
            let k = budget;
            let last_row = size - 2;

            for i in 0..=last_row {
                let e_i_0 = CLiteral::new(self.cell(engine, i, 0)?, true);
                clauses.push(vec![-r[i], e_i_0, gate]);
            }

            for i in 0..last_row {
                for j in 0..k {
                    let e_i_j = CLiteral::new(self.cell(engine, i, j)?, true);
                    let e_next_j = CLiteral::new(self.cell(engine, i + 1, j)?, true);
                    clauses.push(vec![-e_i_j, e_next_j, gate]);
                }
            }

            for i in 0..last_row {
                for j in 0..(k - 1) {
                    let e_i_j = CLiteral::new(self.cell(engine, i, j)?, true);
                    let e_next_up = CLiteral::new(self.cell(engine, i + 1, j + 1)?, true);
                    clauses.push(vec![-e_i_j, -r[i + 1], e_next_up, gate]);
                }
            }

            for i in 0..=last_row {
                let e_i_top = CLiteral::new(self.cell(engine, i, k - 1)?, true);
                clauses.push(vec![-e_i_top, -r[i + 1], gate]);
            }

            if self.tightness {
                for j in 0..k {
                    for i in 0..j {
                        let e_i_j = CLiteral::new(self.cell(engine, i, j)?, true);
                        clauses.push(vec![-e_i_j, gate]);
                    }
                }
            }
        }

        let count = clauses.len();
        for clause in clauses {
            log::trace!(target: targets::ENCODING, "Budget {budget}: {}", clause.as_dimacs(true));
            engine.add_clause(clause)?;
        }

        self.encoded[budget] = true;
        log::info!(target: targets::ENCODING, "Budget {budget}: {count} clauses, {} columns", self.columns.len());

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::ClauseOk, reports::Report};

    /// An engine which records clauses, without solving.
    #[derive(Default)]
    struct RecordingEngine {
        atoms: u32,
        clauses: Vec<CClause>,
    }

    impl Engine for RecordingEngine {
        fn fresh_atom(&mut self) -> Result<Atom, ErrorKind> {
            self.atoms += 1;
            Ok(self.atoms)
        }

        fn add_clause(&mut self, clause: CClause) -> Result<ClauseOk, ErrorKind> {
            self.clauses.push(clause);
            Ok(ClauseOk::Added)
        }

        fn solve_given(&mut self, _: Vec<CLiteral>) -> Result<Report, ErrorKind> {
            Ok(Report::Unknown)
        }

        fn value_of(&self, _: Atom) -> Option<bool> {
            None
        }
    }

    fn ladder_of(engine: &mut RecordingEngine, size: usize) -> Ladder {
        let relaxation = (0..size)
            .map(|_| engine.fresh_atom().unwrap())
            .collect::<Vec<_>>();
        Ladder::new(relaxation, true)
    }

    /// The count of clauses expected for `budget` over `size` relaxation atoms.
    fn expected_count(size: usize, budget: usize, tightness: bool) -> usize {
        match budget {
            0 => size,
            k => {
                let link = size - 1;
                let monotonicity = (size - 2) * k;
                let carry = (size - 2) * (k - 1);
                let cutoff = size - 1;
                let tight = match tightness {
                    true => k * (k - 1) / 2,
                    false => 0,
                };
                link + monotonicity + carry + cutoff + tight
            }
        }
    }

    #[test]
    fn budget_zero() {
        let mut engine = RecordingEngine::default();
        let mut ladder = ladder_of(&mut engine, 3);
        let assumption = engine.fresh_atom().unwrap();

        assert_eq!(ladder.encode(&mut engine, 0, assumption), Ok(3));
        assert_eq!(ladder.columns_obtained(), 0);

        let expected = (1..=3)
            .map(|r| vec![CLiteral::new(r, false), CLiteral::new(assumption, false)])
            .collect::<Vec<_>>();
        assert_eq!(engine.clauses, expected);
    }

    #[test]
    fn every_clause_is_gated() {
        let mut engine = RecordingEngine::default();
        let size = 7;
        let mut ladder = ladder_of(&mut engine, size);

        for budget in 0..size {
            let assumption = engine.fresh_atom().unwrap();
            let before = engine.clauses.len();
            let count = ladder.encode(&mut engine, budget, assumption).unwrap();

            assert_eq!(count, expected_count(size, budget, true));
            assert_eq!(engine.clauses.len() - before, count);

            for clause in &engine.clauses[before..] {
                assert_eq!(clause.last(), Some(&CLiteral::new(assumption, false)));
                assert_eq!(
                    clause.iter().filter(|l| l.atom() == assumption).count(),
                    1
                );
            }
        }
    }

    #[test]
    fn columns_on_demand() {
        let mut engine = RecordingEngine::default();
        let size = 6;
        let mut ladder = ladder_of(&mut engine, size);
        let atoms_before = engine.atoms;

        let assumption = engine.fresh_atom().unwrap();
        ladder.encode(&mut engine, 2, assumption).unwrap();

        assert_eq!(ladder.columns_obtained(), 2);
        assert_eq!(engine.atoms - atoms_before - 1, 2 * (size as u32 - 1));

        let assumption = engine.fresh_atom().unwrap();
        ladder.encode(&mut engine, 1, assumption).unwrap();
        assert_eq!(ladder.columns_obtained(), 2);
    }

    #[test]
    fn without_tightness() {
        let mut engine = RecordingEngine::default();
        let relaxation = (0..5)
            .map(|_| engine.fresh_atom().unwrap())
            .collect::<Vec<_>>();
        let mut ladder = Ladder::new(relaxation, false);

        let assumption = engine.fresh_atom().unwrap();
        assert_eq!(
            ladder.encode(&mut engine, 3, assumption),
            Ok(expected_count(5, 3, false))
        );
        assert!(engine.clauses.iter().all(|clause| clause.len() > 2));
    }

    #[test]
    fn bounds() {
        let mut engine = RecordingEngine::default();
        let mut ladder = ladder_of(&mut engine, 4);
        let assumption = engine.fresh_atom().unwrap();

        assert_eq!(
            ladder.encode(&mut engine, 4, assumption),
            Err(ErrorKind::EncodingBounds(EncodingBoundsError::Budget {
                budget: 4,
                clause_count: 4
            }))
        );

        assert_eq!(
            ladder.cell(&mut engine, 3, 0),
            Err(ErrorKind::EncodingBounds(EncodingBoundsError::Cell {
                row: 3,
                column: 0
            }))
        );
        assert_eq!(
            ladder.cell(&mut engine, 0, 4),
            Err(ErrorKind::EncodingBounds(EncodingBoundsError::Cell {
                row: 0,
                column: 4
            }))
        );
        assert!(ladder.cell(&mut engine, 2, 3).is_ok());

        assert!(ladder.encode(&mut engine, 3, assumption).is_ok());
        assert_eq!(
            ladder.encode(&mut engine, 3, assumption),
            Err(ErrorKind::EncodingBounds(EncodingBoundsError::Repeat(3)))
        );
    }

    #[test]
    fn empty_and_single() {
        let mut engine = RecordingEngine::default();

        let mut empty = ladder_of(&mut engine, 0);
        let assumption = engine.fresh_atom().unwrap();
        assert!(empty.encode(&mut engine, 0, assumption).is_err());

        let mut single = ladder_of(&mut engine, 1);
        assert_eq!(single.rows(), 0);
        assert_eq!(single.encode(&mut engine, 0, assumption), Ok(1));
    }
}
