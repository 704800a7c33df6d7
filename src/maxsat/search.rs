/*!
The incremental relaxation search.

Budgets *k* = 0, 1, … are tried in order, where to try budget *k*:
1. A fresh assumption atom a<sub>k</sub> is obtained from the engine.
2. If *k* is less than the count of clauses, the [ladder](crate::maxsat::ladder) clauses for *k* are added to the engine, each guarded by ¬a<sub>k</sub>.
   Otherwise, every clause may be relaxed and nothing is added.
3. The engine solves under the assumptions ¬a<sub>0</sub>, …, ¬a<sub>k-1</sub>, a<sub>k</sub>.
   So, the clauses of budget *k* are active and the clauses of every earlier budget are satisfied by their guard.

The first satisfiable budget is the minimum count of violated clauses.
The search ends there, and a model is read from the engine for each variable of the formula.

As no assumption is made on the atoms of a later budget, and the clauses of every budget are guarded, no clause added for one budget affects another.
And, as clauses are only ever added, anything learnt by the engine during one solve holds for every later solve.

# Errors

- If the engine reports [Unknown](Report::Unknown) for some budget, the search stops with [Interrupted](SearchError::Interrupted).
  A later call to [solve](MaxContext::solve) resumes the search from the interrupted budget.
- If every budget, including the budget which permits every clause to be relaxed, is unsatisfiable, the search stops with [Exhausted](SearchError::Exhausted).
  This happens only if clauses were added to the engine outside of the search.
*/

use crate::{
    engine::Engine,
    maxsat::{report::MaxSatReport, MaxContext},
    misc::log::targets,
    reports::Report,
    structures::literal::{CLiteral, Literal},
    types::err::{ErrorKind, SearchError},
};

/// The outcome of trying a budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelaxationOk {
    /// The budget is satisfiable, with the given value for each variable.
    Satisfied(Vec<Option<bool>>),

    /// The budget is unsatisfiable.
    Unsatisfied,
}

impl<E: Engine> MaxContext<E> {
    /// Searches for the least budget under which the formula is satisfiable.
    ///
    /// If the search has already completed, the outcome is returned without any further solve.
    pub fn solve(&mut self) -> Result<MaxSatReport, ErrorKind> {
        if let Some(outcome) = &self.outcome {
            return Ok(outcome.clone());
        }

        let clause_count = self.soft.clause_count();

        for budget in self.refuted..=clause_count {
            match self.relax_to(budget)? {
                RelaxationOk::Unsatisfied => self.refuted = budget + 1,

                RelaxationOk::Satisfied(model) => {
                    let outcome = MaxSatReport::new(clause_count, budget, model);
                    log::info!(target: targets::SEARCH, "Least budget {budget}, with {} of {clause_count} clauses satisfied", outcome.satisfied_count());

                    self.outcome = Some(outcome.clone());
                    return Ok(outcome);
                }
            }
        }

        log::error!(target: targets::SEARCH, "Every budget is unsatisfiable");
        Err(SearchError::Exhausted.into())
    }

    /// Tries `budget`, which must be the budget following the last budget refuted.
    ///
    /// A budget already written (as a search was interrupted) is tried again without writing the budget a second time.
    fn relax_to(&mut self, budget: usize) -> Result<RelaxationOk, ErrorKind> {
        self.budgets_tried.push(budget);

        if budget == self.assumption_atoms.len() {
            let assumption = self.engine.fresh_atom()?;
            self.assumption_atoms.push(assumption);

            if budget < self.soft.clause_count() {
                let written = self.ladder.encode(&mut self.engine, budget, assumption)?;
                log::trace!(target: targets::SEARCH, "Budget {budget} written with {written} clauses");
            }
        }

        let assumptions = self.assumption_atoms[..=budget]
            .iter()
            .enumerate()
            .map(|(index, atom)| CLiteral::new(*atom, index == budget))
            .collect::<Vec<_>>();

        let report = self.engine.solve_given(assumptions)?;
        log::info!(target: targets::SEARCH, "Budget {budget}: {report}");

        if let Some(callback) = &mut self.callback_budget {
            callback(budget, report);
        }

        match report {
            Report::Satisfiable => {
                let model = self
                    .soft
                    .variable_atoms()
                    .iter()
                    .map(|atom| self.engine.value_of(*atom))
                    .collect();
                Ok(RelaxationOk::Satisfied(model))
            }

            Report::Unsatisfiable => Ok(RelaxationOk::Unsatisfied),

            Report::Unknown => Err(SearchError::Interrupted(budget).into()),
        }
    }
}
