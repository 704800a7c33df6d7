/*!
Maximum satisfiability, by an incremental relaxation search over a ladder encoding.

A [MaxContext] owns a SAT [Engine] together with:
- A [SoftFormula], whose clauses have been added to the engine with a relaxation atom each.
- A [Ladder] over the relaxation atoms, whose clauses for each budget are added to the engine as the budget is tried.
- The assumption atom of each budget tried, in order.

The [search](crate::maxsat::search) tries budgets 0, 1, 2, … until the engine finds the formula satisfiable with at most that many relaxation atoms true.
The result is a [MaxSatReport].

```rust
# use otter_maxsat::config::Config;
# use otter_maxsat::context::Context;
# use otter_maxsat::maxsat::MaxContext;
# use otter_maxsat::structures::formula::Formula;
let formula = Formula::from_clauses(2, vec![vec![1, 2], vec![-1, -2], vec![1, -2]]);

let config = Config::default();
let mut max_ctx = MaxContext::from_formula(Context::from_config(config.clone()), &formula, &config).unwrap();

let report = max_ctx.solve().unwrap();
assert_eq!(report.satisfied_count(), 3);
assert_eq!(formula.satisfied_count(&report.valuation()), 3);
assert_eq!(max_ctx.budgets_tried(), &[0]);
```
*/

pub mod ladder;
pub mod report;
pub mod search;
pub mod soft;

use ladder::Ladder;
use report::MaxSatReport;
use soft::SoftFormula;

use crate::{
    config::Config, engine::Engine, reports::Report, structures::atom::Atom,
    structures::formula::Formula, types::err::ErrorKind,
};

/// Told of each budget tried, and the report of the engine for the budget.
pub type CallbackBudget = dyn FnMut(usize, Report);

/// The context of a MaxSAT solve.
pub struct MaxContext<E: Engine> {
    /// The SAT engine.
    engine: E,

    /// The formula, as added to the engine.
    soft: SoftFormula,

    /// The encoding of budgets.
    ladder: Ladder,

    /// The assumption atom of each budget tried, with the atom of budget *k* at index *k*.
    assumption_atoms: Vec<Atom>,

    /// Each budget tried, in order.
    budgets_tried: Vec<usize>,

    /// The count of budgets found unsatisfiable, and so the least budget which may be satisfiable.
    refuted: usize,

    /// The outcome of the search, once found.
    outcome: Option<MaxSatReport>,

    /// Told of each budget tried.
    callback_budget: Option<Box<CallbackBudget>>,
}

impl<E: Engine> MaxContext<E> {
    /// Adds `formula` to `engine`, with each clause soft, and prepares a ladder over the relaxation atoms of the clauses.
    pub fn from_formula(mut engine: E, formula: &Formula, config: &Config) -> Result<Self, ErrorKind> {
        let soft = SoftFormula::build(&mut engine, formula)?;
        let ladder = Ladder::new(soft.relaxation_atoms().to_vec(), config.switch.tightness);

        Ok(MaxContext {
            engine,
            soft,
            ladder,
            assumption_atoms: Vec::default(),
            budgets_tried: Vec::default(),
            refuted: 0,
            outcome: None,
            callback_budget: None,
        })
    }

    /// The engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The engine, mutably.
    ///
    /// Note, clauses added to the engine are hard, and so are never relaxed.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// The formula, as added to the engine.
    pub fn soft_formula(&self) -> &SoftFormula {
        &self.soft
    }

    /// The ladder encoding of budgets.
    pub fn ladder(&self) -> &Ladder {
        &self.ladder
    }

    /// Each budget tried, in order.
    pub fn budgets_tried(&self) -> &[usize] {
        &self.budgets_tried
    }

    /// The assumption atom of each budget tried, with the atom of budget *k* at index *k*.
    pub fn assumption_atoms(&self) -> &[Atom] {
        &self.assumption_atoms
    }

    /// Sets a callback which is told of each budget tried and the report of the engine for the budget.
    pub fn set_callback_budget(&mut self, callback: Box<CallbackBudget>) {
        self.callback_budget = Some(callback);
    }

    /// The outcome of the search, if the search has completed.
    pub fn report(&self) -> Result<&MaxSatReport, ErrorKind> {
        self.outcome.as_ref().ok_or(ErrorKind::NoModel)
    }
}
