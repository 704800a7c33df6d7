/*!
The outcome of a relaxation search.

A [MaxSatReport] holds the first satisfiable budget, and the value of each variable on the model found for the budget.

The report is written as:
- The count of satisfied clauses, on a line of its own.
- The value of each variable as a signed literal, in order of variables, terminated by `0`.

```rust
# use otter_maxsat::maxsat::report::MaxSatReport;
let report = MaxSatReport::new(3, 1, vec![Some(true), Some(false), None]);

let mut out = Vec::default();
report.write(&mut out).unwrap();
assert_eq!(String::from_utf8(out).unwrap(), "2\n1 -2 -3 0\n");
```
*/

use std::io::Write;

/// The outcome of a relaxation search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaxSatReport {
    /// The count of clauses in the formula.
    clause_count: usize,

    /// The first budget found satisfiable.
    budget: usize,

    /// The value of each variable on the model, with variable *v* at index *v - 1*.
    model: Vec<Option<bool>>,
}

impl MaxSatReport {
    /// A report of `budget` as the least satisfiable budget of a formula with `clause_count` clauses, with `model` found for the budget.
    pub fn new(clause_count: usize, budget: usize, model: Vec<Option<bool>>) -> Self {
        MaxSatReport {
            clause_count,
            budget,
            model,
        }
    }

    /// The maximum count of simultaneously satisfiable clauses.
    pub fn satisfied_count(&self) -> usize {
        self.clause_count.saturating_sub(self.budget)
    }

    /// The minimum count of violated clauses.
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// The count of clauses in the formula.
    pub fn clause_count(&self) -> usize {
        self.clause_count
    }

    /// The value of each variable on the model, if valued.
    pub fn model(&self) -> &[Option<bool>] {
        &self.model
    }

    /// The value of each variable, with any variable the model does not value taken to be false.
    pub fn valuation(&self) -> Vec<bool> {
        self.model.iter().map(|value| value.unwrap_or(false)).collect()
    }

    /// Writes the report to `out`.
    pub fn write(&self, mut out: impl Write) -> std::io::Result<()> {
        writeln!(out, "{}", self.satisfied_count())?;
        writeln!(out, "{}", self.valuation_string())
    }

    fn valuation_string(&self) -> String {
        let mut literals = self
            .valuation()
            .iter()
            .enumerate()
            .map(|(index, &value)| match value {
                true => format!("{}", index + 1),
                false => format!("-{}", index + 1),
            })
            .collect::<Vec<_>>();
        literals.push("0".to_string());
        literals.join(" ")
    }
}

impl std::fmt::Display for MaxSatReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.satisfied_count(), self.valuation_string())
    }
}
