/*!
A formula, as given to a MaxSAT solve.

A formula is a declared count of variables, a declared count of clauses, and a sequence of clauses, each a sequence of signed integers.
The representation is kept as close to the DIMACS representation as possible, and no check is made that the clauses of a formula agree with the declared counts.
Checks are made when a [SoftFormula](crate::maxsat::soft::SoftFormula) is built from the formula.

A clause may (though need not) include the terminating `0` of the DIMACS representation as its final integer.

```rust
# use otter_maxsat::structures::formula::Formula;
let formula = Formula::from_clauses(2, vec![vec![1, 2], vec![-1, -2, 0]]);

assert_eq!(formula.clause_count, 2);
assert_eq!(formula.satisfied_count(&[true, false]), 2);
assert_eq!(formula.satisfied_count(&[true, true]), 1);
```
*/

/// A formula, with declared counts of variables and clauses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    /// The number of variables declared, by a problem line or otherwise.
    pub variable_count: usize,

    /// The number of clauses declared, by a problem line or otherwise.
    pub clause_count: usize,

    /// The clauses, as integers whose absolute value is a variable and whose sign is a polarity.
    pub clauses: Vec<Vec<isize>>,
}

impl Formula {
    /// A formula without clauses, declared to have the given counts.
    pub fn new(variable_count: usize, clause_count: usize) -> Self {
        Formula {
            variable_count,
            clause_count,
            clauses: Vec::default(),
        }
    }

    /// A formula whose declared clause count is the count of the given clauses.
    pub fn from_clauses(variable_count: usize, clauses: Vec<Vec<isize>>) -> Self {
        Formula {
            variable_count,
            clause_count: clauses.len(),
            clauses,
        }
    }

    /// Appends a clause to the formula.
    pub fn push_clause(&mut self, clause: Vec<isize>) {
        self.clauses.push(clause);
    }

    /// The number of clauses satisfied by `valuation`, where the value of variable *v* is at index *v - 1*.
    ///
    /// Any variable outside of the valuation is taken to be false, and a terminating `0` is ignored.
    pub fn satisfied_count(&self, valuation: &[bool]) -> usize {
        self.clauses
            .iter()
            .filter(|clause| {
                clause.iter().any(|&literal| {
                    let value = match literal.unsigned_abs().checked_sub(1) {
                        None => return false,
                        Some(index) => valuation.get(index).copied().unwrap_or(false),
                    };
                    value == literal.is_positive()
                })
            })
            .count()
    }
}
