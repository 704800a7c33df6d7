/*!
The context --- to which formulas are added and within which solves take place, etc.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness, and [from_config](Context::from_config) is implemented for a context rather than a generic context to avoid requiring a source of randomness to be supplied alongside a config.

A context is incremental: clauses may be added between solves, and each solve may be made under a different collection of assumptions.
Anything learnt during a solve remains valid for later solves, as assumptions are never written to the clause database.

# Example
```rust
# use otter_maxsat::context::Context;
# use otter_maxsat::config::Config;
# use otter_maxsat::reports::Report;
# use otter_maxsat::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());

let p = the_context.fresh_or_max_atom();
let q = the_context.fresh_or_max_atom();

let p_q_clause = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
assert!(the_context.add_clause(p_q_clause).is_ok());

let not_p = CLiteral::new(p, false);

assert!(the_context.add_clause(not_p).is_ok());
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
assert_eq!(the_context.report(), Report::Satisfiable);

assert_eq!(the_context.value_of(p), Some(false));
assert_eq!(the_context.value_of(q), Some(true));

assert_eq!(the_context.solve_given(vec![-CLiteral::new(q, true)]), Ok(Report::Unsatisfiable));
assert_eq!(the_context.failed_assumptions(), &[-CLiteral::new(q, true)]);
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// The most recent solve found the formula satisfiable under the given assumptions.
    Satisfiable,

    /// The most recent solve found the formula unsatisfiable under the given assumptions.
    Unsatisfiable,

    /// The formula is unsatisfiable, regardless of any assumptions.
    Inconsistent,

    /// The consistency of the database is unknown.
    Solving,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Inconsistent => write!(f, "Inconsistent"),
            Self::Solving => write!(f, "Solving"),
        }
    }
}
