use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches},
    reports::Report,
    structures::{
        atom::{Atom, TOP_ATOM},
        literal::{CLiteral, Literal},
    },
    types::err::ErrorKind,
};

use super::{callbacks::CallbackTerminate, ContextState, Counters};

/// A generic context, parameratised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// [Default] is used in calls [make_decision](GenericContext::make_decision) to appease the borrow checker, and may be relaxed with a different implementation.
///
/// # Example
///
/// ```rust
/// # use otter_maxsat::context::GenericContext;
/// # use otter_maxsat::generic::random::MinimalPCG32;
/// # use otter_maxsat::config::Config;
/// let context = GenericContext::<MinimalPCG32>::from_config(Config::default());
/// assert_eq!(context.atom_count(), 1);
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// Watch lists for each literal.
    pub watches: Watches,

    /// The trail of literals made true.
    pub trail: Trail,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// Those assumptions which were found to conflict during the most recent solve, if the solve was unsatisfiable.
    pub(crate) failed_assumptions: Vec<CLiteral>,

    /// Terminates procedures, if true.
    pub(super) callback_terminate: Option<Box<CallbackTerminate>>,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A context from some given configuration and source of rng.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        let mut context = Self {
            atom_db: AtomDB::new(&config),
            clause_db: ClauseDB::new(&config),
            config,

            counters: Counters::default(),
            watches: Watches::default(),
            trail: Trail::default(),

            state: ContextState::Configuration,
            rng,

            failed_assumptions: Vec::default(),
            callback_terminate: None,
        };
        context.init();
        context
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// A count of atoms in the context, including the atom fixed to true.
    pub fn atom_count(&self) -> usize {
        self.atom_db.count()
    }

    /// The value of `atom` on the model found by the most recent solve, if the solve was satisfiable.
    ///
    /// The value is stable until the next solve, regardless of any clauses added in the interim.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.model_value_of(atom)
    }

    /// The assumptions found to conflict with the formula during the most recent solve, if the solve was unsatisfiable.
    ///
    /// Empty if the formula is unsatisfiable regardless of assumptions.
    pub fn failed_assumptions(&self) -> &[CLiteral] {
        &self.failed_assumptions
    }

    /// Ensures `atom` is part of the language of the context.
    pub fn check_atom(&self, atom: Atom) -> Result<(), ErrorKind> {
        match (atom as usize) < self.atom_db.count() {
            true => Ok(()),
            false => Err(crate::types::err::AtomDBError::Unknown(atom).into()),
        }
    }

    /// Adds the atom fixed to true.
    fn init(&mut self) {
        if let Ok(top) = self.fresh_atom_fundamental(true) {
            debug_assert_eq!(top, TOP_ATOM);
            let literal = CLiteral::new(top, true);
            self.atom_db.set_value(literal, 0, None);
            self.trail.store_assignment(literal);
            self.trail.clear_queue();
        }
    }
}
