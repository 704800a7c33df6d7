/*!
Configuration of a context, and of a MaxSAT solve.

All configuration is contained within a [Config] struct.
Some structures clone parts of the configuration, such as the [atom database](crate::db::atom) which takes a copy of the activity decay.

Numeric configurations are stored as a [ConfigOption], which records the range of permitted values.
Boolean configurations are gathered as [Switches].
*/

use std::time::Duration;

mod config_option;
pub use config_option::ConfigOption;

pub mod dbs;
use dbs::{AtomDBConfig, ClauseDBConfig};

mod scheduler;
pub use scheduler::Scheduler;

mod switches;
pub use switches::Switches;

use crate::generic::luby::LubyRepresentation;

/// Representation used for clause and atom activity.
pub type Activity = f64;

/// Representation for the probability of choosing `true`.
pub type PolarityLean = f64;

/// Representation for the probability of making a random decision.
pub type RandomDecisionBias = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Configuration of the atom database.
    pub atom_db: AtomDBConfig,

    /// Configuration of the clause database.
    pub clause_db: ClauseDBConfig,

    /// The `u` value to multiply the luby sequence by when determining whether to perform a restart.
    pub luby_u: ConfigOption<LubyRepresentation>,

    /// The probability of assigning positive polarity to an atom when freely choosing an atom.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// The probability of choosing an atom at random, rather than by activity.
    pub random_decision_bias: ConfigOption<RandomDecisionBias>,

    /// A scheduler for reductions of the clause database.
    pub scheduler: Scheduler,

    /// Boolean configurations.
    pub switch: Switches,

    /// The time limit for a single solve, where a limit of zero is no limit.
    pub time_limit: ConfigOption<Duration>,
}

impl Default for Config {
    /// The default context is (roughly) configured to provide quick, deterministic, results on small formulas.
    fn default() -> Self {
        Config {
            atom_db: AtomDBConfig::default(),
            clause_db: ClauseDBConfig::default(),

            luby_u: ConfigOption {
                name: "luby",
                min: 1,
                max: LubyRepresentation::MAX,
                value: 128,
            },

            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            random_decision_bias: ConfigOption {
                name: "random_decision_bias",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            scheduler: Scheduler {
                luby: Some(2),
                conflict: Some(50_000),
            },

            switch: Switches::default(),

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(0),
            },
        }
    }
}

impl Config {
    /// The time limit of a solve, if some limit is set.
    pub fn time_limit(&self) -> Option<Duration> {
        match self.time_limit.value.is_zero() {
            true => None,
            false => Some(self.time_limit.value),
        }
    }
}
