//! Configuration of the databases of a context.

use super::{Activity, ConfigOption};

/// Configuration of the atom database.
#[derive(Clone, Debug)]
pub struct AtomDBConfig {
    /// The amount to bump the activity of an atom by, before any decay.
    pub bump: ConfigOption<Activity>,

    /// The factor by which the activity of atoms decays after each conflict.
    ///
    /// Implemented by increasing the bump by the inverse of the decay, as in MiniSAT.
    pub decay: ConfigOption<Activity>,
}

impl Default for AtomDBConfig {
    fn default() -> Self {
        AtomDBConfig {
            bump: ConfigOption {
                name: "atom_bump",
                min: Activity::MIN_POSITIVE,
                max: 1.0,
                value: 1.0,
            },

            decay: ConfigOption {
                name: "atom_decay",
                min: Activity::MIN_POSITIVE,
                max: 1.0,
                value: 0.95,
            },
        }
    }
}

/// Configuration of the clause database.
#[derive(Clone, Debug)]
pub struct ClauseDBConfig {
    /// The amount to bump the activity of a clause by, before any decay.
    pub bump: ConfigOption<Activity>,

    /// The factor by which the activity of clauses decays after each conflict.
    pub decay: ConfigOption<Activity>,
}

impl Default for ClauseDBConfig {
    fn default() -> Self {
        ClauseDBConfig {
            bump: ConfigOption {
                name: "clause_bump",
                min: Activity::MIN_POSITIVE,
                max: 1.0,
                value: 1.0,
            },

            decay: ConfigOption {
                name: "clause_decay",
                min: Activity::MIN_POSITIVE,
                max: 1.0,
                value: 0.999,
            },
        }
    }
}
