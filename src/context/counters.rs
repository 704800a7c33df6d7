use std::time::Duration;

use crate::generic::luby::Luby;

/// Counts for various things which count, roughly.
pub struct Counters {
    /// A count of every conflict seen, across all solves.
    pub total_conflicts: usize,

    /// A count of conflicts seen since the last restart.
    ///
    /// As u32 rather than a usize for easier interaction with scheduling variables.
    pub fresh_conflicts: u32,

    /// A count of conflicts at the most recent reduction of the clause database.
    pub conflicts_at_reduction: usize,

    /// A count of all decisions made.
    pub total_decisions: usize,

    /// The total number of iterations through a solve.
    pub total_iterations: usize,

    /// The number of restarts.
    pub restarts: usize,

    /// The number of solves.
    pub solves: usize,

    /// The time taken during the most recent solve.
    pub time: Duration,

    /// The current element in the luby sequence.
    pub luby: Luby,
}

impl Default for Counters {
    fn default() -> Self {
        let mut luby = Luby::default();
        luby.next();

        Counters {
            total_conflicts: 0,
            fresh_conflicts: 0,
            conflicts_at_reduction: 0,

            total_decisions: 0,
            total_iterations: 0,

            restarts: 0,
            solves: 0,
            time: Duration::from_secs(0),

            luby,
        }
    }
}
