/*!
Schedulers, used to interrupt a solve for some task.

These return true if an interrupt is due, and false otherwise.

- A restart is due when the conflicts since the last restart reach the current element of the luby sequence, scaled by the [luby multiplier](crate::config::Config::luby_u).
- A reduction of the clause database is due after a restart, if either scheduler of the [Scheduler](crate::config::Scheduler) is due.
*/

use crate::{context::GenericContext, misc::log::targets};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Returns whether it is time for a restart based on whether fresh conflicts have reached the current luby element.
    pub fn luby_fresh_conflict_interrupt(&self) -> bool {
        let limit = self
            .config
            .luby_u
            .value
            .saturating_mul(self.counters.luby.current());
        self.counters.fresh_conflicts >= limit
    }

    /// Returns whether it is time for a reduction based on whether total restarts is multiple of the luby scheduler.
    pub fn restart_interrupt(&self) -> bool {
        match self.config.scheduler.luby {
            Some(interval) if interval > 0 => self.counters.restarts % (interval as usize) == 0,
            _ => false,
        }
    }

    /// Returns whether it is time for a reduction based on whether enough conflicts have been seen since the last reduction.
    pub fn conflict_total_interrupt(&self) -> bool {
        match self.config.scheduler.conflict {
            Some(interval) => {
                self.counters.total_conflicts - self.counters.conflicts_at_reduction
                    >= interval as usize
            }
            None => false,
        }
    }

    /// Backjumps to level zero and advances the luby sequence, then reduces the clause database if a reduction is due.
    pub fn restart(&mut self) {
        self.backjump(0);
        self.counters.fresh_conflicts = 0;
        self.counters.restarts += 1;
        self.counters.luby.next();

        log::trace!(target: targets::BACKJUMP, "Restart {}", self.counters.restarts);

        if self.config.switch.reduction
            && (self.restart_interrupt() || self.conflict_total_interrupt())
        {
            self.reduce();
        }
    }

    /// Removes (up to) half of the addition clauses, by activity, together with their watches.
    ///
    /// # Soundness
    /// Should only be called at level zero, as removed clauses may otherwise be the reason for some value.
    pub fn reduce(&mut self) {
        let mut removed = self.clause_db.reduce();
        removed.sort_unstable();
        if !removed.is_empty() {
            self.watches.purge(|key| removed.binary_search(&key).is_ok());
        }
        self.counters.conflicts_at_reduction = self.counters.total_conflicts;
    }
}
