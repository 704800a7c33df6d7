/*!
A database of clause related things.

Clauses are distinguished by [key](ClauseKey):
- Original clauses are those added to a context, whether before the first solve or between solves, and are never removed.
- Addition clauses are those learnt during a solve, and may be removed during a [reduction](ClauseDB::reduce).

Only clauses with two or more literals are stored.
Empty clauses make a context inconsistent, and unit clauses are recorded directly on the valuation at level zero.

# Watched literals
The two watched literals of a stored clause are the literals at positions 0 and 1.
[BCP](crate::procedures::bcp) reorders the literals of a clause to keep this so, and when a clause is the reason for the value of some atom the literal of that atom is at position 0.

Fields of the database are private to ensure the use of methods which may be needed to uphold invariants.
*/

use std::ops::{Deref, DerefMut};

use crate::{
    config::{Activity, Config},
    db::ClauseKey,
    misc::log::targets,
    structures::{
        clause::{CClause, Clause},
        literal::CLiteral,
    },
    types::err::ClauseDBError,
};

/// The limit on activity, before all activities are rescaled.
const ACTIVITY_LIMIT: Activity = 1e20;

/// A clause together with some metadata.
#[allow(non_camel_case_types)]
pub struct dbClause {
    /// A key for accessing the clause.
    key: ClauseKey,

    /// The clause.
    clause: CClause,

    /// The activity of the clause, only revised for addition clauses.
    activity: Activity,
}

impl dbClause {
    /// The key used to access the clause.
    pub const fn key(&self) -> ClauseKey {
        self.key
    }

    /// The activity of the clause.
    pub fn activity(&self) -> Activity {
        self.activity
    }

    /// The clause, as stored.
    pub fn clause(&self) -> &CClause {
        &self.clause
    }
}

impl std::fmt::Display for dbClause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.clause.as_dimacs(false))
    }
}

impl Deref for dbClause {
    type Target = [CLiteral];

    fn deref(&self) -> &Self::Target {
        &self.clause
    }
}

impl DerefMut for dbClause {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.clause
    }
}

/// A database of clause related things.
pub struct ClauseDB {
    /// Original clauses.
    original: Vec<dbClause>,

    /// Addition clauses, where `None` marks a removed clause whose key may be reused.
    addition: Vec<Option<dbClause>>,

    /// A stack of keys for addition clauses whose indices are empty.
    empty_keys: Vec<ClauseKey>,

    /// A count of addition clauses.
    // This can't be inferred from the addition vec, as indices may be reused.
    addition_count: usize,

    /// The current quantity by which to bump activity.
    bump: Activity,

    /// The decay factor.
    decay: Activity,
}

impl ClauseDB {
    pub fn new(config: &Config) -> Self {
        ClauseDB {
            original: Vec::default(),
            addition: Vec::default(),
            empty_keys: Vec::default(),
            addition_count: 0,
            bump: config.clause_db.bump.value,
            decay: config.clause_db.decay.value,
        }
    }

    /// Stores a clause with two or more literals, returning the key of the clause.
    ///
    /// The literals at positions 0 and 1 are taken to be the watched literals, and it is the responsibility of the caller to watch these.
    pub fn store(&mut self, clause: CClause, original: bool) -> Result<ClauseKey, ClauseDBError> {
        if clause.len() < 2 {
            return Err(ClauseDBError::ShortClause);
        }

        let key = match original {
            true => {
                let index = u32::try_from(self.original.len())
                    .map_err(|_| ClauseDBError::StorageExhausted)?;
                ClauseKey::Original(index)
            }

            false => match self.empty_keys.pop() {
                Some(key) => key,
                None => {
                    let index = u32::try_from(self.addition.len())
                        .map_err(|_| ClauseDBError::StorageExhausted)?;
                    self.addition.push(None);
                    ClauseKey::Addition(index)
                }
            },
        };

        log::trace!(target: targets::CLAUSE_DB, "{key}: {}", clause.as_dimacs(false));

        let db_clause = dbClause {
            key,
            clause,
            activity: 0.0,
        };

        match key {
            ClauseKey::Original(_) => self.original.push(db_clause),
            ClauseKey::Addition(index) => {
                self.addition[index as usize] = Some(db_clause);
                self.addition_count += 1;
            }
        }

        Ok(key)
    }

    /// The clause stored at `key`, if present.
    pub fn get(&self, key: ClauseKey) -> Result<&dbClause, ClauseDBError> {
        let stored = match key {
            ClauseKey::Original(index) => self.original.get(index as usize),
            ClauseKey::Addition(index) => self
                .addition
                .get(index as usize)
                .and_then(|slot| slot.as_ref()),
        };
        stored.ok_or(ClauseDBError::Missing)
    }

    /// The clause stored at `key`, if present, mutably.
    pub fn get_mut(&mut self, key: ClauseKey) -> Result<&mut dbClause, ClauseDBError> {
        let stored = match key {
            ClauseKey::Original(index) => self.original.get_mut(index as usize),
            ClauseKey::Addition(index) => self
                .addition
                .get_mut(index as usize)
                .and_then(|slot| slot.as_mut()),
        };
        stored.ok_or(ClauseDBError::Missing)
    }

    /// A count of original clauses.
    pub fn original_count(&self) -> usize {
        self.original.len()
    }

    /// A count of addition clauses currently stored.
    pub fn addition_count(&self) -> usize {
        self.addition_count
    }

    /// Bumps the activity of the clause at `key`, if an addition clause, rescaling all activities if required.
    pub fn bump_activity(&mut self, key: ClauseKey) {
        let ClauseKey::Addition(index) = key else {
            return;
        };
        let Some(Some(db_clause)) = self.addition.get_mut(index as usize) else {
            return;
        };

        db_clause.activity += self.bump;

        if db_clause.activity > ACTIVITY_LIMIT {
            let factor = 1.0 / ACTIVITY_LIMIT;
            for db_clause in self.addition.iter_mut().flatten() {
                db_clause.activity *= factor;
            }
            self.bump *= factor;
        }
    }

    /// Decays the activity of all clauses, by increasing the quantity of future bumps.
    pub fn decay_activity(&mut self) {
        self.bump /= self.decay;
    }

    /// Removes (up to) half of the addition clauses with more than two literals, by least activity.
    ///
    /// Returns the keys of the removed clauses, so watches on the clauses may be removed.
    ///
    /// # Soundness
    /// Removed clauses may be the reason for the value of some atom, and so reductions should only be made when no decision has been made.
    pub fn reduce(&mut self) -> Vec<ClauseKey> {
        let mut candidates = self
            .addition
            .iter()
            .flatten()
            .filter(|db_clause| db_clause.len() > 2)
            .map(|db_clause| (db_clause.activity, db_clause.key))
            .collect::<Vec<_>>();

        candidates.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));
        candidates.truncate(self.addition_count / 2);

        let removed = candidates
            .into_iter()
            .map(|(_, key)| key)
            .collect::<Vec<_>>();

        for key in &removed {
            if let ClauseKey::Addition(index) = key {
                self.addition[*index as usize] = None;
                self.empty_keys.push(*key);
                self.addition_count -= 1;
            }
        }

        log::info!(target: targets::REDUCTION, "Removed {} addition clauses", removed.len());

        removed
    }
}
