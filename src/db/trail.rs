//! The trail of literals made true, in order, split by decision level.
//!
//! Literals at level zero are before the first index in `level_indicies`, and the literals of level *l* > 0 start at `level_indicies[l - 1]`.
//! Literals after `q_head` are yet to be propagated.

use crate::structures::literal::CLiteral;

use super::LevelIndex;

#[derive(Default)]
pub struct Trail {
    pub literals: Vec<CLiteral>,
    pub level_indicies: Vec<usize>,
    pub q_head: usize,
}

impl Trail {
    /// Stores a literal made true at the current level.
    pub fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len() as LevelIndex
    }

    /// Opens a fresh level, which the next stored literal begins.
    pub fn open_level(&mut self) {
        self.level_indicies.push(self.literals.len());
    }

    /// The next literal to propagate, if any, advancing the queue.
    pub fn next_to_propagate(&mut self) -> Option<CLiteral> {
        let literal = self.literals.get(self.q_head).copied()?;
        self.q_head += 1;
        Some(literal)
    }

    /// Marks every literal on the trail as propagated.
    pub fn clear_queue(&mut self) {
        self.q_head = self.literals.len();
    }

    /// Removes levels above the given level index, if they exist, returning the removed literals in order of assignment.
    ///
    /// # Soundness
    /// Does not clear the *valuation* of the literals.
    pub fn clear_assigments_above(&mut self, level: LevelIndex) -> Vec<CLiteral> {
        match self.level_indicies.get(level as usize) {
            Some(&level_start) => {
                self.level_indicies.truncate(level as usize);
                self.q_head = self.q_head.min(level_start);
                self.literals.split_off(level_start)
            }
            None => Vec::default(),
        }
    }

    /// The literal which opened `level`, for any level above zero.
    pub fn literal_opening(&self, level: LevelIndex) -> Option<CLiteral> {
        let index = *self.level_indicies.get((level as usize).checked_sub(1)?)?;
        self.literals.get(index).copied()
    }
}
