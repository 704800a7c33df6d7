//! Various procedures for mutating a context.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.
//!
//! - [bcp] propagates the consequences of literals on the trail.
//! - [analysis] derives an asserting clause from a conflict, and the assumptions responsible for a failed assumption.
//! - [backjump] undoes decisions.
//! - [decision] chooses an atom to value.
//! - [schedulers] determine when to restart, and when to reduce the clause database.
//! - [solve] ties the above together, under assumptions.

pub mod analysis;
pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod schedulers;
pub mod solve;
