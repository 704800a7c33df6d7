//! Sources of randomness.

mod minimal_pcg;

pub use minimal_pcg::MinimalPCG32;
