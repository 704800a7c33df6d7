//! A simple pseudorandom number generator.
//!
//! Specifically, the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/>, implemented to satisfy [RngCore].
//!
//! PCG(32) is the default source of (pseudo)random numbers as it is simple, fast, and deterministic given a seed.
//! Each [context](crate::context) stores a source of rng, and the [Context](crate::context::Context) fixes this to [MinimalPCG32].
//!
//! The generator is also used by tests to build random formulas, without a dependency on a seeded generator from elsewhere.

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// State and increment.
#[derive(Clone, Debug, Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc | 1);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        const INCREMENT: u64 = 1442695040888963407;
        let mut rng = Self {
            state: 0,
            inc: INCREMENT,
        };
        rng.next_u32();
        rng.state = rng.state.wrapping_add(u64::from_le_bytes(seed));
        rng.next_u32();
        rng
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn deterministic() {
        let mut a = MinimalPCG32::from_seed(73_u64.to_le_bytes());
        let mut b = MinimalPCG32::from_seed(73_u64.to_le_bytes());
        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn seeds_diverge() {
        let mut a = MinimalPCG32::from_seed(2_u64.to_le_bytes());
        let mut b = MinimalPCG32::from_seed(73_u64.to_le_bytes());
        let a_values = (0..8).map(|_| a.next_u32()).collect::<Vec<_>>();
        let b_values = (0..8).map(|_| b.next_u32()).collect::<Vec<_>>();
        assert_ne!(a_values, b_values);
    }
}
