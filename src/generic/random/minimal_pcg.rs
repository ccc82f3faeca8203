//! A minimal implementation of the PCG32 (XSH RR) generator.
//!
//! See <https://www.pcg-random.org> for details.
//!
//! ```rust
//! # use otter_asp::generic::random::MinimalPCG32;
//! # use rand::{Rng, SeedableRng};
//! let mut a = MinimalPCG32::from_seed(7_u64.to_le_bytes());
//! let mut b = MinimalPCG32::from_seed(7_u64.to_le_bytes());
//! assert_eq!(a.random::<u32>(), b.random::<u32>());
//! ```

use rand::SeedableRng;
use rand_core::{impls, RngCore};

const MULTIPLIER: u64 = 6364136223846793005;

/// State and increment.
pub struct MinimalPCG32 {
    state: u64,
    increment: u64,
}

impl Default for MinimalPCG32 {
    fn default() -> Self {
        MinimalPCG32::from_seed(0_u64.to_le_bytes())
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.state = old_state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.increment);

        let xor_shifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rotation = (old_state >> 59) as u32;
        xor_shifted.rotate_right(rotation)
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
        let mut rng = MinimalPCG32 {
            state: 0,
            increment: (0xda3e39cb94b95bdb_u64 << 1) | 1,
        };
        rng.next_u32();
        rng.state = rng.state.wrapping_add(u64::from_le_bytes(seed));
        rng.next_u32();
        rng
    }
}
