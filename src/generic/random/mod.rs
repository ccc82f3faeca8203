//! Sources of randomness.
//!
//! A context is generic over its source of randomness, so long as the source implements [rand::Rng] and [Default].
//! Randomness is used sparingly: for random phases and for the occasional random decision.

mod minimal_pcg;

pub use minimal_pcg::MinimalPCG32;
