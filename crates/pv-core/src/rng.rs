//! Deterministic simulation RNG wrapper.
//!
//! # Determinism strategy
//!
//! One `SimRng` is created per simulation run from an explicit seed and is
//! threaded by `&mut` through the arrival generator.  There is no
//! process-wide generator: two runs with the same seed draw the same values
//! in the same order, and runs on different threads never share state.
//!
//! Draw order is part of the output contract.  The arrival generator pulls
//! the interarrival gap first, then the straight-ticket coin flip, then
//! (only if the flip fails) the voting duration.

use rand::distributions::Distribution;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Per-run deterministic RNG.
///
/// The type is `!Sync` so a stream cannot be shared across threads by
/// accident.  Parallel trials each construct their own from their own seed.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Restart the stream from `seed`, discarding all prior state.
    pub fn reseed(&mut self, seed: u64) {
        self.0 = SmallRng::seed_from_u64(seed);
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Draw one value from `distribution`.
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, distribution: &D) -> T {
        self.0.sample(distribution)
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
