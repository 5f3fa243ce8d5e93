//! Seeded random sampling for transform generation
//!
//! All stochastic sampling in the crate (translation offsets and rotation
//! draws) flows through [`RandomSource`], a seedable wrapper around a
//! `StdRng`. A process-wide instance lives behind a mutex and backs the
//! convenience constructors ([`crate::Transform::random`]) and the
//! [`set_random_seed`] entry point; callers that want explicit control
//! construct and pass their own source instead.
//!
//! Reproducibility contract: reseeding with a given seed and then issuing
//! the same sequence of sampling calls produces bit-identical results,
//! independent of any draws made before the reseed.

use once_cell::sync::Lazy;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Seed used for the process-wide generator before any explicit reseed
pub const DEFAULT_SEED: u64 = 42;

static GLOBAL_SOURCE: Lazy<Mutex<RandomSource>> =
    Lazy::new(|| Mutex::new(RandomSource::new(DEFAULT_SEED)));

/// Seedable pseudo-random generator for transform sampling
///
/// Wraps a `StdRng` together with the seed it was last seeded with. Not
/// safe for unsynchronized concurrent sampling; the process-wide instance
/// is mutex-guarded, and independent instances are cheap to create for
/// per-thread determinism.
#[derive(Debug)]
pub struct RandomSource {
    rng: StdRng,
    seed: u64,
}

impl RandomSource {
    /// Creates a new source seeded deterministically from `seed`
    pub fn new(seed: u64) -> Self {
        RandomSource {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Resets the generator deterministically
    ///
    /// Two reseeds with the same seed followed by the same sequence of
    /// sampling calls produce bit-identical results.
    pub fn reseed(&mut self, seed: u64) {
        log::debug!("reseeding random source with seed {}", seed);
        self.rng = StdRng::seed_from_u64(seed);
        self.seed = seed;
    }

    /// The seed this source was last seeded with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in [0, 1)
    pub fn sample_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform draw in [lo, hi)
    ///
    /// `lo` must be strictly less than `hi`.
    pub fn sample_range(&mut self, lo: f64, hi: f64) -> f64 {
        Uniform::from(lo..hi).sample(&mut self.rng)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Reseeds the process-wide generator
///
/// All subsequent random transform and quaternion construction through the
/// convenience constructors is reproducible from this point forward.
pub fn set_random_seed(seed: u64) {
    let mut source = GLOBAL_SOURCE.lock().expect("random source mutex poisoned");
    source.reseed(seed);
}

/// Runs a closure with exclusive access to the process-wide source
///
/// The lock is held for the duration of the closure, so a reseed-then-sample
/// sequence inside one closure cannot interleave with other threads.
pub fn with_global_source<T>(f: impl FnOnce(&mut RandomSource) -> T) -> T {
    let mut source = GLOBAL_SOURCE.lock().expect("random source mutex poisoned");
    f(&mut source)
}
