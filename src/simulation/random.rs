//! Random draws for vehicle arrivals
//!
//! The simulator never touches a global generator. A `RandomSource` is handed
//! to each run and advanced once per draw.

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Exclusive upper bound of every draw
pub const DRAW_RANGE: f64 = 100.0;

/// Source of uniform values in `[0, 100)`
pub trait RandomSource {
    fn next_value(&mut self) -> f64;

    /// Bernoulli trial: true with probability `rate` percent
    ///
    /// A rate of 0 never succeeds and a rate of 100 always does.
    fn arrives(&mut self, rate: u8) -> bool {
        (self.next_value().floor() as u32) < u32::from(rate)
    }
}

/// Seeded generator used for real runs
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a generator with a reproducible seed
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_value(&mut self) -> f64 {
        self.rng.random_range(0.0..DRAW_RANGE)
    }
}

/// Hands out one seeded generator per run
///
/// With a master seed every run's generator is derived from it, so a whole
/// aggregate is reproducible. Without one each run gets fresh entropy.
#[derive(Debug)]
pub struct RunSeeds {
    master: Option<StdRng>,
}

impl RunSeeds {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            master: seed.map(StdRng::seed_from_u64),
        }
    }

    pub fn next_source(&mut self) -> SeededRandom {
        match &mut self.master {
            Some(master) => SeededRandom::new_with_seed(master.random()),
            None => SeededRandom::from_entropy(),
        }
    }
}
