use std::cell::Cell;
use log::warn;

const MULTIPLIER: f64 = 9301.0;
const INCREMENT: f64 = 49297.0;
const MODULUS: f64 = 233280.0;

/// Seeded linear congruential generator used for maze carving.
/// The same seed always yields the same stream, which is what lets a single
/// number stand in for an entire maze.
/// State is kept as an `f64` because seeds handed out by the maze config
/// endpoint are fractional; doing the recurrence in floating point keeps
/// those seeds producing the same mazes they always have.
#[derive(Debug, Clone)]
pub struct LcgRng {
    seed: Cell<f64>,
    pub initial_seed: f64,
    pub num_rng_calls: Cell<usize>,
}

impl LcgRng {
    pub fn new(seed: f64) -> Self {
        let seed = if seed.is_finite() {
            seed
        }
        else {
            warn!("Non-finite seed {} replaced with 0", seed);
            0.0
        };
        Self {
            seed: Cell::new(seed),
            initial_seed: seed,
            num_rng_calls: Cell::new(0),
        }
    }

    /// Advances the generator and returns the next value in [0, 1).
    pub fn rand_f64(&self) -> f64 {
        let old_seed = self.seed.get();
        let mut new_seed = (old_seed * MULTIPLIER + INCREMENT).rem_euclid(MODULUS);
        // rem_euclid can round up to the modulus itself for tiny negative inputs.
        if new_seed >= MODULUS {
            new_seed = 0.0;
        }
        self.seed.set(new_seed);

        let old_count = self.num_rng_calls.get();
        self.num_rng_calls.set(old_count + 1);

        new_seed / MODULUS
    }

    /// `floor(rand_f64() * len)`. Always consumes exactly one draw.
    pub fn rand_index(&self, len: usize) -> usize {
        let index = (self.rand_f64() * len as f64).floor() as usize;
        index.min(len.saturating_sub(1))
    }

    /// Discards the next `n` values.
    pub fn advance(&self, n: usize) {
        for _ in 0..n {
            self.rand_f64();
        }
    }

    /// The current internal state.
    pub fn seed(&self) -> f64 {
        self.seed.get()
    }
}
