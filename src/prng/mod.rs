mod lcg;

pub use lcg::LcgRng;

use rand::{Rng, rngs::{SmallRng, ThreadRng}};

/// Anything that can hand out uniform `f64` draws in [0, 1).
///
/// Maze carving always goes through [LcgRng] so layouts are reproducible,
/// but fragment placement can run off either a seeded stream or plain
/// system entropy.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform index into a collection of `len` items, computed as
    /// `floor(next_f64() * len)`. `len` must be nonzero.
    fn rand_index(&mut self, len: usize) -> usize {
        let index = (self.next_f64() * len as f64).floor() as usize;
        index.min(len.saturating_sub(1))
    }
}

impl RandomSource for LcgRng {
    fn next_f64(&mut self) -> f64 {
        self.rand_f64()
    }
}

impl RandomSource for ThreadRng {
    fn next_f64(&mut self) -> f64 {
        self.gen()
    }
}

impl RandomSource for SmallRng {
    fn next_f64(&mut self) -> f64 {
        self.gen()
    }
}
