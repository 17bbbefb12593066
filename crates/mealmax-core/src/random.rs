//! Random sources for battles.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::traits::RandomSource;

/// Pseudo-random source backed by `StdRng`.
///
/// Seeded sources replay the same draws, which makes whole tournaments
/// reproducible from the command line.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
    seed: Option<u64>,
}

impl SeededRandom {
    /// Create a source that replays the same sequence for the same seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            seed: Some(seed),
        }
    }

    /// Create a source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            seed: None,
        }
    }

    /// The seed this source was built from, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn draw(&self) -> f64 {
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen::<f64>()
    }
}

/// A scripted random source for tests.
///
/// Returns the configured values in order, cycling once exhausted.
pub struct FixedRandom {
    values: Vec<f64>,
    call_count: AtomicU32,
}

impl FixedRandom {
    /// Always return `value`.
    pub fn new(value: f64) -> Self {
        Self::sequence(vec![value])
    }

    /// Return `values` in order, wrapping around at the end.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn sequence(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "FixedRandom needs at least one value");
        Self {
            values,
            call_count: AtomicU32::new(0),
        }
    }

    /// Number of draws made so far.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl RandomSource for FixedRandom {
    fn draw(&self) -> f64 {
        let n = self.call_count.fetch_add(1, Ordering::Relaxed) as usize;
        self.values[n % self.values.len()]
    }
}
