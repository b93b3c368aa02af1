//! Randomness injection point. Every roll the simulation makes goes through
//! [`RandomSource`], so tests can script exact transition points and a whole
//! session can be replayed from a seed.

use std::collections::VecDeque;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform `f64` in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Uniform integer in `[lo, hi]`, inclusive on both ends.
    fn int_between(&mut self, lo: i64, hi: i64) -> i64;

    /// Uniform `f64` in `[lo, hi)`.
    fn float_between(&mut self, lo: f64, hi: f64) -> f64;

    /// Uniform index into a collection of `len` elements.
    fn index(&mut self, len: usize) -> usize;
}

/// Production source backed by the thread-local generator.
pub struct ThreadRandom(ThreadRng);

impl ThreadRandom {
    pub fn new() -> Self {
        Self(rand::rng())
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn uniform(&mut self) -> f64 {
        self.0.random()
    }

    fn int_between(&mut self, lo: i64, hi: i64) -> i64 {
        self.0.random_range(lo..=hi)
    }

    fn float_between(&mut self, lo: f64, hi: f64) -> f64 {
        self.0.random_range(lo..hi)
    }

    fn index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Deterministic source for reproducible runs and seeded tests.
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self) -> f64 {
        self.0.random()
    }

    fn int_between(&mut self, lo: i64, hi: i64) -> i64 {
        self.0.random_range(lo..=hi)
    }

    fn float_between(&mut self, lo: f64, hi: f64) -> f64 {
        self.0.random_range(lo..hi)
    }

    fn index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Replays queued values, used by tests to force exact rolls. An exhausted
/// queue falls back to values that keep probability checks from firing:
/// `uniform` returns 0.99, integer draws return their lower bound, and
/// `index` returns 0.
#[derive(Default)]
pub struct ScriptedRandom {
    floats: VecDeque<f64>,
    ints: VecDeque<i64>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_float(&mut self, value: f64) {
        self.floats.push_back(value);
    }

    pub fn queue_int(&mut self, value: i64) {
        self.ints.push_back(value);
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self) -> f64 {
        self.floats.pop_front().unwrap_or(0.99)
    }

    fn int_between(&mut self, lo: i64, hi: i64) -> i64 {
        self.ints.pop_front().unwrap_or(lo).clamp(lo, hi)
    }

    fn float_between(&mut self, lo: f64, hi: f64) -> f64 {
        self.floats.pop_front().unwrap_or(lo).clamp(lo, hi)
    }

    fn index(&mut self, len: usize) -> usize {
        let len = len.max(1);
        (self.ints.pop_front().unwrap_or(0) as usize).min(len - 1)
    }
}
