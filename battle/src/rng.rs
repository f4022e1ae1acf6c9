//! Seedable random-source abstraction
//!
//! Every random draw the resolver makes (critical hits, paralysis skips,
//! counter-action selection) goes through [`BattleRng`], so tests can
//! supply deterministic sequences instead of system randomness.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random draws for battle resolution
pub trait BattleRng {
    /// Next uniform draw in [0, 1)
    fn next_f32(&mut self) -> f32;

    /// Uniform index in [0, len)
    ///
    /// `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        let idx = (self.next_f32() * len as f32) as usize;
        // next_f32 excludes 1.0, but guard against float rounding anyway
        idx.min(len - 1)
    }
}

/// Production random source backed by a small PRNG
#[derive(Debug, Clone)]
pub struct EntropyRng(SmallRng);

impl EntropyRng {
    /// Seed from system entropy
    pub fn new() -> Self {
        Self(SmallRng::from_entropy())
    }

    /// Seed deterministically, for replays
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleRng for EntropyRng {
    fn next_f32(&mut self) -> f32 {
        self.0.gen_range(0.0..1.0)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Replays an explicit sequence of draws; for tests
///
/// Panics if the script runs dry, which keeps a test honest about
/// exactly how many draws the scenario consumes.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    draws: Vec<f32>,
    next: usize,
}

impl ScriptedRng {
    /// Script the given sequence of draws
    pub fn new(draws: Vec<f32>) -> Self {
        Self { draws, next: 0 }
    }

    /// Number of draws consumed so far
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl BattleRng for ScriptedRng {
    fn next_f32(&mut self) -> f32 {
        let draw = self
            .draws
            .get(self.next)
            .copied()
            .unwrap_or_else(|| panic!("scripted rng exhausted after {} draws", self.next));
        self.next += 1;
        draw
    }
}
