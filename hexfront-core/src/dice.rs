//! Random sources for combat rolls

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform rolls in `[0, 1)`
pub trait RandomSource {
    fn roll(&mut self) -> f64;
}

/// ChaCha-backed rolls, reproducible when seeded
#[derive(Clone, Debug)]
pub struct SeededRolls {
    rng: ChaCha8Rng,
}

impl SeededRolls {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Seeded when a seed is given, otherwise from OS entropy
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for SeededRolls {
    fn roll(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed sequence of rolls, wrapping around at the end.
/// An empty sequence always rolls 0.0.
#[derive(Clone, Debug, Default)]
pub struct FixedRolls {
    rolls: Vec<f64>,
    next: usize,
}

impl FixedRolls {
    pub fn new(rolls: Vec<f64>) -> Self {
        Self { rolls, next: 0 }
    }

    /// The same roll every time
    pub fn always(roll: f64) -> Self {
        Self::new(vec![roll])
    }
}

impl RandomSource for FixedRolls {
    fn roll(&mut self) -> f64 {
        if self.rolls.is_empty() {
            return 0.0;
        }
        let value = self.rolls[self.next % self.rolls.len()];
        self.next = (self.next + 1) % self.rolls.len();
        value
    }
}
