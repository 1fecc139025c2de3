//! Dice rolling, kept apart from the win logic.
//!
//! The session only needs "give me the next value"; where it comes from is
//! the `DiceRoller`'s business. `RandomDice` is the real die, `ScriptedDice`
//! replays a fixed sequence for tests and demos.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Number of faces on the die
pub const DIE_FACES: u8 = 6;

/// Source of die values in `1..=DIE_FACES`
pub trait DiceRoller {
    fn roll(&mut self) -> u8;
}

/// A fair six-sided die backed by a seedable RNG
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    /// Seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Same seed, same sequence of rolls
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomDice {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceRoller for RandomDice {
    fn roll(&mut self) -> u8 {
        self.rng.random_range(1..=DIE_FACES)
    }
}

/// Replays a fixed sequence of values, then cycles back to the start
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    values: VecDeque<u8>,
}

impl ScriptedDice {
    /// ## Panics
    /// If `values` is empty.
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        let values: VecDeque<u8> = values.into_iter().collect();
        assert!(!values.is_empty(), "ScriptedDice needs at least one value");
        Self { values }
    }
}

impl DiceRoller for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let value = self.values.pop_front().unwrap_or(1);
        self.values.push_back(value);
        value
    }
}
