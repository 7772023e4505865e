//! Casino game engines.
//!
//! This module contains the game logic for all games:
//! - Blackjack
//! - Video Poker
//! - Slots
//! - Roulette
//! - Dig Trash
//!
//! Engines never touch persistence or presentation: they consume a bet
//! amount and a [`GameRng`] and return structured rounds for the floor
//! to settle and the command layer to render.

pub mod blackjack;
pub mod cards;
pub mod dig_trash;
pub mod roulette;
pub mod slots;
pub mod video_poker;

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source backing every game.
///
/// Wraps a seedable ChaCha stream so tests can pin the exact sequence
/// of deals and spins while production play seeds from OS entropy.
#[derive(Clone, Debug)]
pub struct GameRng(ChaCha8Rng);

impl GameRng {
    /// RNG seeded from OS entropy, for live play.
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }

    /// Deterministic RNG for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    /// Uniform roulette wheel number in `0..=36`.
    pub fn wheel_number(&mut self) -> u8 {
        self.0.gen_range(0..=36)
    }

    /// Uniform shuffle in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }

    /// Sample an index from a weighted distribution.
    pub fn pick(&mut self, dist: &WeightedIndex<f64>) -> usize {
        dist.sample(&mut self.0)
    }

    /// True with probability `pct` percent.
    pub fn percent(&mut self, pct: u32) -> bool {
        self.0.gen_range(0..100) < pct
    }

    /// Uniform amount in `0..max`. `max` must be non-zero.
    pub fn amount_below(&mut self, max: u64) -> u64 {
        self.0.gen_range(0..max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let mut a = GameRng::seeded(7);
        let mut b = GameRng::seeded(7);
        for _ in 0..100 {
            assert_eq!(a.index(52), b.index(52));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = GameRng::seeded(1);
        let mut b = GameRng::seeded(2);
        let seq_a: Vec<usize> = (0..10).map(|_| a.index(1_000)).collect();
        let seq_b: Vec<usize> = (0..10).map(|_| b.index(1_000)).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn test_wheel_number_in_range() {
        let mut rng = GameRng::seeded(3);
        for _ in 0..1_000 {
            assert!(rng.wheel_number() <= 36);
        }
    }

    #[test]
    fn test_percent_extremes() {
        let mut rng = GameRng::seeded(4);
        for _ in 0..100 {
            assert!(!rng.percent(0));
            assert!(rng.percent(100));
        }
    }
}
