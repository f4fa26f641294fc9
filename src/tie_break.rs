//! Policies that order candidates sharing the same score.
//!
//! The planner hands every inning's candidates to a [`TieBreak`] before a stable sort by
//! score, so the policy alone decides who wins a tie. Randomness is always injected
//! through a policy value, never drawn from a global generator.

use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::planner::Candidate;

/// Arranges candidates before they are ranked by score.
///
/// Implement this trait to control how equal-score candidates are ordered. The same
/// policy state fed the same inputs must produce the same arrangement.
pub trait TieBreak {
    /// Reorders `candidates` in place. Only the relative order of equal scores matters.
    fn arrange(&mut self, candidates: &mut [Candidate]);
}

/// Shuffles candidates with an injected random generator.
///
/// Two games generated from the same seed are identical.
#[derive(Debug, Clone)]
pub struct ShuffleTieBreak<R: Rng = ChaCha8Rng> {
    rng: R,
}

impl ShuffleTieBreak<ChaCha8Rng> {
    /// A reproducible shuffle.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// A shuffle seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> ShuffleTieBreak<R> {
    /// Wraps any random generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TieBreak for ShuffleTieBreak<R> {
    fn arrange(&mut self, candidates: &mut [Candidate]) {
        candidates.shuffle(&mut self.rng);
    }
}

/// Breaks ties by player index, then by catalogue position order.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedTieBreak;

impl TieBreak for OrderedTieBreak {
    fn arrange(&mut self, candidates: &mut [Candidate]) {
        candidates.sort_by_key(|candidate| (candidate.player, candidate.position));
    }
}
