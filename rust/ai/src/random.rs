//! Uniformly random opponent with an injectable seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tablestakes_engine::player::PlayerAction;
use tablestakes_engine::strategy::{Observation, Strategy};

/// Picks among legal-looking actions at random.
///
/// Two instances built with the same seed make the same decisions when shown
/// the same observations, so benchmarks against it stay reproducible.
#[derive(Debug, Clone)]
pub struct RandomAI {
    rng: ChaCha20Rng,
}

impl RandomAI {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Seeded from the thread-local generator; not reproducible.
    pub fn new() -> Self {
        Self {
            rng: ChaCha20Rng::from_rng(&mut rand::rng()),
        }
    }
}

impl Default for RandomAI {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomAI {
    fn decide(&mut self, obs: &Observation) -> PlayerAction {
        let roll = self.rng.random_range(0..100u32);
        if obs.to_call == 0 {
            return match roll {
                0..70 => PlayerAction::Check,
                70..95 => PlayerAction::Bet(obs.min_raise * self.rng.random_range(1..=3)),
                _ => PlayerAction::AllIn,
            };
        }
        match roll {
            0..30 => PlayerAction::Fold,
            30..80 => PlayerAction::Call,
            80..97 => PlayerAction::Raise(obs.min_raise * self.rng.random_range(1..=3)),
            _ => PlayerAction::AllIn,
        }
    }

    fn name(&self) -> &str {
        "RandomAI"
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha20Rng::seed_from_u64(seed);
    }
}
