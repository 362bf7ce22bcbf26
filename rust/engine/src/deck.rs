use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Ordered 52-card deck consumed from the front.
///
/// The permutation is a pure function of the seed, so two decks built with the
/// same seed deal identical sequences. A card is never dealt twice between
/// shuffles.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Seeded deck, already shuffled.
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::new_with_seed(seed);
        deck.shuffle();
        deck
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    /// Removes and returns `n` cards from the front. Nothing is consumed on failure.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(GameError::DeckExhausted {
                requested: n,
                remaining,
            });
        }
        let out = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(out)
    }

    pub fn burn_card(&mut self) -> Result<(), GameError> {
        self.deal(1).map(|_| ())
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Cards not yet dealt, in dealing order.
    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.position.min(self.cards.len())..]
    }
}
