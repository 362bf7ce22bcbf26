//! Fixed card assignments for reproducible replay.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::{DealError, GameError};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

/// Hole cards for every seat, the five community cards, and the button.
///
/// A `Deal` can only be obtained through a validating constructor, so every
/// instance holds distinct cards and exactly two hole cards per seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    hole_cards: Vec<[Card; 2]>,
    community: [Card; 5],
    button: usize,
}

impl Deal {
    /// Builds a deal from explicit cards, rejecting duplicates, wrong hole-card
    /// counts and an out-of-range button.
    pub fn new(
        hole_cards: Vec<Vec<Card>>,
        community: Vec<Card>,
        button: usize,
    ) -> Result<Self, DealError> {
        let players = hole_cards.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            return Err(DealError::InvalidPlayerCount(players));
        }
        let mut holes = Vec::with_capacity(players);
        for (seat, cards) in hole_cards.iter().enumerate() {
            match cards.as_slice() {
                [a, b] => holes.push([*a, *b]),
                other => {
                    return Err(DealError::WrongHoleCardCount {
                        seat,
                        count: other.len(),
                    })
                }
            }
        }
        let community: [Card; 5] = community
            .as_slice()
            .try_into()
            .map_err(|_| DealError::WrongCommunityCount(community.len()))?;
        let deal = Self {
            hole_cards: holes,
            community,
            button,
        };
        deal.validate()?;
        Ok(deal)
    }

    /// Canonical deal for `seed`: shuffle a seeded deck, deal two rounds of hole
    /// cards starting left of the button, then burn-and-turn flop, turn and river.
    pub fn from_seed(seed: u64, num_players: usize, button: usize) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::InvalidPlayerCount(num_players));
        }
        if button >= num_players {
            return Err(DealError::ButtonOutOfRange {
                button,
                players: num_players,
            }
            .into());
        }
        let mut deck = Deck::shuffled(seed);
        let mut first = vec![None; num_players];
        let mut holes = Vec::with_capacity(num_players);
        for pass in 0..2 {
            for i in 1..=num_players {
                let seat = (button + i) % num_players;
                let card = deck.deal(1)?[0];
                if pass == 0 {
                    first[seat] = Some(card);
                } else if let Some(a) = first[seat] {
                    holes.push((seat, [a, card]));
                }
            }
        }
        holes.sort_by_key(|(seat, _)| *seat);

        let mut board = Vec::with_capacity(5);
        for n in [3, 1, 1] {
            deck.burn_card()?;
            board.extend(deck.deal(n)?);
        }
        let community: [Card; 5] = board
            .as_slice()
            .try_into()
            .map_err(|_| DealError::WrongCommunityCount(board.len()))?;

        let deal = Self {
            hole_cards: holes.into_iter().map(|(_, h)| h).collect(),
            community,
            button,
        };
        deal.validate()?;
        Ok(deal)
    }

    pub fn validate(&self) -> Result<(), DealError> {
        let players = self.hole_cards.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            return Err(DealError::InvalidPlayerCount(players));
        }
        if self.button >= players {
            return Err(DealError::ButtonOutOfRange {
                button: self.button,
                players,
            });
        }
        let mut seen = HashSet::with_capacity(players * 2 + 5);
        for &card in self.hole_cards.iter().flatten().chain(self.community.iter()) {
            if !seen.insert(card) {
                return Err(DealError::DuplicateCard(card));
            }
        }
        Ok(())
    }

    pub fn num_players(&self) -> usize {
        self.hole_cards.len()
    }

    pub fn hole_cards(&self) -> &[[Card; 2]] {
        &self.hole_cards
    }

    pub fn community(&self) -> &[Card; 5] {
        &self.community
    }

    pub fn button(&self) -> usize {
        self.button
    }
}
