//! The decision boundary between the engine and pluggable strategies.
//!
//! The engine hands a strategy an [`Observation`] containing only what the
//! acting seat may legally see and applies whatever [`PlayerAction`] comes
//! back (after table-stakes normalisation). It never inspects strategy state.

use crate::cards::Card;
use crate::logger::{ActionRecord, Street};
use crate::player::{PlayerAction, Position};

/// Public view of one seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicSeat {
    pub seat: usize,
    pub energy: u32,
    pub current_bet: u32,
    pub total_bet: u32,
    pub folded: bool,
    pub all_in: bool,
}

/// Everything the acting seat may see: its own hole cards and stack plus
/// public table state. Opponents' hole cards are never included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub seat: usize,
    pub num_players: usize,
    pub position: Position,
    pub button: usize,
    pub hole_cards: [Card; 2],
    pub energy: u32,
    /// Chips this seat has already committed on the current street
    pub current_bet: u32,
    /// Chips needed to match the highest bet on this street
    pub to_call: u32,
    /// Highest street bet at the table
    pub max_bet: u32,
    pub min_raise: u32,
    /// False when a short all-in did not reopen the betting for this seat
    pub can_raise: bool,
    pub pot: u32,
    pub big_blind: u32,
    pub street: Street,
    pub community_cards: Vec<Card>,
    pub seats: Vec<PublicSeat>,
    pub history: Vec<ActionRecord>,
}

impl Observation {
    /// Seats other than the observer that have not folded.
    pub fn live_opponents(&self) -> usize {
        self.seats
            .iter()
            .filter(|s| s.seat != self.seat && !s.folded)
            .count()
    }
}

/// A decision policy. Implementations own their parameters, tables and any
/// randomness; the engine calls `decide` exactly once per action opportunity.
pub trait Strategy: Send {
    fn decide(&mut self, observation: &Observation) -> PlayerAction;

    fn name(&self) -> &str {
        "anonymous"
    }

    /// Restarts any internal randomness from `seed`. Called by replay
    /// harnesses before every replay of a deal; deterministic strategies
    /// ignore it.
    fn reseed(&mut self, _seed: u64) {}
}

impl<F> Strategy for F
where
    F: FnMut(&Observation) -> PlayerAction + Send,
{
    fn decide(&mut self, observation: &Observation) -> PlayerAction {
        self(observation)
    }
}
