use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck exhausted: requested {requested} card(s), {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Invalid player count: {0} (supported: 2-6)")]
    InvalidPlayerCount(usize),
    #[error("Invalid blinds: small {small_blind}, big {big_blind}")]
    InvalidBlinds { small_blind: u32, big_blind: u32 },
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
    #[error("Expected {expected} starting energies, got {actual}")]
    EnergyCountMismatch { expected: usize, actual: usize },
    #[error("Expected {expected} strategies, got {actual}")]
    StrategyCountMismatch { expected: usize, actual: usize },
    #[error("Invalid deal: {0}")]
    InvalidDeal(#[from] DealError),
    #[error("Invalid bet amount: {amount}, minimum: {minimum}")]
    InvalidBetAmount { amount: u32, minimum: u32 },
    #[error("Insufficient chips for action")]
    InsufficientChips,
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("No action pending; the betting round is complete")]
    RoundComplete,
    #[error("Betting round is not complete (pending seat: {pending:?})")]
    RoundIncomplete { pending: Option<usize> },
    #[error("Player already folded")]
    PlayerAlreadyFolded,
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
}

/// Reasons a [`crate::deal::Deal`] is rejected before any simulation starts.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DealError {
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("seat {seat} has {count} hole card(s), expected 2")]
    WrongHoleCardCount { seat: usize, count: usize },
    #[error("expected 5 community cards, got {0}")]
    WrongCommunityCount(usize),
    #[error("button position {button} out of range for {players} players")]
    ButtonOutOfRange { button: usize, players: usize },
    #[error("deal has {0} seats (supported: 2-6)")]
    InvalidPlayerCount(usize),
}
