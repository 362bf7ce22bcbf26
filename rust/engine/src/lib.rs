//! # tablestakes-engine: Texas Hold'em Engine Core
//!
//! A deterministic Texas Hold'em engine for 2 to 6 seats. Provides the card
//! and deck model, a 5-of-7 hand evaluator, and a betting state machine that
//! drives a hand from blinds to showdown while asking pluggable strategies for
//! decisions. Every deal is reproducible from a seed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - Hand ranking, tie-breaks, and the memoising evaluator
//! - [`deal`] - Fixed hole and board cards for reproducible replay
//! - [`game`] - Per-hand betting state machine
//! - [`engine`] - Hand drivers (`simulate_hand`, `simulate_hand_from_deal`)
//! - [`pot`] - Side-pot layering and payout distribution
//! - [`player`] - Seat state and player actions
//! - [`rules`] - Action validation and table-stakes normalisation
//! - [`strategy`] - The decision interface strategies implement
//! - [`config`] - Stakes and safety limits
//! - [`logger`] - Betting history records and JSONL hand logging
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use tablestakes_engine::cards::parse_cards;
//! use tablestakes_engine::hand::{evaluate, Category};
//!
//! let hole = parse_cards("Ah Kh").unwrap();
//! let board = parse_cards("Qh Jh Th 2c 3d").unwrap();
//!
//! let hand = evaluate(&hole, &board);
//! assert_eq!(hand.category, Category::RoyalFlush);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use tablestakes_engine::deck::Deck;
//!
//! let mut a = Deck::shuffled(42);
//! let mut b = Deck::shuffled(42);
//! assert_eq!(a.deal(52).unwrap(), b.deal(52).unwrap());
//! ```

pub mod cards;
pub mod config;
pub mod deal;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
pub mod strategy;
