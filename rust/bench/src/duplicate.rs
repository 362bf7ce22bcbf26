//! Duplicate dealing: the same cards replayed under rotated seating.
//!
//! Cards stay with seats; participants move. Over a full rotation every
//! participant holds every seat's cards from every position exactly once,
//! which cancels most of the card and position luck in a comparison.

use tablestakes_engine::config::TableConfig;
use tablestakes_engine::deal::Deal;
use tablestakes_engine::engine::simulate_hand_from_deal;
use tablestakes_engine::errors::GameError;
use tablestakes_engine::pot::determine_payouts;
use tablestakes_engine::strategy::Strategy;
use tracing::debug;

use crate::cancel::CancelToken;
use crate::error::BenchError;

/// Replays canonical seeded deals for a fixed table.
#[derive(Debug, Clone, Copy)]
pub struct DuplicateDealHarness {
    table: TableConfig,
    starting_stack: u32,
}

impl DuplicateDealHarness {
    pub fn new(table: TableConfig, starting_stack: u32) -> Self {
        Self {
            table,
            starting_stack,
        }
    }

    pub fn table(&self) -> &TableConfig {
        &self.table
    }

    /// The canonical deal for `seed`. The button moves with the seed so
    /// consecutive deals do not all start from the same seat.
    pub fn deal_for(&self, seed: u64, num_players: usize) -> Result<Deal, BenchError> {
        let button = (seed % num_players.max(1) as u64) as usize;
        Ok(Deal::from_seed(seed, num_players, button)?)
    }

    /// Plays `deal` once per seat, rotating participants by one seat between
    /// replays. Returns each participant's net chips summed over all replays,
    /// indexed like `participants`.
    ///
    /// `participants` is left in its original order on success and on error.
    pub fn run_rotation(
        &self,
        deal: &Deal,
        participants: &mut [Box<dyn Strategy>],
    ) -> Result<Vec<f64>, BenchError> {
        self.rotate(deal, participants, None, None)
    }

    /// [`run_rotation`](Self::run_rotation) for benchmark loops. Before each
    /// replay participant `k` is reseeded with `seed + k`, so a randomised
    /// strategy draws the same stream wherever it sits. `cancel` is checked
    /// before every replay; a cancelled rotation reports the replays it
    /// finished as `hands_played` and its partial totals are discarded.
    pub fn run_duplicate(
        &self,
        deal: &Deal,
        participants: &mut [Box<dyn Strategy>],
        seed: u64,
        cancel: &CancelToken,
    ) -> Result<Vec<f64>, BenchError> {
        self.rotate(deal, participants, Some(seed), Some(cancel))
    }

    fn rotate(
        &self,
        deal: &Deal,
        participants: &mut [Box<dyn Strategy>],
        seed: Option<u64>,
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<f64>, BenchError> {
        deal.validate().map_err(GameError::from)?;
        let n = deal.num_players();
        if participants.len() != n {
            return Err(GameError::StrategyCountMismatch {
                expected: n,
                actual: participants.len(),
            }
            .into());
        }
        let energies = vec![self.starting_stack; n];
        let mut totals = vec![0.0; n];

        for shift in 0..n {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                return Err(BenchError::Cancelled {
                    hands_played: shift,
                });
            }
            if let Some(seed) = seed {
                for (k, p) in participants.iter_mut().enumerate() {
                    p.reseed(seed.wrapping_add(k as u64));
                }
            }
            // seat s holds participant (s - shift) mod n
            participants.rotate_right(shift);
            let played = simulate_hand_from_deal(deal, &self.table, &energies, participants);
            participants.rotate_left(shift);
            let state = played?;

            let payouts = determine_payouts(&state);
            for (seat, net) in state.net_results(&payouts).into_iter().enumerate() {
                totals[(seat + n - shift) % n] += net;
            }
            debug!(shift, pot = state.pot(), "rotation replay complete");
        }
        Ok(totals)
    }

    /// Heads-up variant: seeds one deal and plays it with `pair[0]` (the
    /// candidate) in seat 0, then in seat 1. Both strategies are reseeded
    /// from `seed` before each replay. Returns the summed nets of the
    /// candidate and the opponent.
    pub fn run_seat_swap(
        &self,
        seed: u64,
        pair: &mut [Box<dyn Strategy>; 2],
    ) -> Result<(f64, f64), BenchError> {
        let deal = self.deal_for(seed, 2)?;
        let totals = self.run_duplicate(&deal, pair, seed, &CancelToken::new())?;
        Ok((totals[0], totals[1]))
    }
}
