//! Strategy-versus-benchmark matches scored in bb/100.

use tablestakes_ai::create_ai_seeded;
use tablestakes_engine::deal::MAX_PLAYERS;
use tablestakes_engine::strategy::Strategy;
use tracing::{debug, info};

use crate::cancel::CancelToken;
use crate::config::BenchmarkConfig;
use crate::duplicate::DuplicateDealHarness;
use crate::error::BenchError;
use crate::stats::MatchSummary;

/// Heads-up duplicate match of `candidate` against the strategy registered
/// as `opponent_id`.
///
/// Every deal is played twice with seats swapped. The run covers
/// `num_duplicate_seed_sets * hands_per_match` deals, so twice that many
/// hands. `cancel` is checked before each hand; only completed deals are
/// scored.
pub fn evaluate_strategy_vs_benchmark(
    candidate: Box<dyn Strategy>,
    opponent_id: &str,
    config: &BenchmarkConfig,
    cancel: &CancelToken,
) -> Result<MatchSummary, BenchError> {
    evaluate_multiway(candidate, &[opponent_id], config, cancel)
}

/// Duplicate match of `candidate` against one or more benchmark opponents.
///
/// Each deal is replayed once per seat with every participant rotated
/// through every seat; only the candidate's results are scored. Every
/// participant is reseeded from the deal's seed before each replay, so
/// seeded random opponents play the same way in every seat.
pub fn evaluate_multiway(
    candidate: Box<dyn Strategy>,
    opponent_ids: &[&str],
    config: &BenchmarkConfig,
    cancel: &CancelToken,
) -> Result<MatchSummary, BenchError> {
    config.validate()?;
    let players = opponent_ids.len() + 1;
    if !(2..=MAX_PLAYERS).contains(&players) {
        return Err(BenchError::InvalidConfig(format!(
            "{} opponents given; a table seats 2-{} players",
            opponent_ids.len(),
            MAX_PLAYERS
        )));
    }

    let mut participants: Vec<Box<dyn Strategy>> = Vec::with_capacity(players);
    participants.push(candidate);
    for (i, id) in opponent_ids.iter().enumerate() {
        participants.push(create_ai_seeded(id, config.base_seed.wrapping_add(i as u64))?);
    }

    let harness = DuplicateDealHarness::new(config.table(), config.starting_stack);
    let deals = config.num_duplicate_seed_sets as usize * config.hands_per_match as usize;
    let mut unit_nets = Vec::with_capacity(deals);
    info!(
        candidate = participants[0].name(),
        opponents = ?opponent_ids,
        deals,
        "benchmark started"
    );

    for set in 0..config.num_duplicate_seed_sets {
        for index in 0..config.hands_per_match {
            if cancel.is_cancelled() {
                let hands_played = unit_nets.len() * players;
                info!(hands_played, "benchmark cancelled");
                return Err(BenchError::Cancelled { hands_played });
            }
            let seed = config.deal_seed(set, index);
            let deal = harness.deal_for(seed, players)?;
            let totals = match harness.run_duplicate(&deal, &mut participants, seed, cancel) {
                Ok(totals) => totals,
                Err(BenchError::Cancelled { hands_played: partial }) => {
                    let hands_played = unit_nets.len() * players + partial;
                    info!(hands_played, "benchmark cancelled");
                    return Err(BenchError::Cancelled { hands_played });
                }
                Err(e) => return Err(e),
            };
            unit_nets.push(totals[0]);
        }
        debug!(set, units = unit_nets.len(), "seed set complete");
    }

    let summary = MatchSummary::from_units(&unit_nets, players, config.big_blind);
    info!(
        bb_per_100 = summary.bb_per_100,
        ci95 = summary.ci95,
        hands = summary.hands_played,
        "benchmark complete"
    );
    Ok(summary)
}
