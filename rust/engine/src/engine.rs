//! Hand drivers: run a [`GameState`] to showdown by consulting one strategy per seat.

use tracing::info;

use crate::config::TableConfig;
use crate::deal::Deal;
use crate::errors::GameError;
use crate::game::GameState;
use crate::strategy::Strategy;

/// Plays a complete hand dealt from a seeded deck.
///
/// `rng_seed = None` draws a fresh seed; pass a seed for reproducible hands.
///
/// # Examples
///
/// ```
/// use tablestakes_engine::config::TableConfig;
/// use tablestakes_engine::engine::simulate_hand;
/// use tablestakes_engine::player::PlayerAction;
/// use tablestakes_engine::pot::determine_payouts;
/// use tablestakes_engine::strategy::{Observation, Strategy};
///
/// let mut seats: Vec<Box<dyn Strategy>> = vec![
///     Box::new(|_: &Observation| PlayerAction::Call),
///     Box::new(|_: &Observation| PlayerAction::Call),
/// ];
/// let state = simulate_hand(2, &TableConfig::default(), 0, &[100, 100], &mut seats, Some(7))
///     .expect("valid hand");
/// assert!(state.is_hand_over());
/// let paid: f64 = determine_payouts(&state).values().sum();
/// assert_eq!(paid, f64::from(state.pot()));
/// ```
pub fn simulate_hand(
    num_players: usize,
    config: &TableConfig,
    button_position: usize,
    energies: &[u32],
    strategies: &mut [Box<dyn Strategy>],
    rng_seed: Option<u64>,
) -> Result<GameState, GameError> {
    if energies.len() != num_players {
        return Err(GameError::EnergyCountMismatch {
            expected: num_players,
            actual: energies.len(),
        });
    }
    check_strategies(num_players, strategies)?;
    let seed = rng_seed.unwrap_or_else(rand::random);
    let mut state = GameState::new(*config, energies, button_position, seed)?;
    play_hand(&mut state, strategies)?;
    Ok(state)
}

/// Plays a complete hand on predetermined cards. The deal is validated before
/// any chips move.
pub fn simulate_hand_from_deal(
    deal: &Deal,
    config: &TableConfig,
    energies: &[u32],
    strategies: &mut [Box<dyn Strategy>],
) -> Result<GameState, GameError> {
    deal.validate()?;
    check_strategies(deal.num_players(), strategies)?;
    let mut state = GameState::from_deal(*config, energies, deal)?;
    play_hand(&mut state, strategies)?;
    Ok(state)
}

fn check_strategies(expected: usize, strategies: &[Box<dyn Strategy>]) -> Result<(), GameError> {
    if strategies.len() != expected {
        return Err(GameError::StrategyCountMismatch {
            expected,
            actual: strategies.len(),
        });
    }
    Ok(())
}

/// Drives `state` to showdown. Each pending seat's strategy is asked exactly
/// once per action opportunity; completed rounds are advanced and remaining
/// community cards are dealt even when nobody can act.
pub fn play_hand(
    state: &mut GameState,
    strategies: &mut [Box<dyn Strategy>],
) -> Result<(), GameError> {
    check_strategies(state.num_players(), strategies)?;
    while !state.is_hand_over() {
        match state.current_player() {
            Some(_) if state.action_limit_reached() => state.force_advance()?,
            Some(seat) => {
                let observation = state.observation(seat);
                let action = strategies[seat].decide(&observation);
                state.apply_action(seat, action)?;
            }
            None => state.advance_round()?,
        }
    }
    info!(
        pot = state.pot(),
        board = ?state.community_cards(),
        actions = state.betting_history().len(),
        "hand complete"
    );
    Ok(())
}
