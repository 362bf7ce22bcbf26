//! Reference rule-based strategy.
//!
//! Rates the holding on a 0-10 scale (a preflop table, then the evaluated
//! category once the flop is out) and maps that rating to an action through
//! a small set of thresholds and pot-odds cutoffs.

use std::collections::BTreeMap;

use tablestakes_engine::cards::Card;
use tablestakes_engine::hand::{evaluate, Category};
use tablestakes_engine::logger::Street;
use tablestakes_engine::player::PlayerAction;
use tablestakes_engine::strategy::{Observation, Strategy};

use crate::errors::ParamError;

/// Tunable cutoffs for [`BaselineAI`].
///
/// Ratings at or above `premium` raise, at or above `strong` always call,
/// and the `medium` and `marginal` bands call only at acceptable pot odds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineParams {
    pub premium: u8,
    pub strong: u8,
    pub medium: u8,
    pub marginal: u8,
    /// Minimum pot odds (pot / (pot + call)) for a medium hand to call
    pub medium_pot_odds: f64,
    /// Minimum pot odds for a marginal hand to call
    pub marginal_pot_odds: f64,
    /// Raise size as a fraction of the pot
    pub raise_fraction: f64,
    /// Value bet size as a fraction of the pot
    pub bet_fraction: f64,
}

const THRESHOLD_KEYS: [&str; 4] = [
    "premium_threshold",
    "strong_threshold",
    "medium_threshold",
    "marginal_threshold",
];

impl Default for BaselineParams {
    fn default() -> Self {
        Self {
            premium: 9,
            strong: 7,
            medium: 5,
            marginal: 3,
            medium_pot_odds: 0.3,
            marginal_pot_odds: 0.4,
            raise_fraction: 0.5,
            bet_fraction: 2.0 / 3.0,
        }
    }
}

impl BaselineParams {
    /// Folds more, needs better odds to continue.
    pub fn tight() -> Self {
        Self {
            premium: 10,
            strong: 8,
            medium: 6,
            marginal: 5,
            medium_pot_odds: 0.6,
            marginal_pot_odds: 0.75,
            ..Self::default()
        }
    }

    /// Plays more hands and sizes up.
    pub fn loose() -> Self {
        Self {
            premium: 7,
            strong: 5,
            medium: 3,
            marginal: 2,
            medium_pot_odds: 0.2,
            marginal_pot_odds: 0.3,
            raise_fraction: 0.75,
            bet_fraction: 0.75,
        }
    }

    /// Flat key to value form for persistence.
    pub fn to_params(&self) -> BTreeMap<String, f64> {
        let thresholds = [self.premium, self.strong, self.medium, self.marginal];
        let mut map: BTreeMap<String, f64> = THRESHOLD_KEYS
            .iter()
            .zip(thresholds)
            .map(|(k, v)| (k.to_string(), f64::from(v)))
            .collect();
        map.insert("medium_pot_odds".into(), self.medium_pot_odds);
        map.insert("marginal_pot_odds".into(), self.marginal_pot_odds);
        map.insert("raise_fraction".into(), self.raise_fraction);
        map.insert("bet_fraction".into(), self.bet_fraction);
        map
    }

    /// Inverse of [`BaselineParams::to_params`]. Unknown keys are ignored.
    pub fn from_params(params: &BTreeMap<String, f64>) -> Result<Self, ParamError> {
        let get = |key: &str, max: f64| -> Result<f64, ParamError> {
            let value = *params
                .get(key)
                .ok_or_else(|| ParamError::Missing(key.to_string()))?;
            if !value.is_finite() || !(0.0..=max).contains(&value) {
                return Err(ParamError::OutOfRange {
                    key: key.to_string(),
                    value,
                });
            }
            Ok(value)
        };
        let threshold = |key: &str| -> Result<u8, ParamError> {
            let value = get(key, 10.0)?;
            if value.fract() != 0.0 {
                return Err(ParamError::OutOfRange {
                    key: key.to_string(),
                    value,
                });
            }
            Ok(value as u8)
        };

        let parsed = Self {
            premium: threshold(THRESHOLD_KEYS[0])?,
            strong: threshold(THRESHOLD_KEYS[1])?,
            medium: threshold(THRESHOLD_KEYS[2])?,
            marginal: threshold(THRESHOLD_KEYS[3])?,
            medium_pot_odds: get("medium_pot_odds", 1.0)?,
            marginal_pot_odds: get("marginal_pot_odds", 1.0)?,
            raise_fraction: get("raise_fraction", 4.0)?,
            bet_fraction: get("bet_fraction", 4.0)?,
        };
        if !(parsed.marginal <= parsed.medium
            && parsed.medium <= parsed.strong
            && parsed.strong <= parsed.premium)
        {
            return Err(ParamError::UnorderedThresholds);
        }
        Ok(parsed)
    }
}

/// Deterministic threshold strategy used as the benchmark reference.
///
/// **Preflop:** pairs and broadway combinations rate highest, suited
/// connectors and weak aces in the middle, offsuit trash at 2.
///
/// **Postflop:** the rating follows the made-hand category, with one point
/// added for a queen-or-better top card.
///
/// # Example
///
/// ```rust
/// use tablestakes_ai::baseline::BaselineAI;
/// use tablestakes_engine::config::TableConfig;
/// use tablestakes_engine::game::GameState;
/// use tablestakes_engine::strategy::Strategy;
///
/// let state = GameState::new(TableConfig::default(), &[1000, 1000], 0, 42).unwrap();
/// let seat = state.current_player().unwrap();
///
/// let mut ai = BaselineAI::new();
/// let _action = ai.decide(&state.observation(seat));
/// assert_eq!(ai.name(), "BaselineAI");
/// ```
#[derive(Debug, Clone)]
pub struct BaselineAI {
    params: BaselineParams,
    name: String,
}

impl BaselineAI {
    pub fn new() -> Self {
        Self::with_params(BaselineParams::default())
    }

    pub fn with_params(params: BaselineParams) -> Self {
        Self {
            params,
            name: "BaselineAI".to_string(),
        }
    }

    /// Overrides the reported name, e.g. to tell presets apart in results.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn params(&self) -> &BaselineParams {
        &self.params
    }

    /// Preflop rating on a 0-10 scale.
    ///
    /// - 9-10: AA-JJ, AKs
    /// - 7-8: TT-99, AK, AQ, KQs
    /// - 5-6: 88-77, AJ, KQ, strong suited connectors
    /// - 3-4: small pairs, weak aces, broadway offsuit
    /// - 0-2: everything else
    pub(crate) fn preflop_strength(hole_cards: [Card; 2]) -> u8 {
        let [c1, c2] = hole_cards;
        let r1 = c1.rank.value();
        let r2 = c2.rank.value();
        let (high, low) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
        let suited = c1.suit == c2.suit;
        let pick = |s: u8, o: u8| if suited { s } else { o };

        if r1 == r2 {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (14, 13) => pick(10, 8),
            (14, 12) => pick(8, 7),
            (14, 11) => pick(7, 6),
            (14, 10) => pick(6, 5),
            (14, _) => pick(5, 4),
            (13, 12) => pick(7, 6),
            (13, 11) => pick(6, 5),
            (13, 10) => pick(5, 4),
            (12, 11) => pick(6, 5),
            (12, 10) => pick(5, 4),
            _ if suited && high - low <= 2 => {
                if high >= 9 {
                    5
                } else {
                    4
                }
            }
            // broadway cards
            _ if high >= 11 && low >= 9 => 4,
            _ => 2,
        }
    }

    /// Postflop rating, or `None` before the flop.
    pub(crate) fn postflop_strength(hole_cards: [Card; 2], board: &[Card]) -> Option<u8> {
        if board.len() < 3 {
            return None;
        }
        let hand = evaluate(&hole_cards, board);
        let base = match hand.category {
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush | Category::RoyalFlush => 10,
        };
        let top = hand
            .kickers
            .first()
            .or_else(|| hand.primary_ranks.first())
            .copied()
            .unwrap_or(0);
        let boost = u8::from(top >= 12);
        Some((base + boost).min(10))
    }

    /// pot / (pot + call); 1.0 when the action is free.
    pub(crate) fn pot_odds(pot: u32, to_call: u32) -> f64 {
        if to_call == 0 {
            return 1.0;
        }
        f64::from(pot) / (f64::from(pot) + f64::from(to_call))
    }

    fn sized(&self, pot: u32, fraction: f64, min_raise: u32, cap: u32) -> u32 {
        ((f64::from(pot) * fraction) as u32).max(min_raise).min(cap)
    }

    fn decide_action(&self, strength: u8, obs: &Observation) -> PlayerAction {
        let p = &self.params;
        let (to_call, min_raise, stack, pot) = (obs.to_call, obs.min_raise, obs.energy, obs.pot);

        if to_call == 0 {
            return if strength >= p.strong && stack >= min_raise {
                let fraction = if strength >= p.premium {
                    p.bet_fraction
                } else {
                    p.raise_fraction
                };
                PlayerAction::Bet(self.sized(pot, fraction, min_raise, stack))
            } else {
                PlayerAction::Check
            };
        }

        if to_call > stack {
            return if strength >= p.strong {
                PlayerAction::AllIn
            } else {
                PlayerAction::Fold
            };
        }

        let odds = Self::pot_odds(pot, to_call);
        if strength >= p.premium {
            if obs.can_raise && stack >= to_call + min_raise {
                let amount = self.sized(pot, p.raise_fraction, min_raise, stack - to_call);
                return PlayerAction::Raise(amount);
            }
            PlayerAction::Call
        } else if strength >= p.strong {
            PlayerAction::Call
        } else if strength >= p.medium {
            if odds >= p.medium_pot_odds || to_call <= pot / 4 {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            }
        } else if strength >= p.marginal {
            if odds >= p.marginal_pot_odds || to_call <= pot / 6 {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            }
        } else {
            PlayerAction::Fold
        }
    }
}

impl Default for BaselineAI {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for BaselineAI {
    fn decide(&mut self, obs: &Observation) -> PlayerAction {
        let strength = match obs.street {
            Street::Preflop => Self::preflop_strength(obs.hole_cards),
            _ => Self::postflop_strength(obs.hole_cards, &obs.community_cards)
                .unwrap_or_else(|| Self::preflop_strength(obs.hole_cards)),
        };
        self.decide_action(strength, obs)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablestakes_engine::cards::parse_cards;

    fn hole(s: &str) -> [Card; 2] {
        let c = parse_cards(s).unwrap();
        [c[0], c[1]]
    }

    #[test]
    fn test_baseline_ai_creation() {
        let ai = BaselineAI::new();
        assert_eq!(ai.name(), "BaselineAI");
        assert_eq!(ai.params(), &BaselineParams::default());
    }

    #[test]
    fn test_preflop_strength_premium_pairs() {
        assert_eq!(BaselineAI::preflop_strength(hole("Ah As")), 10);
        assert_eq!(BaselineAI::preflop_strength(hole("Kh Ks")), 10);
        assert_eq!(BaselineAI::preflop_strength(hole("2h 2s")), 4);
    }

    #[test]
    fn test_preflop_strength_ace_king() {
        assert_eq!(BaselineAI::preflop_strength(hole("Ah Kh")), 10);
        assert_eq!(BaselineAI::preflop_strength(hole("Ah Ks")), 8);
    }

    #[test]
    fn test_preflop_strength_weak_hands() {
        assert!(BaselineAI::preflop_strength(hole("7h 2s")) <= 3);
    }

    #[test]
    fn test_suited_connectors() {
        let strength = BaselineAI::preflop_strength(hole("9h 8h"));
        assert!((4..=6).contains(&strength));
    }

    #[test]
    fn test_pot_odds_calculation() {
        assert!((BaselineAI::pot_odds(100, 50) - 0.667).abs() < 0.01);
        assert!((BaselineAI::pot_odds(200, 100) - 0.667).abs() < 0.01);
        assert_eq!(BaselineAI::pot_odds(100, 0), 1.0);
    }

    #[test]
    fn test_postflop_strength_full_board() {
        let board = parse_cards("Ad Kc Qh Js Td").unwrap();
        let strength = BaselineAI::postflop_strength(hole("Ah As"), &board).unwrap();
        // broadway straight beats the trips
        assert!(strength >= 7);
        assert_eq!(BaselineAI::postflop_strength(hole("Ah As"), &[]), None);
    }

    #[test]
    fn test_postflop_strength_on_flop_only() {
        let board = parse_cards("7d 7c 2h").unwrap();
        let strength = BaselineAI::postflop_strength(hole("7h 7s"), &board).unwrap();
        assert_eq!(strength, 10);
    }

    #[test]
    fn test_params_round_trip_and_validation() {
        let params = BaselineParams::tight();
        let map = params.to_params();
        assert_eq!(BaselineParams::from_params(&map).unwrap(), params);

        let mut missing = map.clone();
        missing.remove("bet_fraction");
        assert_eq!(
            BaselineParams::from_params(&missing).unwrap_err(),
            ParamError::Missing("bet_fraction".into())
        );

        let mut bad = map.clone();
        bad.insert("strong_threshold".into(), 11.0);
        assert!(matches!(
            BaselineParams::from_params(&bad),
            Err(ParamError::OutOfRange { .. })
        ));

        let mut unordered = map;
        unordered.insert("marginal_threshold".into(), 9.0);
        assert_eq!(
            BaselineParams::from_params(&unordered).unwrap_err(),
            ParamError::UnorderedThresholds
        );
    }
}
