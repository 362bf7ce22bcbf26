//! Pot layering and payout distribution.

use std::collections::BTreeMap;

use crate::game::GameState;

/// Seat index to chips awarded. Seats that win nothing are absent.
pub type Payouts = BTreeMap<usize, f64>;

/// One layer of the pot and the seats allowed to win it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pot {
    pub amount: u32,
    pub eligible: Vec<usize>,
}

/// Splits per-seat hand contributions into a main pot and side pots.
///
/// Each layer is capped by the next distinct contribution level among seats
/// still in the hand. Chips a folded seat put in above the top live level are
/// dead money and join the last layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotManager {
    pots: Vec<Pot>,
    side_amounts: Vec<u32>,
}

impl PotManager {
    /// Every contributing seat is treated as still in the hand.
    pub fn from_contributions<C: AsRef<[u32]>>(contributions: C) -> Self {
        let c = contributions.as_ref();
        Self::with_folded(c, &vec![false; c.len()])
    }

    pub fn with_folded(contributions: &[u32], folded: &[bool]) -> Self {
        Self::with_levels(contributions, contributions, folded)
    }

    /// Like [`PotManager::with_folded`], but layer caps and eligibility follow
    /// `covered` (the level each seat contests) rather than chips committed.
    /// A seat that checked past the blinds covers more than it put in.
    pub fn with_levels(contributions: &[u32], covered: &[u32], folded: &[bool]) -> Self {
        let live = |i: usize| !folded.get(i).copied().unwrap_or(false);
        let cover = |i: usize| covered.get(i).copied().unwrap_or(0);
        let mut levels: Vec<u32> = (0..contributions.len())
            .filter(|&i| live(i) && cover(i) > 0)
            .map(cover)
            .collect();
        levels.sort_unstable();
        levels.dedup();

        let mut pots: Vec<Pot> = Vec::with_capacity(levels.len());
        let mut prev = 0u32;
        for &level in &levels {
            let amount: u32 = contributions
                .iter()
                .map(|&c| c.min(level) - c.min(prev))
                .sum();
            let eligible = (0..contributions.len())
                .filter(|&i| live(i) && cover(i) >= level)
                .collect();
            pots.push(Pot { amount, eligible });
            prev = level;
        }

        let dead: u32 = contributions.iter().map(|&c| c - c.min(prev)).sum();
        if dead > 0 {
            match pots.last_mut() {
                Some(last) => last.amount += dead,
                None => pots.push(Pot {
                    amount: dead,
                    eligible: Vec::new(),
                }),
            }
        }

        let side_amounts = pots.iter().skip(1).map(|p| p.amount).collect();
        Self { pots, side_amounts }
    }

    pub fn main_pot(&self) -> u32 {
        self.pots.first().map(|p| p.amount).unwrap_or(0)
    }

    pub fn side_pots(&self) -> &[u32] {
        &self.side_amounts
    }

    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    pub fn total(&self) -> u32 {
        self.pots.iter().map(|p| p.amount).sum()
    }
}

/// Splits `amount` evenly between `winners`; the last winner absorbs any
/// floating-point residue so the shares sum to `amount` exactly.
fn split_evenly(amount: u32, winners: &[usize], payouts: &mut Payouts) {
    let Some((&last, rest)) = winners.split_last() else {
        return;
    };
    let total = f64::from(amount);
    let share = total / winners.len() as f64;
    let mut given = 0.0;
    for &seat in rest {
        *payouts.entry(seat).or_insert(0.0) += share;
        given += share;
    }
    *payouts.entry(last).or_insert(0.0) += total - given;
}

/// Chips owed to each seat once the hand is over.
///
/// A fold-out awards the whole pot to the last seat standing. Otherwise each
/// pot layer goes to the best hand among its eligible seats, split equally on
/// ties. The payouts always sum to the pot.
pub fn determine_payouts(state: &GameState) -> Payouts {
    let mut payouts = Payouts::new();
    let players = state.players();
    let live: Vec<usize> = (0..players.len())
        .filter(|&i| players[i].is_active())
        .collect();

    if let [winner] = live.as_slice() {
        if state.pot() > 0 {
            payouts.insert(*winner, f64::from(state.pot()));
        }
        return payouts;
    }

    let hands: BTreeMap<usize, _> = state.showdown_hands().into_iter().collect();
    let contributions: Vec<u32> = players.iter().map(|p| p.total_bet()).collect();
    let covered: Vec<u32> = players.iter().map(|p| p.covered()).collect();
    let folded: Vec<bool> = players.iter().map(|p| p.is_folded()).collect();
    let manager = PotManager::with_levels(&contributions, &covered, &folded);

    for pot in manager.pots().iter().filter(|p| p.amount > 0) {
        let Some(best) = pot.eligible.iter().filter_map(|s| hands.get(s)).max() else {
            continue;
        };
        let winners: Vec<usize> = pot
            .eligible
            .iter()
            .copied()
            .filter(|s| hands.get(s).is_some_and(|h| h.ties(best)))
            .collect();
        split_evenly(pot.amount, &winners, &mut payouts);
    }
    payouts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_way_layers() {
        let pm = PotManager::from_contributions([100, 300, 600]);
        assert_eq!(pm.main_pot(), 300);
        assert_eq!(pm.side_pots(), &[400, 300]);
        assert_eq!(pm.pots()[2].eligible, vec![2]);
        assert_eq!(pm.total(), 1000);
    }

    #[test]
    fn folded_excess_is_dead_money() {
        let pm = PotManager::with_folded(&[50, 50, 80], &[false, false, true]);
        assert_eq!(pm.pots().len(), 1);
        assert_eq!(pm.main_pot(), 180);
        assert_eq!(pm.pots()[0].eligible, vec![0, 1]);
    }

    #[test]
    fn covered_level_widens_eligibility() {
        // seat 0 put in 5 but checked through the big blind of 10
        let pm = PotManager::with_levels(&[5, 10], &[10, 10], &[false, false]);
        assert_eq!(pm.pots().len(), 1);
        assert_eq!(pm.main_pot(), 15);
        assert_eq!(pm.pots()[0].eligible, vec![0, 1]);
    }

    #[test]
    fn uneven_split_sums_exactly() {
        let mut payouts = Payouts::new();
        split_evenly(10, &[0, 1, 2], &mut payouts);
        let sum: f64 = payouts.values().sum();
        assert_eq!(sum, 10.0);
    }
}
