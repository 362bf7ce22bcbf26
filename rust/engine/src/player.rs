use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// A seat's position relative to the button.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Button position (small blind in heads-up)
    Button,
    /// Small blind (three or more players)
    SmallBlind,
    /// Big blind position
    BigBlind,
    /// Acts before the last seat ahead of the button
    Early,
    /// Seat directly before the button (four or more players)
    Late,
}

impl Position {
    pub fn of(seat: usize, button: usize, num_players: usize) -> Position {
        let n = num_players.max(1);
        let dist = (seat + n - button % n) % n;
        match (n, dist) {
            (_, 0) => Position::Button,
            (2, _) => Position::BigBlind,
            (_, 1) => Position::SmallBlind,
            (_, 2) => Position::BigBlind,
            (n, d) if n >= 4 && d == n - 1 => Position::Late,
            _ => Position::Early,
        }
    }
}

/// An action requested by a strategy.
///
/// `Bet` and `Raise` both carry the increment above the amount needed to
/// call; the engine adds the call portion itself.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no bet, only valid if no bet to call)
    Check,
    /// Call the current bet
    Call,
    /// Open the betting by the given amount
    Bet(u32),
    /// Raise the current bet by the given increment
    Raise(u32),
    /// Commit all remaining chips
    AllIn,
}

/// Per-hand state of one seat.
///
/// Chips only move between `energy` and the pot, so
/// `starting_energy == energy + total_bet` holds throughout a hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    id: usize,
    starting_energy: u32,
    energy: u32,
    hole: [Card; 2],
    current_bet: u32,
    total_bet: u32,
    refunded: u32,
    /// Street level accepted by checking past the blinds without chips
    checked_level: u32,
    /// Blind shortfall checked past on earlier streets
    blind_credit: u32,
    folded: bool,
    all_in: bool,
}

impl Player {
    pub fn new(id: usize, energy: u32, hole: [Card; 2]) -> Self {
        Self {
            id,
            starting_energy: energy,
            energy,
            hole,
            current_bet: 0,
            total_bet: 0,
            refunded: 0,
            checked_level: 0,
            blind_credit: 0,
            folded: false,
            all_in: energy == 0,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn stack(&self) -> u32 {
        self.energy
    }
    pub fn starting_energy(&self) -> u32 {
        self.starting_energy
    }
    pub fn hole_cards(&self) -> [Card; 2] {
        self.hole
    }
    /// Chips committed on the current street.
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    /// Chips committed over the whole hand, net of refunds.
    pub fn total_bet(&self) -> u32 {
        self.total_bet
    }
    /// Chips handed back by unmatched-bet refunds this hand.
    pub fn refunded(&self) -> u32 {
        self.refunded
    }
    /// Street level this seat has matched, counting a check past the blinds.
    pub fn street_level(&self) -> u32 {
        self.current_bet.max(self.checked_level)
    }
    /// Contribution level this seat contests at showdown: chips committed
    /// plus any blind shortfall it checked past.
    pub fn covered(&self) -> u32 {
        self.total_bet + self.blind_credit + (self.street_level() - self.current_bet)
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }
    /// Still contesting the pot.
    pub fn is_active(&self) -> bool {
        !self.folded
    }
    /// Still able to take betting actions.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in
    }

    /// Moves up to `amount` chips from the stack onto the current street,
    /// clipping at the stack (table stakes). Returns the chips actually moved.
    pub(crate) fn commit(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.energy);
        self.energy -= actual;
        self.current_bet += actual;
        self.total_bet += actual;
        if self.energy == 0 {
            self.all_in = true;
        }
        actual
    }

    /// Commits an ante: counts toward the hand total but not the street bet.
    pub(crate) fn commit_dead(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.energy);
        self.energy -= actual;
        self.total_bet += actual;
        if self.energy == 0 {
            self.all_in = true;
        }
        actual
    }

    pub(crate) fn refund(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.current_bet);
        self.current_bet -= actual;
        self.total_bet -= actual;
        self.energy += actual;
        self.refunded += actual;
        if self.energy > 0 {
            self.all_in = false;
        }
        actual
    }

    pub(crate) fn fold(&mut self) {
        self.folded = true;
    }

    pub(crate) fn check_through(&mut self, level: u32) {
        self.checked_level = self.checked_level.max(level);
    }

    pub(crate) fn reset_street(&mut self) {
        self.blind_credit += self.street_level() - self.current_bet;
        self.current_bet = 0;
        self.checked_level = 0;
    }
}
