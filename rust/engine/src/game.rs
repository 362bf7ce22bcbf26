//! Per-hand betting state machine.
//!
//! A [`GameState`] is created for one hand with antes and blinds already
//! posted, driven street by street through [`GameState::apply_action`] and
//! [`GameState::advance_round`], and discarded once payouts are computed.
//! `sum(total_bet) == pot` holds after every mutation.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::cards::Card;
use crate::config::TableConfig;
use crate::deal::Deal;
use crate::errors::GameError;
use crate::hand::{evaluate, PokerHand};
use crate::logger::{ActionKind, ActionRecord, Street};
use crate::player::{Player, PlayerAction, Position};
use crate::pot::Payouts;
use crate::rules::{normalize_action, ValidatedAction};
use crate::strategy::{Observation, PublicSeat};

#[derive(Debug, Clone)]
pub struct GameState {
    config: TableConfig,
    players: Vec<Player>,
    /// Full runout; revealed into `community` as streets advance
    board: [Card; 5],
    community: Vec<Card>,
    pot: u32,
    street: Street,
    button: usize,
    small_blind_seat: usize,
    big_blind_seat: usize,
    min_raise: u32,
    last_raise_amount: u32,
    history: Vec<ActionRecord>,
    acted_since_raise: BTreeSet<usize>,
    actions_this_round: u32,
    current_player: Option<usize>,
    seed: Option<u64>,
}

impl GameState {
    /// Starts a hand dealt from a seeded deck. The seat count is `energies.len()`.
    pub fn new(
        config: TableConfig,
        energies: &[u32],
        button: usize,
        seed: u64,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let deal = Deal::from_seed(seed, energies.len(), button)?;
        let mut state = Self::from_deal(config, energies, &deal)?;
        state.seed = Some(seed);
        Ok(state)
    }

    /// Starts a hand with predetermined cards. Fails before any chips move if
    /// the deal is malformed or does not match the number of energies.
    pub fn from_deal(config: TableConfig, energies: &[u32], deal: &Deal) -> Result<Self, GameError> {
        config.validate()?;
        deal.validate()?;
        let n = deal.num_players();
        if energies.len() != n {
            return Err(GameError::EnergyCountMismatch {
                expected: n,
                actual: energies.len(),
            });
        }
        let button = deal.button();
        let (small_blind_seat, big_blind_seat) = if n == 2 {
            (button, (button + 1) % n)
        } else {
            ((button + 1) % n, (button + 2) % n)
        };
        let players = energies
            .iter()
            .zip(deal.hole_cards())
            .enumerate()
            .map(|(id, (&energy, &hole))| Player::new(id, energy, hole))
            .collect();

        let mut state = Self {
            config,
            players,
            board: *deal.community(),
            community: Vec::with_capacity(5),
            pot: 0,
            street: Street::Preflop,
            button,
            small_blind_seat,
            big_blind_seat,
            min_raise: config.big_blind,
            last_raise_amount: config.big_blind,
            history: Vec::new(),
            acted_since_raise: BTreeSet::new(),
            actions_this_round: 0,
            current_player: None,
            seed: None,
        };
        state.post_forced_bets();
        state.current_player = state.first_to_act();
        debug!(
            players = n,
            button,
            pot = state.pot,
            first = ?state.current_player,
            "hand started"
        );
        Ok(state)
    }

    fn post_forced_bets(&mut self) {
        if self.config.ante > 0 {
            for seat in 0..self.players.len() {
                let moved = self.players[seat].commit_dead(self.config.ante);
                if moved > 0 {
                    self.pot += moved;
                    self.record(seat, ActionKind::Ante, moved);
                }
            }
        }
        let sb = self.small_blind_seat;
        let moved = self.players[sb].commit(self.config.small_blind);
        self.pot += moved;
        self.record(sb, ActionKind::SmallBlind, moved);

        let bb = self.big_blind_seat;
        let moved = self.players[bb].commit(self.config.big_blind);
        self.pot += moved;
        self.record(bb, ActionKind::BigBlind, moved);
    }

    fn record(&mut self, seat: usize, action: ActionKind, amount: u32) {
        self.history.push(ActionRecord {
            seat,
            street: self.street,
            action,
            amount,
        });
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn num_players(&self) -> usize {
        self.players.len()
    }
    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_round(&self) -> Street {
        self.street
    }
    pub fn button_position(&self) -> usize {
        self.button
    }
    pub fn small_blind_seat(&self) -> usize {
        self.small_blind_seat
    }
    pub fn big_blind_seat(&self) -> usize {
        self.big_blind_seat
    }
    pub fn min_raise(&self) -> u32 {
        self.min_raise
    }
    pub fn last_raise_amount(&self) -> u32 {
        self.last_raise_amount
    }
    pub fn betting_history(&self) -> &[ActionRecord] {
        &self.history
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    pub fn actions_this_round(&self) -> u32 {
        self.actions_this_round
    }
    /// Seat whose decision is pending, or `None` when the round is complete.
    pub fn current_player(&self) -> Option<usize> {
        self.current_player
    }
    pub fn is_hand_over(&self) -> bool {
        self.street == Street::Showdown
    }

    /// Highest street bet at the table.
    pub fn max_bet(&self) -> u32 {
        self.players
            .iter()
            .map(Player::current_bet)
            .max()
            .unwrap_or(0)
    }

    pub fn to_call(&self, seat: usize) -> u32 {
        self.players
            .get(seat)
            .map(|p| self.max_bet().saturating_sub(p.current_bet()))
            .unwrap_or(0)
    }

    fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    fn actor_count(&self) -> usize {
        self.players.iter().filter(|p| p.can_act()).count()
    }

    fn needs_action(&self, seat: usize) -> bool {
        let p = &self.players[seat];
        if !p.can_act() {
            return false;
        }
        p.street_level() < self.max_bet()
            || (!self.acted_since_raise.contains(&seat) && self.actor_count() >= 2)
    }

    /// True once every seat that can still act has matched the table bet and
    /// acted since the last full raise, or the hand is no longer contested.
    pub fn is_round_complete(&self) -> bool {
        self.is_hand_over()
            || self.active_count() <= 1
            || (0..self.players.len()).all(|s| !self.needs_action(s))
    }

    /// Preflop, the seat has a blind in and nothing above the big blind has
    /// been wagered. A check here passes at the blind level instead of folding.
    fn facing_only_blinds(&self, seat: usize) -> bool {
        self.street == Street::Preflop
            && self.players[seat].current_bet() > 0
            && self.max_bet() <= self.config.big_blind
    }

    pub fn action_limit_reached(&self) -> bool {
        self.actions_this_round >= self.config.max_actions_per_round
    }

    fn find_actor(&self, from: usize) -> Option<usize> {
        let n = self.players.len();
        (0..n)
            .map(|i| (from + i) % n)
            .find(|&seat| self.needs_action(seat))
    }

    fn first_to_act(&self) -> Option<usize> {
        let n = self.players.len();
        let start = match self.street {
            Street::Showdown => return None,
            Street::Preflop if n == 2 => self.button,
            Street::Preflop => (self.big_blind_seat + 1) % n,
            _ => (self.button + 1) % n,
        };
        self.find_actor(start)
    }

    /// The view handed to the strategy seated at `seat`.
    pub fn observation(&self, seat: usize) -> Observation {
        let p = &self.players[seat];
        Observation {
            seat,
            num_players: self.players.len(),
            position: Position::of(seat, self.button, self.players.len()),
            button: self.button,
            hole_cards: p.hole_cards(),
            energy: p.stack(),
            current_bet: p.current_bet(),
            to_call: self.to_call(seat),
            max_bet: self.max_bet(),
            min_raise: self.min_raise,
            can_raise: !self.acted_since_raise.contains(&seat),
            pot: self.pot,
            big_blind: self.config.big_blind,
            street: self.street,
            community_cards: self.community.clone(),
            seats: self
                .players
                .iter()
                .map(|o| PublicSeat {
                    seat: o.id(),
                    energy: o.stack(),
                    current_bet: o.current_bet(),
                    total_bet: o.total_bet(),
                    folded: o.is_folded(),
                    all_in: o.is_all_in(),
                })
                .collect(),
            history: self.history.clone(),
        }
    }

    /// Applies the pending seat's action under table stakes and returns what
    /// was actually executed.
    pub fn apply_action(
        &mut self,
        seat: usize,
        action: PlayerAction,
    ) -> Result<ValidatedAction, GameError> {
        if self.is_hand_over() {
            return Err(GameError::HandAlreadyComplete);
        }
        match self.current_player {
            None => return Err(GameError::RoundComplete),
            Some(expected) if expected != seat => {
                return Err(GameError::NotPlayersTurn {
                    expected,
                    actual: seat,
                })
            }
            Some(_) => {}
        }
        if self.players[seat].is_folded() {
            return Err(GameError::PlayerAlreadyFolded);
        }

        let to_call = self.to_call(seat);
        let old_max = self.max_bet();
        let can_raise = !self.acted_since_raise.contains(&seat);
        let blind_check =
            matches!(action, PlayerAction::Check) && to_call > 0 && self.facing_only_blinds(seat);
        let validated = if blind_check {
            self.players[seat].check_through(old_max);
            debug!(seat, to_call, "check passes at the blind level");
            ValidatedAction::Check
        } else {
            normalize_action(
                self.players[seat].stack(),
                to_call,
                self.min_raise,
                can_raise,
                action,
            )
        };
        if matches!(action, PlayerAction::Check) && validated == ValidatedAction::Fold {
            warn!(seat, to_call, "check facing a bet treated as fold");
        }

        match validated {
            ValidatedAction::Fold => {
                self.players[seat].fold();
                self.record(seat, ActionKind::Fold, 0);
            }
            ValidatedAction::Check => self.record(seat, ActionKind::Check, 0),
            ValidatedAction::Call(amount) => {
                let moved = self.players[seat].commit(amount);
                self.pot += moved;
                self.record(seat, ActionKind::Call, moved);
            }
            ValidatedAction::Bet(increment) | ValidatedAction::Raise(increment) => {
                let moved = self.players[seat].commit(to_call + increment);
                self.pot += moved;
                self.register_raise(seat, old_max);
                let kind = if to_call == 0 {
                    ActionKind::Bet
                } else {
                    ActionKind::Raise
                };
                self.record(seat, kind, moved);
            }
            ValidatedAction::AllIn(amount) => {
                let moved = self.players[seat].commit(amount);
                self.pot += moved;
                if self.players[seat].current_bet() > old_max {
                    self.register_raise(seat, old_max);
                }
                self.record(seat, ActionKind::AllIn, moved);
            }
        }
        self.acted_since_raise.insert(seat);
        self.actions_this_round += 1;
        debug!(
            seat,
            street = ?self.street,
            action = ?validated,
            pot = self.pot,
            "action applied"
        );

        if self.active_count() <= 1 {
            self.finish_uncontested();
        } else {
            self.current_player = self.find_actor((seat + 1) % self.players.len());
        }
        Ok(validated)
    }

    /// A raise of at least `min_raise` reopens the betting; a short all-in
    /// raise leaves `min_raise` and the acted set untouched.
    fn register_raise(&mut self, seat: usize, old_max: u32) {
        let increment = self.players[seat].current_bet().saturating_sub(old_max);
        if increment >= self.min_raise {
            self.min_raise = increment;
            self.last_raise_amount = increment;
            self.acted_since_raise.clear();
        }
    }

    /// Returns to the top active bettor whatever exceeds the second-highest
    /// active street level. A blind level checked through counts as matched.
    fn refund_unmatched(&mut self) {
        let mut bets: Vec<(u32, usize)> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_active())
            .map(|(i, p)| (p.street_level(), i))
            .collect();
        if bets.len() < 2 {
            return;
        }
        bets.sort_unstable_by(|a, b| b.cmp(a));
        let (top, seat) = bets[0];
        let second = bets[1].0;
        if top > second {
            let refunded = self.players[seat].refund(top - second);
            self.pot -= refunded;
            self.record(seat, ActionKind::Refund, refunded);
            debug!(seat, refunded, "unmatched bet returned");
        }
    }

    fn reveal_board(&mut self) {
        let len = self.street.board_len();
        self.community = self.board[..len].to_vec();
    }

    fn finish_uncontested(&mut self) {
        self.street = Street::Showdown;
        self.reveal_board();
        self.current_player = None;
        debug!(pot = self.pot, "hand ends without showdown");
    }

    /// Closes the current street: refunds any unmatched bet, resets street
    /// bets and raise sizing to the big blind, and deals the next street's
    /// community cards. After the river this moves to showdown.
    ///
    /// Fails with [`GameError::RoundIncomplete`] while a seat is still to act.
    pub fn advance_round(&mut self) -> Result<(), GameError> {
        if self.is_hand_over() {
            return Err(GameError::HandAlreadyComplete);
        }
        if !self.is_round_complete() {
            return Err(GameError::RoundIncomplete {
                pending: self.current_player,
            });
        }
        self.close_round();
        Ok(())
    }

    fn close_round(&mut self) {
        self.refund_unmatched();
        for p in &mut self.players {
            p.reset_street();
        }
        self.acted_since_raise.clear();
        self.actions_this_round = 0;
        self.min_raise = self.config.big_blind;
        self.last_raise_amount = self.config.big_blind;

        if self.active_count() <= 1 {
            self.finish_uncontested();
            return;
        }
        self.street = self.street.next();
        self.reveal_board();
        self.current_player = self.first_to_act();
        debug!(
            street = ?self.street,
            board = self.community.len(),
            next = ?self.current_player,
            "round advanced"
        );
    }

    /// Safety valve for runaway betting rounds: logs and advances regardless
    /// of pending actions.
    pub fn force_advance(&mut self) -> Result<(), GameError> {
        if self.is_hand_over() {
            return Err(GameError::HandAlreadyComplete);
        }
        warn!(
            street = ?self.street,
            actions = self.actions_this_round,
            limit = self.config.max_actions_per_round,
            "action limit reached; forcing round advance"
        );
        self.close_round();
        Ok(())
    }

    /// Hands of every seat still in the pot, best first. Ties keep seat order.
    pub fn showdown_hands(&self) -> Vec<(usize, PokerHand)> {
        let mut hands: Vec<(usize, PokerHand)> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_active())
            .map(|(i, p)| (i, evaluate(&p.hole_cards(), &self.community)))
            .collect();
        hands.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        hands
    }

    /// Seats holding the best hand among those still in, in seat order.
    /// After a fold-out this is the last seat standing.
    pub fn winners(&self) -> Vec<usize> {
        let hands = self.showdown_hands();
        match hands.first() {
            Some((_, best)) => hands
                .iter()
                .filter(|(_, h)| h.ties(best))
                .map(|(seat, _)| *seat)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Net chips per seat once `payouts` are applied: payout minus chips committed.
    pub fn net_results(&self, payouts: &Payouts) -> Vec<f64> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| {
                payouts.get(&i).copied().unwrap_or(0.0) - f64::from(p.total_bet())
            })
            .collect()
    }
}
