use std::collections::BTreeMap;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::GameState;
use crate::pot::Payouts;

/// A betting round of a Texas Hold'em hand, in play order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
    /// Betting closed; pot awaits payout
    Showdown,
}

impl Street {
    pub fn next(self) -> Street {
        match self {
            Street::Preflop => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn => Street::River,
            Street::River | Street::Showdown => Street::Showdown,
        }
    }

    /// Number of community cards visible during this street.
    pub fn board_len(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River | Street::Showdown => 5,
        }
    }
}

/// What happened in one betting-history entry.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Ante,
    SmallBlind,
    BigBlind,
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
    /// Unmatched chips returned at the end of a round
    Refund,
}

/// Records a single chip movement or decision during a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat index
    pub seat: usize,
    /// The betting street when this action occurred
    pub street: Street,
    pub action: ActionKind,
    /// Chips moved by the action (0 for fold/check)
    pub amount: u32,
}

/// Complete record of a poker hand including all actions, board cards, and outcome.
/// Serialized to JSONL format for hand history storage and replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// RNG seed used for the deal, if the hand was dealt from a seed
    pub seed: Option<u64>,
    pub button: usize,
    /// Chronological list of all betting-history entries
    pub actions: Vec<ActionRecord>,
    /// Community cards on the board
    pub board: Vec<Card>,
    /// Hand result summary, e.g. `"seat 1"` or `"split"`
    pub result: Option<String>,
    /// Timestamp when the hand was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
    /// Showdown information if hand went to showdown
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
    /// Chips won or lost per seat
    #[serde(default)]
    pub net_result: BTreeMap<usize, f64>,
}

impl HandRecord {
    /// Builds the record for a finished hand.
    pub fn from_state(hand_id: String, state: &GameState, payouts: &Payouts) -> Self {
        let winners: Vec<usize> = payouts
            .iter()
            .filter(|(_, &amount)| amount > 0.0)
            .map(|(&seat, _)| seat)
            .collect();
        let result = match winners.as_slice() {
            [] => None,
            [one] => Some(format!("seat {}", one)),
            _ => Some("split".to_string()),
        };
        let contested = state.players().iter().filter(|p| p.is_active()).count() > 1;
        let showdown = contested.then(|| ShowdownInfo {
            winners: winners.clone(),
            notes: state.showdown_hands().first().map(|(_, hand)| hand.describe()),
        });
        let net_result = state
            .net_results(payouts)
            .into_iter()
            .enumerate()
            .collect();
        Self {
            hand_id,
            seed: state.seed(),
            button: state.button_position(),
            actions: state.betting_history().to_vec(),
            board: state.community_cards().to_vec(),
            result,
            ts: None,
            meta: None,
            showdown,
            net_result,
        }
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

/// Information about the showdown phase when hands are revealed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    /// Seats that won some part of the pot
    pub winners: Vec<usize>,
    /// Optional notes about the showdown (e.g. the best hand shown)
    #[serde(default)]
    pub notes: Option<String>,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger with no backing file: issues ids for `date` and discards
    /// records.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
