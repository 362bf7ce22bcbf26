//! Hand ranking for 5 to 7 card holdings.
//!
//! Five-card sets are classified directly from rank and suit counts; six and
//! seven card sets enumerate every 5-card subset and keep the best one.
//! Classified subsets are memoised by a packed integer key so repeated
//! showdowns over the same board are cheap.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// The ten canonical hand categories, lowest first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "high_card",
            Category::OnePair => "pair",
            Category::TwoPair => "two_pair",
            Category::ThreeOfAKind => "three_of_a_kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full_house",
            Category::FourOfAKind => "four_of_a_kind",
            Category::StraightFlush => "straight_flush",
            Category::RoyalFlush => "royal_flush",
        }
    }
}

/// A ranked hand. Ordering compares `category`, then `primary_ranks`, then
/// `kickers`, element by element; the first mismatch decides.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PokerHand {
    pub category: Category,
    /// Ranks that define the category (e.g. trip rank then pair rank for a full house).
    pub primary_ranks: Vec<u8>,
    /// Remaining ranks, descending.
    pub kickers: Vec<u8>,
}

impl PokerHand {
    /// Ordinal of the category, 1 (high card) through 10 (royal flush).
    pub fn rank_value(&self) -> u8 {
        self.category as u8
    }

    pub fn hand_type(&self) -> &'static str {
        self.category.name()
    }

    pub fn beats(&self, other: &PokerHand) -> bool {
        compare_hands(self, other) == Ordering::Greater
    }

    pub fn ties(&self, other: &PokerHand) -> bool {
        compare_hands(self, other) == Ordering::Equal
    }

    /// Human-readable summary such as `"straight, 5 high"`.
    pub fn describe(&self) -> String {
        let top = self.primary_ranks.first().copied().unwrap_or(0);
        match self.category {
            Category::RoyalFlush => "royal flush".to_string(),
            Category::FullHouse => format!(
                "full house, {} over {}",
                rank_name(top),
                rank_name(self.primary_ranks.get(1).copied().unwrap_or(0))
            ),
            Category::TwoPair => format!(
                "two pair, {} and {}",
                rank_name(top),
                rank_name(self.primary_ranks.get(1).copied().unwrap_or(0))
            ),
            c => format!("{}, {} high", c.name().replace('_', " "), rank_name(top)),
        }
    }
}

impl fmt::Display for PokerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl Ord for PokerHand {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_hands(self, other)
    }
}

impl PartialOrd for PokerHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn compare_hands(a: &PokerHand, b: &PokerHand) -> Ordering {
    a.category
        .cmp(&b.category)
        .then_with(|| a.primary_ranks.cmp(&b.primary_ranks))
        .then_with(|| a.kickers.cmp(&b.kickers))
}

fn rank_name(r: u8) -> String {
    match r {
        14 => "A".to_string(),
        13 => "K".to_string(),
        12 => "Q".to_string(),
        11 => "J".to_string(),
        10 => "T".to_string(),
        n => n.to_string(),
    }
}

const DEFAULT_CACHE_CAPACITY: usize = 1 << 18;

/// Evaluator with a bounded memo of 5-card classifications.
///
/// Not shared across threads; the free functions in this module use one
/// instance per thread.
#[derive(Debug)]
pub struct HandEvaluator {
    cache: HashMap<u32, PokerHand>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl Default for HandEvaluator {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl HandEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: HashMap::new(),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Ranks hole cards plus 0..=5 community cards.
    ///
    /// With fewer than five cards in total the result is a provisional high-card
    /// value only and must not be used to settle a showdown.
    pub fn evaluate(&mut self, hole: &[Card], community: &[Card]) -> PokerHand {
        let mut all = Vec::with_capacity(hole.len() + community.len());
        all.extend_from_slice(hole);
        all.extend_from_slice(community);
        self.evaluate_cards(&all)
    }

    pub fn evaluate_cards(&mut self, cards: &[Card]) -> PokerHand {
        self.best_five(cards)
            .map(|(_, hand)| hand)
            .unwrap_or_else(|| provisional(cards))
    }

    /// The best 5-card subset and its value, or `None` with fewer than 5 cards.
    pub fn best_five(&mut self, cards: &[Card]) -> Option<([Card; 5], PokerHand)> {
        let n = cards.len();
        if n < 5 {
            return None;
        }
        let mut best: Option<([Card; 5], PokerHand)> = None;
        for a in 0..n - 4 {
            for b in a + 1..n - 3 {
                for c in b + 1..n - 2 {
                    for d in c + 1..n - 1 {
                        for e in d + 1..n {
                            let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                            let hand = self.evaluate_five(&five);
                            let better = match &best {
                                Some((_, current)) => hand.beats(current),
                                None => true,
                            };
                            if better {
                                best = Some((five, hand));
                            }
                        }
                    }
                }
            }
        }
        best
    }

    pub fn evaluate_five(&mut self, cards: &[Card; 5]) -> PokerHand {
        let key = five_card_key(cards);
        if let Some(hit) = self.cache.get(&key) {
            self.hits += 1;
            return hit.clone();
        }
        self.misses += 1;
        let hand = classify_five(cards);
        if self.cache.len() >= self.capacity {
            self.cache.clear();
        }
        self.cache.insert(key, hand.clone());
        hand
    }

    pub fn cache_stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

/// Canonical key for a 5-card set: the packed cards sorted, 6 bits each.
pub fn five_card_key(cards: &[Card; 5]) -> u32 {
    let mut packed = cards.map(Card::packed);
    packed.sort_unstable();
    packed
        .iter()
        .fold(0u32, |key, &p| (key << 6) | u32::from(p))
}

thread_local! {
    static EVALUATOR: RefCell<HandEvaluator> = RefCell::new(HandEvaluator::default());
}

/// Ranks hole cards together with the community cards seen so far.
pub fn evaluate(hole: &[Card], community: &[Card]) -> PokerHand {
    EVALUATOR.with(|ev| ev.borrow_mut().evaluate(hole, community))
}

/// Ranks any set of cards; see [`HandEvaluator::evaluate`] for the fewer-than-five case.
pub fn evaluate_hand(cards: &[Card]) -> PokerHand {
    EVALUATOR.with(|ev| ev.borrow_mut().evaluate_cards(cards))
}

fn provisional(cards: &[Card]) -> PokerHand {
    let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    let kickers = ranks.split_off(ranks.len().min(1));
    PokerHand {
        category: Category::HighCard,
        primary_ranks: ranks,
        kickers,
    }
}

fn classify_five(cards: &[Card; 5]) -> PokerHand {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut rank_mask: u16 = 0;
    let first_suit = cards[0].suit;
    let mut flush = true;
    for c in cards {
        let r = c.rank.value();
        rank_counts[r as usize] += 1;
        rank_mask |= 1 << r;
        flush &= c.suit == first_suit;
    }

    let straight = if rank_mask.count_ones() == 5 {
        straight_high_from_mask(rank_mask)
    } else {
        None
    };

    // (count, rank) sorted by count then rank, both descending
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));
    let desc: Vec<u8> = {
        let mut v: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
        v.sort_unstable_by(|a, b| b.cmp(a));
        v
    };

    let hand = |category, primary_ranks: Vec<u8>, kickers: Vec<u8>| PokerHand {
        category,
        primary_ranks,
        kickers,
    };
    let singles = |skip: &[u8]| -> Vec<u8> {
        groups
            .iter()
            .filter(|(_, r)| !skip.contains(r))
            .map(|&(_, r)| r)
            .collect()
    };

    if let (true, Some(high)) = (flush, straight) {
        let category = if high == 14 {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        };
        return hand(category, vec![high], vec![]);
    }
    match groups[0].0 {
        4 => {
            let quad = groups[0].1;
            return hand(Category::FourOfAKind, vec![quad], singles(&[quad]));
        }
        3 if groups[1].0 == 2 => {
            return hand(Category::FullHouse, vec![groups[0].1, groups[1].1], vec![]);
        }
        _ => {}
    }
    if flush {
        return hand(Category::Flush, desc, vec![]);
    }
    if let Some(high) = straight {
        return hand(Category::Straight, vec![high], vec![]);
    }
    match (groups[0].0, groups.get(1).map(|g| g.0)) {
        (3, _) => {
            let trip = groups[0].1;
            hand(Category::ThreeOfAKind, vec![trip], singles(&[trip]))
        }
        (2, Some(2)) => {
            let (hi, lo) = (groups[0].1, groups[1].1);
            hand(Category::TwoPair, vec![hi, lo], singles(&[hi, lo]))
        }
        (2, _) => {
            let pair = groups[0].1;
            hand(Category::OnePair, vec![pair], singles(&[pair]))
        }
        _ => hand(Category::HighCard, vec![desc[0]], desc[1..].to_vec()),
    }
}

fn straight_high_from_mask(mask: u16) -> Option<u8> {
    // Treat Ace as 14 and optionally as 1
    let mut m = mask;
    if (m & (1 << 14)) != 0 {
        m |= 1 << 1;
    }
    // Sliding 5-bit window from Ace(14) down to 5; the wheel reports 5 high
    for high in (5..=14u8).rev() {
        let window = 0b11111u16 << (high - 4);
        if (m & window) == window {
            return Some(high);
        }
    }
    None
}
