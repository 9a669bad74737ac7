//! Game configuration.
//!
//! `GameConfig::default()` is the standard game: a 55-card deck, the usual
//! token values, a five-card marketplace and a best-of-three match.
//! Builders adjust individual settings, mostly so tests can play short or
//! lopsided rounds.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::token::BonusKind;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards of each kind in a fresh deck, camels included.
    pub deck_counts: FxHashMap<Card, usize>,

    /// Token values for each goods kind (order irrelevant, stacks are sorted).
    pub goods_tokens: FxHashMap<Card, Vec<i64>>,

    /// Token values for each bonus stack (order irrelevant, stacks are shuffled).
    pub bonus_tokens: FxHashMap<BonusKind, Vec<i64>>,

    /// Value of the largest herd token.
    pub largest_herd_value: i64,

    /// Visible marketplace slots.
    pub market_size: usize,

    /// Camels placed in the marketplace at the start of a round.
    pub market_camels: usize,

    /// Cards dealt to each player at the start of a round.
    pub hand_size: usize,

    /// Maximum cards a hand may hold after a buy or trade.
    pub hand_limit: usize,

    /// Fewest cards that may change hands in a trade.
    pub min_trade: usize,

    /// Empty goods stacks that end a round.
    pub depleted_stacks_to_end: usize,

    /// Round wins needed to take the match.
    pub victory_points_to_win: u32,

    /// Rounds played at most.
    pub max_rounds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        let deck_counts = [
            (Card::Diamond, 6),
            (Card::Gold, 6),
            (Card::Silver, 6),
            (Card::Cloth, 8),
            (Card::Spice, 8),
            (Card::Leather, 10),
            (Card::Camel, 11),
        ]
        .into_iter()
        .collect();

        let goods_tokens = [
            (Card::Diamond, vec![7, 7, 5, 5, 5]),
            (Card::Gold, vec![6, 6, 5, 5, 5]),
            (Card::Silver, vec![5, 5, 5, 5, 5]),
            (Card::Cloth, vec![5, 3, 3, 2, 2, 1, 1]),
            (Card::Spice, vec![5, 3, 3, 2, 2, 1, 1]),
            (Card::Leather, vec![4, 3, 2, 1, 1, 1, 1, 1, 1]),
        ]
        .into_iter()
        .collect();

        let bonus_tokens = [
            (BonusKind::Three, vec![3, 3, 2, 2, 2, 1, 1]),
            (BonusKind::Four, vec![6, 6, 5, 5, 4, 4]),
            (BonusKind::Five, vec![10, 10, 9, 8, 8]),
        ]
        .into_iter()
        .collect();

        Self {
            deck_counts,
            goods_tokens,
            bonus_tokens,
            largest_herd_value: 5,
            market_size: 5,
            market_camels: 3,
            hand_size: 4,
            hand_limit: 7,
            min_trade: 2,
            depleted_stacks_to_end: 3,
            victory_points_to_win: 2,
            max_rounds: 3,
        }
    }
}

impl GameConfig {
    /// Standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `card` in a fresh deck.
    #[must_use]
    pub fn deck_count(&self, card: Card) -> usize {
        self.deck_counts.get(&card).copied().unwrap_or(0)
    }

    /// Total cards in a fresh deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck_counts.values().sum()
    }

    #[must_use]
    pub fn with_deck_count(mut self, card: Card, count: usize) -> Self {
        self.deck_counts.insert(card, count);
        self
    }

    #[must_use]
    pub fn with_goods_tokens(mut self, card: Card, values: Vec<i64>) -> Self {
        self.goods_tokens.insert(card, values);
        self
    }

    #[must_use]
    pub fn with_bonus_tokens(mut self, bonus: BonusKind, values: Vec<i64>) -> Self {
        self.bonus_tokens.insert(bonus, values);
        self
    }

    #[must_use]
    pub fn with_largest_herd_value(mut self, value: i64) -> Self {
        self.largest_herd_value = value;
        self
    }

    #[must_use]
    pub fn with_market_camels(mut self, camels: usize) -> Self {
        self.market_camels = camels;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }
}
