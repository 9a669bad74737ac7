//! Scoring token stacks.
//!
//! Goods stacks are sorted so the most valuable token is taken first.
//! Bonus stacks are shuffled, so their reward is a surprise.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{BonusKind, Card, GameConfig, GameRng, Token, TokenKind};
use crate::error::EngineError;

/// A pile of tokens of one kind, drawn from the end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStack {
    kind: TokenKind,
    tokens: Vec<Token>,
}

impl TokenStack {
    /// Build a stack from raw values, in the given order.
    pub fn new(kind: TokenKind, values: &[i64]) -> Result<Self, EngineError> {
        let tokens = values
            .iter()
            .map(|&v| Token::new(kind, v))
            .collect::<Result<_, _>>()?;
        Ok(Self { kind, tokens })
    }

    /// Order ascending so the highest value is drawn next.
    pub fn sort_by_value(&mut self) {
        self.tokens.sort_by_key(Token::value);
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.tokens);
    }

    /// Take up to `n` tokens from the top.
    pub fn draw(&mut self, n: usize) -> Vec<Token> {
        let split = self.tokens.len().saturating_sub(n);
        let mut drawn = self.tokens.split_off(split);
        drawn.reverse();
        drawn
    }

    pub fn draw_one(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    /// Token values, bottom first.
    #[must_use]
    pub fn values(&self) -> Vec<u32> {
        self.tokens.iter().map(Token::value).collect()
    }

    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Remaining token count per stack, for display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyCounts {
    pub goods: Vec<(Card, usize)>,
    pub bonus: Vec<(BonusKind, usize)>,
}

/// Every token stack in play for a round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenSupply {
    goods: FxHashMap<Card, TokenStack>,
    bonus: FxHashMap<BonusKind, TokenStack>,
}

impl TokenSupply {
    /// Sorted goods stacks and shuffled bonus stacks from `config`.
    ///
    /// Goods or bonus kinds missing from the config get an empty stack.
    pub fn from_config(config: &GameConfig, rng: &mut GameRng) -> Result<Self, EngineError> {
        let mut goods = FxHashMap::default();
        for card in Card::GOODS {
            let values = config.goods_tokens.get(&card).map_or(&[][..], Vec::as_slice);
            let mut stack = TokenStack::new(TokenKind::Goods(card), values)?;
            stack.sort_by_value();
            goods.insert(card, stack);
        }

        let mut bonus = FxHashMap::default();
        for kind in BonusKind::ALL {
            let values = config.bonus_tokens.get(&kind).map_or(&[][..], Vec::as_slice);
            let mut stack = TokenStack::new(TokenKind::Bonus(kind), values)?;
            stack.shuffle(rng);
            bonus.insert(kind, stack);
        }

        Ok(Self { goods, bonus })
    }

    /// Take up to `n` goods tokens for `card`. Camels have no stack.
    pub fn draw_goods(&mut self, card: Card, n: usize) -> Vec<Token> {
        self.goods
            .get_mut(&card)
            .map(|stack| stack.draw(n))
            .unwrap_or_default()
    }

    pub fn draw_bonus(&mut self, kind: BonusKind) -> Option<Token> {
        self.bonus.get_mut(&kind).and_then(TokenStack::draw_one)
    }

    #[must_use]
    pub fn goods(&self, card: Card) -> Option<&TokenStack> {
        self.goods.get(&card)
    }

    #[must_use]
    pub fn bonus(&self, kind: BonusKind) -> Option<&TokenStack> {
        self.bonus.get(&kind)
    }

    /// How many goods stacks are empty.
    #[must_use]
    pub fn depleted_goods_count(&self) -> usize {
        self.goods.values().filter(|s| s.is_empty()).count()
    }

    #[must_use]
    pub fn counts(&self) -> SupplyCounts {
        SupplyCounts {
            goods: Card::GOODS
                .iter()
                .map(|&c| (c, self.goods.get(&c).map_or(0, TokenStack::len)))
                .collect(),
            bonus: BonusKind::ALL
                .iter()
                .map(|&b| (b, self.bonus.get(&b).map_or(0, TokenStack::len)))
                .collect(),
        }
    }
}
