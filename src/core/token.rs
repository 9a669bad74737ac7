//! Scoring tokens.
//!
//! Goods tokens are earned by selling, bonus tokens by selling three or
//! more cards at once, and the largest herd token at the end of a round.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::card::Card;
use crate::error::EngineError;

/// Bonus awarded for the size of a single sale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusKind {
    Three,
    Four,
    Five,
}

impl BonusKind {
    pub const ALL: [BonusKind; 3] = [BonusKind::Three, BonusKind::Four, BonusKind::Five];

    /// The bonus earned by selling `amount` cards, if any.
    ///
    /// Five or more all map to [`BonusKind::Five`].
    #[must_use]
    pub const fn for_sale(amount: usize) -> Option<BonusKind> {
        match amount {
            0..=2 => None,
            3 => Some(BonusKind::Three),
            4 => Some(BonusKind::Four),
            _ => Some(BonusKind::Five),
        }
    }

    #[must_use]
    pub const fn cards(self) -> usize {
        match self {
            BonusKind::Three => 3,
            BonusKind::Four => 4,
            BonusKind::Five => 5,
        }
    }
}

/// What a token was awarded for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Goods(Card),
    Bonus(BonusKind),
    LargestHerd,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Goods(card) => write!(f, "{card}"),
            TokenKind::Bonus(bonus) => write!(f, "{}-card bonus", bonus.cards()),
            TokenKind::LargestHerd => f.write_str("largest herd"),
        }
    }
}

impl FromStr for TokenKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "combo_3" | "three_card_bonus" => Ok(TokenKind::Bonus(BonusKind::Three)),
            "combo_4" | "four_card_bonus" => Ok(TokenKind::Bonus(BonusKind::Four)),
            "combo_5" | "five_card_bonus" => Ok(TokenKind::Bonus(BonusKind::Five)),
            "largest_herd" | "camel_bonus" => Ok(TokenKind::LargestHerd),
            _ => match lower.parse::<Card>() {
                Ok(card) if !card.is_camel() => Ok(TokenKind::Goods(card)),
                _ => Err(EngineError::UnknownTokenKind(s.to_string())),
            },
        }
    }
}

/// A single scoring token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    kind: TokenKind,
    value: u32,
}

impl Token {
    /// Create a token, rejecting non-positive values and camel goods tokens.
    pub fn new(kind: TokenKind, value: i64) -> Result<Self, EngineError> {
        if let TokenKind::Goods(card) = kind {
            if card.is_camel() {
                return Err(EngineError::InvalidTokenKind(card));
            }
        }
        let value = u32::try_from(value)
            .ok()
            .filter(|&v| v > 0)
            .ok_or(EngineError::InvalidTokenValue(value))?;
        Ok(Self { kind, value })
    }

    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} token worth {} points", self.kind, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intended_use() {
        let token = Token::new(TokenKind::Goods(Card::Gold), 6).unwrap();
        assert_eq!(token.kind(), TokenKind::Goods(Card::Gold));
        assert_eq!(token.value(), 6);
        assert_eq!(token.to_string(), "gold token worth 6 points");
    }

    #[test]
    fn test_illegal_values() {
        assert_eq!(
            Token::new(TokenKind::Goods(Card::Leather), -3),
            Err(EngineError::InvalidTokenValue(-3))
        );
        assert_eq!(
            Token::new(TokenKind::LargestHerd, 0),
            Err(EngineError::InvalidTokenValue(0))
        );
    }

    #[test]
    fn test_camel_goods_token_rejected() {
        assert_eq!(
            Token::new(TokenKind::Goods(Card::Camel), 5),
            Err(EngineError::InvalidTokenKind(Card::Camel))
        );
    }

    #[test]
    fn test_parse_kinds() {
        assert_eq!("cloth".parse::<TokenKind>(), Ok(TokenKind::Goods(Card::Cloth)));
        assert_eq!("combo_4".parse::<TokenKind>(), Ok(TokenKind::Bonus(BonusKind::Four)));
        assert_eq!("largest_herd".parse::<TokenKind>(), Ok(TokenKind::LargestHerd));
        assert!("pineapple".parse::<TokenKind>().is_err());
        assert!("camel".parse::<TokenKind>().is_err());
    }

    #[test]
    fn test_bonus_for_sale() {
        assert_eq!(BonusKind::for_sale(1), None);
        assert_eq!(BonusKind::for_sale(2), None);
        assert_eq!(BonusKind::for_sale(3), Some(BonusKind::Three));
        assert_eq!(BonusKind::for_sale(4), Some(BonusKind::Four));
        assert_eq!(BonusKind::for_sale(5), Some(BonusKind::Five));
        assert_eq!(BonusKind::for_sale(7), Some(BonusKind::Five));
    }
}
