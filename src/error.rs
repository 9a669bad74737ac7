//! Error types for the Jaipur engine.
//!
//! Two tiers:
//! - [`Rejection`]: a rule violation. State is untouched and the same
//!   player acts again.
//! - [`EngineError`]: a protocol or programming error. Fatal for the call.
//!
//! [`ActionError`] carries either one out of [`Game::apply`](crate::Game::apply).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Card, PlayerId};
use crate::rules::Phase;

/// Why a requested action was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("camels cannot be bought, take them all instead")]
    CamelPurchase,

    #[error("hand already holds {limit} cards")]
    HandFull { limit: usize },

    #[error("the marketplace has no {0}")]
    NotInMarket(Card),

    #[error("camels cannot be sold")]
    CamelSale,

    #[error("must sell at least one card")]
    ZeroAmount,

    #[error("no {0} in hand to sell")]
    NothingToSell(Card),

    #[error("cannot sell {requested} {card}, only {held} held")]
    InsufficientGoods { card: Card, held: usize, requested: usize },

    #[error("{card} must be sold at least {minimum} at a time")]
    BelowMinimumSale { card: Card, minimum: usize },

    #[error("trade offers {give} cards for {take}")]
    TradeLengthMismatch { give: usize, take: usize },

    #[error("a trade must exchange at least {minimum} cards")]
    TradeTooSmall { minimum: usize },

    #[error("camels cannot be taken from the marketplace in a trade")]
    CamelFromMarket,

    #[error("player does not hold enough {0} to offer")]
    PlayerMissing(Card),

    #[error("the marketplace does not hold enough {0}")]
    MarketMissing(Card),

    #[error("trade would leave {size} cards in hand, limit is {limit}")]
    TradeOverflowsHand { size: usize, limit: usize },

    #[error("there are no camels in the marketplace")]
    NoCamelsInMarket,
}

/// Protocol and programming errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unknown card kind: {0:?}")]
    UnknownCard(String),

    #[error("unknown token kind: {0:?}")]
    UnknownTokenKind(String),

    #[error("token value must be a positive integer, got {0}")]
    InvalidTokenValue(i64),

    #[error("no token exists for {0}")]
    InvalidTokenKind(Card),

    #[error("deck holds {available} {card}, {requested} requested")]
    NotEnoughCards {
        card: Card,
        requested: usize,
        available: usize,
    },

    #[error("operation not allowed in phase {0:?}")]
    WrongPhase(Phase),

    #[error("marketplace cannot trade {give:?} for {take:?}")]
    MarketMismatch { give: Vec<Card>, take: Vec<Card> },

    #[error("no seat {0}, Jaipur has exactly two players")]
    InvalidSeat(u8),

    #[error("{0} has no legal action")]
    NoLegalActions(PlayerId),

    #[error("{player} made no acceptable action after {attempts} attempts")]
    ControllerStalled { player: PlayerId, attempts: usize },
}

/// Failure of a submitted action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("action rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl ActionError {
    /// True when the same player may simply try again.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ActionError::Rejected(_))
    }

    /// The rejection reason, if this was a rule violation.
    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ActionError::Rejected(r) => Some(r),
            ActionError::Engine(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable() {
        let rejected = ActionError::from(Rejection::NoCamelsInMarket);
        assert!(rejected.is_recoverable());
        assert_eq!(rejected.rejection(), Some(&Rejection::NoCamelsInMarket));

        let fatal = ActionError::from(EngineError::WrongPhase(Phase::MatchOver));
        assert!(!fatal.is_recoverable());
        assert!(fatal.rejection().is_none());
    }

    #[test]
    fn test_messages() {
        let err = Rejection::BelowMinimumSale {
            card: Card::Diamond,
            minimum: 2,
        };
        assert_eq!(err.to_string(), "diamond must be sold at least 2 at a time");

        let err = EngineError::UnknownCard("pineapple".into());
        assert_eq!(err.to_string(), "unknown card kind: \"pineapple\"");
    }
}
