//! Structured player actions.
//!
//! The engine never parses text. A front-end turns "trade leather camel
//! for diamond gold" into [`Action::Trade`] and submits that.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::card::Card;
use super::player::PlayerId;

/// Cards named in a trade. Trades rarely exceed the marketplace size.
pub type TradeCards = SmallVec<[Card; 5]>;

/// How many cards a sale covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SellAmount {
    Exactly(usize),
    /// Everything of that kind in hand.
    All,
}

impl SellAmount {
    /// Resolve against the number of cards held.
    #[must_use]
    pub fn resolve(self, held: usize) -> usize {
        match self {
            SellAmount::Exactly(n) => n,
            SellAmount::All => held,
        }
    }
}

/// One turn's worth of intent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Take one goods card from the marketplace.
    Buy(Card),

    /// Swap cards from hand or herd for marketplace cards, paired by position.
    Trade { give: TradeCards, take: TradeCards },

    /// Sell goods from hand for tokens.
    Sell { goods: Card, amount: SellAmount },

    /// Take every camel in the marketplace.
    TakeCamels,
}

impl Action {
    #[must_use]
    pub fn buy(card: Card) -> Self {
        Action::Buy(card)
    }

    #[must_use]
    pub fn sell(goods: Card, amount: usize) -> Self {
        Action::Sell {
            goods,
            amount: SellAmount::Exactly(amount),
        }
    }

    #[must_use]
    pub fn sell_all(goods: Card) -> Self {
        Action::Sell {
            goods,
            amount: SellAmount::All,
        }
    }

    #[must_use]
    pub fn trade(give: &[Card], take: &[Card]) -> Self {
        Action::Trade {
            give: SmallVec::from_slice(give),
            take: SmallVec::from_slice(take),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
            for (i, card) in cards.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{card}")?;
            }
            Ok(())
        }

        match self {
            Action::Buy(card) => write!(f, "buy {card}"),
            Action::Sell {
                goods,
                amount: SellAmount::Exactly(n),
            } => write!(f, "sell {n} {goods}"),
            Action::Sell {
                goods,
                amount: SellAmount::All,
            } => write!(f, "sell all {goods}"),
            Action::Trade { give, take } => {
                f.write_str("trade ")?;
                list(f, give)?;
                f.write_str(" for ")?;
                list(f, take)
            }
            Action::TakeCamels => f.write_str("camels"),
        }
    }
}

/// An accepted action with its position in the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub action: Action,
    pub round: u32,
    /// Turn number within the round, starting at 1.
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, turn: u32) -> Self {
        Self {
            player,
            action,
            round,
            turn,
        }
    }
}
