//! Card vocabulary.
//!
//! Six goods kinds plus the camel. Camels never enter a hand: they are
//! kept in the herd and can't be sold. `Card::is_camel` is the one place
//! that distinction is made.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// A single card kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Card {
    Diamond,
    Gold,
    Silver,
    Cloth,
    Spice,
    Leather,
    Camel,
}

impl Card {
    /// The six goods kinds, most valuable first.
    pub const GOODS: [Card; 6] = [
        Card::Diamond,
        Card::Gold,
        Card::Silver,
        Card::Cloth,
        Card::Spice,
        Card::Leather,
    ];

    /// Every card kind, goods then camel.
    pub const ALL: [Card; 7] = [
        Card::Diamond,
        Card::Gold,
        Card::Silver,
        Card::Cloth,
        Card::Spice,
        Card::Leather,
        Card::Camel,
    ];

    #[must_use]
    pub const fn is_camel(self) -> bool {
        matches!(self, Card::Camel)
    }

    /// High-value goods that can only be sold in pairs or more.
    #[must_use]
    pub const fn is_precious(self) -> bool {
        matches!(self, Card::Diamond | Card::Gold | Card::Silver)
    }

    /// Smallest number of this card that may be sold at once.
    #[must_use]
    pub const fn min_sale(self) -> usize {
        if self.is_precious() {
            2
        } else {
            1
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Card::Diamond => "diamond",
            Card::Gold => "gold",
            Card::Silver => "silver",
            Card::Cloth => "cloth",
            Card::Spice => "spice",
            Card::Leather => "leather",
            Card::Camel => "camel",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Card {
    type Err = EngineError;

    /// Parse a card name. Case-insensitive; plurals and the
    /// "silk"/"spices" aliases are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let card = match lower.as_str() {
            "diamond" | "diamonds" => Card::Diamond,
            "gold" => Card::Gold,
            "silver" => Card::Silver,
            "cloth" | "silk" => Card::Cloth,
            "spice" | "spices" => Card::Spice,
            "leather" => Card::Leather,
            "camel" | "camels" => Card::Camel,
            _ => return Err(EngineError::UnknownCard(s.to_string())),
        };
        Ok(card)
    }
}

/// Count how many of `card` appear in `cards`.
pub(crate) fn count_of(cards: &[Card], card: Card) -> usize {
    cards.iter().filter(|&&c| c == card).count()
}

/// First kind in `wanted` that `available` can't cover, counting repeats.
///
/// `available` maps a card kind to how many are on hand.
pub(crate) fn first_shortfall(wanted: &[Card], available: impl Fn(Card) -> usize) -> Option<Card> {
    wanted
        .iter()
        .copied()
        .find(|&card| count_of(wanted, card) > available(card))
}
