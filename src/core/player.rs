//! Players and per-player storage.
//!
//! ## PlayerId
//!
//! One of the two seats. `PlayerId(0)` moves first in the opening round.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! Hand, herd, tokens and victory points. Camels always go to the herd;
//! `count`, `missing`, `take` and `give` hide that split from callers.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::card::{count_of, first_shortfall, Card};
use super::token::Token;
use crate::error::EngineError;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    pub const FIRST: PlayerId = PlayerId(0);
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a player ID. Only 0 and 1 are valid seats.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 2, "Jaipur has exactly two players");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both seats in turn order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = EngineError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if id < 2 {
            Ok(Self(id))
        } else {
            Err(EngineError::InvalidSeat(id))
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// One value per player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Build both entries from a factory.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Build from explicit values for the first and second player.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::both().zip(self.data.iter_mut())
    }

    /// Apply `f` to each entry.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> PlayerMap<U> {
        PlayerMap {
            data: [f(&self.data[0]), f(&self.data[1])],
        }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A player's holdings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    hand: Vec<Card>,
    herd: Vec<Card>,
    tokens: Vec<Token>,
    victory_points: u32,
}

impl Player {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many of `card` this player holds. Camels are counted in the herd.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        if card.is_camel() {
            self.herd.len()
        } else {
            count_of(&self.hand, card)
        }
    }

    /// First card in `cards` this player can't supply, counting repeats.
    #[must_use]
    pub fn missing(&self, cards: &[Card]) -> Option<Card> {
        first_shortfall(cards, |card| self.count(card))
    }

    /// Remove `cards` from hand and herd. Nothing is removed on failure.
    pub fn take(&mut self, cards: &[Card]) -> Result<(), EngineError> {
        if let Some(card) = self.missing(cards) {
            return Err(EngineError::NotEnoughCards {
                card,
                requested: count_of(cards, card),
                available: self.count(card),
            });
        }

        for &card in cards {
            let pile = if card.is_camel() {
                &mut self.herd
            } else {
                &mut self.hand
            };
            if let Some(pos) = pile.iter().rposition(|&c| c == card) {
                pile.remove(pos);
            }
        }
        Ok(())
    }

    /// Add cards, sending camels to the herd.
    pub fn give(&mut self, cards: &[Card]) {
        for &card in cards {
            if card.is_camel() {
                self.herd.push(card);
            } else {
                self.hand.push(card);
            }
        }
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn herd_size(&self) -> usize {
        self.herd.len()
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Sum of all token values earned this round.
    #[must_use]
    pub fn token_total(&self) -> u32 {
        self.tokens.iter().map(Token::value).sum()
    }

    pub fn award_tokens(&mut self, tokens: impl IntoIterator<Item = Token>) {
        self.tokens.extend(tokens);
    }

    #[must_use]
    pub fn victory_points(&self) -> u32 {
        self.victory_points
    }

    pub fn add_victory_point(&mut self) {
        self.victory_points += 1;
    }

    /// Clear hand, herd and tokens. Victory points carry over.
    pub fn reset_for_round(&mut self) {
        self.hand.clear();
        self.herd.clear();
        self.tokens.clear();
    }
}
