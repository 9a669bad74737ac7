//! The shared draw pile.
//!
//! Cards are drawn from the end of the underlying `Vec`. `draw` is
//! best-effort and never fails; `take` asks for specific cards and fails
//! when they aren't there.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::card::count_of;
use crate::core::{Card, GameConfig, GameRng};
use crate::error::EngineError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A fresh, unshuffled deck with the configured composition.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        let cards = Card::ALL
            .iter()
            .flat_map(|&card| std::iter::repeat(card).take(config.deck_count(card)))
            .collect();
        Self { cards }
    }

    /// A deck whose next draw is the last card of `cards`.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove up to `n` cards, next card first. Returns fewer if the deck runs out.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let split = self.cards.len().saturating_sub(n);
        let mut drawn = self.cards.split_off(split);
        drawn.reverse();
        trace!(requested = n, drawn = drawn.len(), left = self.cards.len(), "deck draw");
        drawn
    }

    /// Remove exactly `n` cards of kind `card`, searching from the top.
    pub fn take(&mut self, card: Card, n: usize) -> Result<Vec<Card>, EngineError> {
        let available = self.count(card);
        if available < n {
            return Err(EngineError::NotEnoughCards {
                card,
                requested: n,
                available,
            });
        }

        let mut taken = Vec::with_capacity(n);
        while taken.len() < n {
            match self.cards.iter().rposition(|&c| c == card) {
                Some(pos) => taken.push(self.cards.remove(pos)),
                None => break,
            }
        }
        Ok(taken)
    }

    /// The cards `draw(n)` would return, without removing them.
    #[must_use]
    pub fn peek(&self, n: usize) -> Vec<Card> {
        self.cards.iter().rev().take(n).copied().collect()
    }

    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        count_of(&self.cards, card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> Deck {
        Deck::from_config(&GameConfig::default())
    }

    #[test]
    fn test_standard_composition() {
        let deck = standard();
        assert_eq!(deck.len(), 55);
        assert_eq!(deck.count(Card::Camel), 11);
        assert_eq!(deck.count(Card::Diamond), 6);
    }

    #[test]
    fn test_draw_default() {
        let mut deck = standard();
        let drawn = deck.draw(1);
        assert_eq!(drawn.len(), 1);
        assert_eq!(deck.len(), 54);
    }

    #[test]
    fn test_draw_multiple_order() {
        let mut deck = Deck::from_cards(vec![Card::Gold, Card::Silver, Card::Camel]);
        assert_eq!(deck.draw(2), vec![Card::Camel, Card::Silver]);
        assert_eq!(deck.cards(), &[Card::Gold]);
    }

    #[test]
    fn test_draw_too_many_is_best_effort() {
        let mut deck = standard();
        let drawn = deck.draw(100);
        assert_eq!(drawn.len(), 55);
        assert!(deck.is_empty());
        assert!(deck.draw(3).is_empty());
    }

    #[test]
    fn test_take_specific() {
        let mut deck = standard();
        assert_eq!(deck.take(Card::Camel, 1).unwrap(), vec![Card::Camel]);
        assert_eq!(deck.take(Card::Silver, 5).unwrap(), vec![Card::Silver; 5]);
        assert_eq!(deck.len(), 49);
        assert_eq!(deck.count(Card::Silver), 1);
        assert_eq!(deck.count(Card::Diamond), 6);
    }

    #[test]
    fn test_take_too_many_errors_without_change() {
        let mut deck = standard();
        let before = deck.clone();
        assert_eq!(
            deck.take(Card::Camel, 100),
            Err(EngineError::NotEnoughCards {
                card: Card::Camel,
                requested: 100,
                available: 11
            })
        );
        assert_eq!(deck, before);
    }

    #[test]
    fn test_take_absent_kind() {
        let mut deck = Deck::from_cards(vec![Card::Leather]);
        assert!(deck.take(Card::Diamond, 1).is_err());
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_peek_matches_draw() {
        let mut deck = standard();
        deck.shuffle(&mut GameRng::new(3));
        let seen = deck.peek(4);
        assert_eq!(seen.len(), 4);
        assert_eq!(deck.len(), 55);
        assert_eq!(deck.draw(4), seen);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let unshuffled = standard();
        let mut deck = unshuffled.clone();
        deck.shuffle(&mut GameRng::new(42));

        assert_ne!(deck, unshuffled);
        for card in Card::ALL {
            assert_eq!(deck.count(card), unshuffled.count(card));
        }
    }
}
