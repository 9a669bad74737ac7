//! The marketplace: five face-up cards shared by both players.
//!
//! Slot order is visible to players, so a swap puts the incoming card
//! into the exact slot the outgoing card left.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::deck::Deck;
use crate::core::card::{count_of, first_shortfall};
use crate::core::Card;
use crate::error::EngineError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marketplace {
    slots: Vec<Card>,
    capacity: usize,
}

impl Marketplace {
    /// An empty marketplace with room for `capacity` cards.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// A marketplace holding `cards` in slot order.
    #[must_use]
    pub fn with_cards(capacity: usize, cards: Vec<Card>) -> Self {
        Self {
            slots: cards,
            capacity,
        }
    }

    /// Add cards to the end without regard to capacity. Used during setup.
    pub fn place(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.slots.extend(cards);
    }

    /// Draw from the deck until full or the deck is empty.
    ///
    /// Returns the number of cards drawn.
    pub fn refill_from(&mut self, deck: &mut Deck) -> usize {
        let wanted = self.capacity.saturating_sub(self.slots.len());
        let drawn = deck.draw(wanted);
        let count = drawn.len();
        self.slots.extend(drawn);
        trace!(drawn = count, size = self.slots.len(), "market refill");
        count
    }

    /// Replace the first `market_card` with `player_card`, in place.
    ///
    /// Returns the card taken out, or `None` if `market_card` isn't present.
    pub fn swap(&mut self, player_card: Card, market_card: Card) -> Option<Card> {
        let slot = self.slot_of(market_card)?;
        Some(std::mem::replace(&mut self.slots[slot], player_card))
    }

    /// Swap `give[i]` for `take[i]` for every `i`, one pair after another.
    ///
    /// Each pair is a [`swap`](Self::swap) against the market as the previous
    /// pairs left it, so a card put down early can be picked up by a later
    /// pair. Either every pair is swapped or nothing changes.
    pub fn trade(&mut self, give: &[Card], take: &[Card]) -> Result<Vec<Card>, EngineError> {
        let mismatch = || EngineError::MarketMismatch {
            give: give.to_vec(),
            take: take.to_vec(),
        };
        if give.len() != take.len() || self.missing(take).is_some() {
            return Err(mismatch());
        }

        // Swapping only adds cards, so every later pair still finds its target.
        give.iter()
            .zip(take)
            .map(|(&given, &wanted)| self.swap(given, wanted).ok_or_else(mismatch))
            .collect()
    }

    /// Remove one `card`, leaving the other slots in order.
    pub fn take(&mut self, card: Card) -> Option<Card> {
        let slot = self.slot_of(card)?;
        Some(self.slots.remove(slot))
    }

    /// Remove and return every camel.
    pub fn take_camels(&mut self) -> Vec<Card> {
        let camels = vec![Card::Camel; self.camel_count()];
        self.slots.retain(|c| !c.is_camel());
        camels
    }

    /// First card in `cards` the marketplace can't supply, counting repeats.
    #[must_use]
    pub fn missing(&self, cards: &[Card]) -> Option<Card> {
        first_shortfall(cards, |card| self.count(card))
    }

    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        count_of(&self.slots, card)
    }

    #[must_use]
    pub fn camel_count(&self) -> usize {
        self.count(Card::Camel)
    }

    /// Cards in slot order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn slot_of(&self, card: Card) -> Option<usize> {
        self.slots.iter().position(|&c| c == card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Card::*;

    fn market(cards: &[Card]) -> Marketplace {
        Marketplace::with_cards(5, cards.to_vec())
    }

    #[test]
    fn test_swap_keeps_slot() {
        let mut m = market(&[Camel, Gold, Diamond, Leather, Camel]);
        assert_eq!(m.swap(Spice, Diamond), Some(Diamond));
        assert_eq!(m.cards(), &[Camel, Gold, Spice, Leather, Camel]);
        assert_eq!(m.swap(Spice, Silver), None);
    }

    #[test]
    fn test_trade_positional() {
        let mut m = market(&[Camel, Gold, Diamond, Leather, Camel]);
        let taken = m.trade(&[Leather, Camel], &[Diamond, Gold]).unwrap();
        assert_eq!(taken, vec![Diamond, Gold]);
        assert_eq!(m.cards(), &[Camel, Camel, Leather, Leather, Camel]);
    }

    #[test]
    fn test_trade_swaps_pairs_in_order() {
        // The diamond put down for the gold is the first diamond the next pair finds.
        let mut m = market(&[Gold, Silver, Diamond, Spice, Spice]);
        let taken = m.trade(&[Diamond, Cloth], &[Gold, Diamond]).unwrap();
        assert_eq!(taken, vec![Gold, Diamond]);
        assert_eq!(m.cards(), &[Cloth, Silver, Diamond, Spice, Spice]);

        let mut swapped = market(&[Gold, Silver, Diamond, Spice, Spice]);
        swapped.swap(Diamond, Gold);
        swapped.swap(Cloth, Diamond);
        assert_eq!(m, swapped);
    }

    #[test]
    fn test_trade_is_all_or_nothing() {
        let mut m = market(&[Camel, Gold, Diamond, Leather, Camel]);
        let before = m.clone();
        assert!(m.trade(&[Spice, Spice], &[Gold, Gold]).is_err());
        assert!(m.trade(&[Spice], &[Gold, Diamond]).is_err());
        assert_eq!(m, before);
    }

    #[test]
    fn test_take_camels() {
        let mut m = market(&[Camel, Gold, Camel, Leather, Camel]);
        assert_eq!(m.take_camels(), vec![Camel; 3]);
        assert_eq!(m.cards(), &[Gold, Leather]);
        assert!(m.take_camels().is_empty());
    }

    #[test]
    fn test_missing() {
        let m = market(&[Camel, Gold, Gold, Leather, Camel]);
        assert_eq!(m.missing(&[Gold, Gold]), None);
        assert_eq!(m.missing(&[Gold, Gold, Gold]), Some(Gold));
        assert_eq!(m.missing(&[Leather, Diamond]), Some(Diamond));
        assert_eq!(m.missing(&[]), None);
    }

    #[test]
    fn test_refill_stops_when_deck_runs_out() {
        let mut m = market(&[Camel, Gold]);
        let mut deck = Deck::from_cards(vec![Spice, Silver]);
        assert_eq!(m.refill_from(&mut deck), 2);
        assert_eq!(m.len(), 4);
        assert!(deck.is_empty());
        assert_eq!(m.refill_from(&mut deck), 0);
    }

    #[test]
    fn test_refill_to_capacity() {
        let mut m = market(&[Camel]);
        let mut deck = Deck::from_cards(vec![Spice; 10]);
        assert_eq!(m.refill_from(&mut deck), 4);
        assert_eq!(m.len(), 5);
        assert_eq!(deck.len(), 6);
    }

    #[test]
    fn test_take_one() {
        let mut m = market(&[Camel, Gold, Diamond]);
        assert_eq!(m.take(Gold), Some(Gold));
        assert_eq!(m.cards(), &[Camel, Diamond]);
        assert_eq!(m.take(Gold), None);
    }
}
