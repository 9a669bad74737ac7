//! Arranged game positions.
//!
//! A `Position` describes a mid-round table by hand: deck order, market
//! slots, each player's cards and the score so far. It is used to set up
//! puzzles and to reproduce specific situations.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::game::{Game, Phase};
use crate::core::{Card, GameConfig, GameRng, PlayerId, PlayerMap};
use crate::error::EngineError;
use crate::zones::{Deck, Marketplace, TokenSupply};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Deck contents; the last card is drawn first.
    pub deck: Vec<Card>,
    /// Marketplace slots in order.
    pub market: Vec<Card>,
    /// Cards held by each player. Camels are placed in the herd.
    pub holdings: PlayerMap<Vec<Card>>,
    /// Victory points already won.
    pub victory_points: PlayerMap<u32>,
    /// Round being played, starting at 1.
    pub round: u32,
    pub current: PlayerId,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            deck: Vec::new(),
            market: Vec::new(),
            holdings: PlayerMap::with_default(),
            victory_points: PlayerMap::with_default(),
            round: 1,
            current: PlayerId::FIRST,
        }
    }
}

impl Position {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_deck(mut self, cards: &[Card]) -> Self {
        self.deck = cards.to_vec();
        self
    }

    #[must_use]
    pub fn with_market(mut self, cards: &[Card]) -> Self {
        self.market = cards.to_vec();
        self
    }

    #[must_use]
    pub fn with_holdings(mut self, player: PlayerId, cards: &[Card]) -> Self {
        self.holdings[player] = cards.to_vec();
        self
    }

    #[must_use]
    pub fn with_victory_points(mut self, player: PlayerId, points: u32) -> Self {
        self.victory_points[player] = points;
        self
    }

    #[must_use]
    pub fn with_round(mut self, round: u32) -> Self {
        self.round = round;
        self
    }

    #[must_use]
    pub fn with_current(mut self, player: PlayerId) -> Self {
        self.current = player;
        self
    }
}

impl Game {
    /// A game in play at `position`, with full token stacks from `config`.
    ///
    /// If the position already meets the round-over condition the game
    /// starts in [`Phase::RoundScoring`].
    pub fn from_position(
        config: GameConfig,
        mut rng: GameRng,
        position: Position,
    ) -> Result<Self, EngineError> {
        let supply = TokenSupply::from_config(&config, &mut rng)?;
        let market = Marketplace::with_cards(config.market_size, position.market);

        let mut game = Game::new(config, rng);
        game.supply = supply;
        game.deck = Deck::from_cards(position.deck);
        game.market = market;
        for (id, player) in game.players.iter_mut() {
            player.give(&position.holdings[id]);
            for _ in 0..position.victory_points[id] {
                player.add_victory_point();
            }
        }
        game.current = position.current;
        game.next_starter = position.current;
        game.round = position.round;
        game.phase = if game.is_round_over() {
            Phase::RoundScoring
        } else {
            Phase::Playing
        };

        info!(round = game.round, phase = ?game.phase, "position loaded");
        Ok(game)
    }
}
