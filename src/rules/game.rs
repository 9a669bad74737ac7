//! The Jaipur game: state, round setup and read-only views.
//!
//! ## Lifecycle
//!
//! ```text
//! Setup -> Playing -> RoundScoring -> Setup (next round)
//!                                  \-> MatchOver
//! ```
//!
//! `setup_round` deals a round, `apply` plays turns until the round-over
//! condition holds, and `score_round` awards victory points and decides
//! whether another round is needed. Action rules live in `actions`,
//! scoring in `scoring`.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::engine::GameResult;
use super::scoring::RoundSummary;
use crate::core::{
    Action, ActionRecord, Card, GameConfig, GameRng, Player, PlayerId, PlayerMap, Token,
};
use crate::error::EngineError;
use crate::zones::{Deck, Marketplace, SupplyCounts, TokenSupply};

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for `setup_round`.
    Setup,
    /// Turns are being played.
    Playing,
    /// The round has ended and must be scored.
    RoundScoring,
    /// The match has been decided.
    MatchOver,
}

/// What an accepted action did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub player: PlayerId,
    /// The action as executed, with `SellAmount::All` resolved.
    pub action: Action,
    /// Cards that left the player's hand or herd.
    pub given: Vec<Card>,
    /// Cards the player received.
    pub gained: Vec<Card>,
    pub tokens: Vec<Token>,
    /// Cards drawn from the deck into the marketplace.
    pub refilled: usize,
    /// True if this action ended the round.
    pub round_over: bool,
}

impl TurnOutcome {
    pub(crate) fn new(player: PlayerId, action: Action) -> Self {
        Self {
            player,
            action,
            given: Vec::new(),
            gained: Vec::new(),
            tokens: Vec::new(),
            refilled: 0,
            round_over: false,
        }
    }
}

/// One player's holdings as a renderer sees them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub hand: Vec<Card>,
    pub herd_size: usize,
    pub tokens: Vec<Token>,
    pub token_total: u32,
    pub victory_points: u32,
}

/// Snapshot of everything on the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub round: u32,
    pub phase: Phase,
    pub current_player: PlayerId,
    pub market: Vec<Card>,
    pub deck_size: usize,
    pub supply: SupplyCounts,
    pub players: PlayerMap<PlayerView>,
}

/// A two-player Jaipur match.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) rng: GameRng,
    pub(crate) deck: Deck,
    pub(crate) market: Marketplace,
    pub(crate) supply: TokenSupply,
    pub(crate) players: PlayerMap<Player>,
    /// Sold goods, out of play until the next round.
    pub(crate) discard: Vec<Card>,
    pub(crate) current: PlayerId,
    /// Who opens the next round to be set up.
    pub(crate) next_starter: PlayerId,
    pub(crate) phase: Phase,
    pub(crate) round: u32,
    pub(crate) turn: u32,
    pub(crate) history: Vec<ActionRecord>,
    pub(crate) rounds: Vec<RoundSummary>,
    pub(crate) result: Option<GameResult>,
}

impl Game {
    /// A match that has not been dealt yet. Call `setup_round` to start.
    #[must_use]
    pub fn new(config: GameConfig, rng: GameRng) -> Self {
        let market = Marketplace::new(config.market_size);
        Self {
            config,
            rng,
            deck: Deck::default(),
            market,
            supply: TokenSupply::default(),
            players: PlayerMap::with_default(),
            discard: Vec::new(),
            current: PlayerId::FIRST,
            next_starter: PlayerId::FIRST,
            phase: Phase::Setup,
            round: 0,
            turn: 0,
            history: Vec::new(),
            rounds: Vec::new(),
            result: None,
        }
    }

    /// Standard rules with a seeded shuffle.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameConfig::default(), GameRng::new(seed))
    }

    /// Deal a new round.
    ///
    /// Rebuilds the token stacks and the deck, seeds the marketplace with
    /// camels and deals each player a hand. Victory points carry over.
    pub fn setup_round(&mut self) -> Result<(), EngineError> {
        if self.phase != Phase::Setup {
            return Err(EngineError::WrongPhase(self.phase));
        }

        // Shuffle on a copy so a failed setup leaves the RNG where it was.
        let mut rng = self.rng.clone();
        let supply = TokenSupply::from_config(&self.config, &mut rng)?;

        let mut deck = Deck::from_config(&self.config);
        deck.shuffle(&mut rng);

        let mut market = Marketplace::new(self.config.market_size);
        market.place(deck.take(Card::Camel, self.config.market_camels)?);
        market.refill_from(&mut deck);

        let starter = self.next_starter;
        for player in [starter, starter.opponent()] {
            let hand = deck.draw(self.config.hand_size);
            let seat = &mut self.players[player];
            seat.reset_for_round();
            seat.give(&hand);
        }

        self.rng = rng;
        self.supply = supply;
        self.deck = deck;
        self.market = market;
        self.discard.clear();
        self.current = starter;
        self.round += 1;
        self.turn = 0;
        self.phase = Phase::Playing;

        info!(
            round = self.round,
            seed = self.rng.seed(),
            starter = %starter,
            market = ?self.market.cards(),
            deck = self.deck.len(),
            "round dealt"
        );

        if self.is_round_over() {
            self.phase = Phase::RoundScoring;
        }
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rounds dealt so far, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn market(&self) -> &Marketplace {
        &self.market
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn supply(&self) -> &TokenSupply {
        &self.supply
    }

    /// Goods sold this round.
    #[must_use]
    pub fn discarded(&self) -> &[Card] {
        &self.discard
    }

    /// Accepted actions across the whole match.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Summaries of every scored round.
    #[must_use]
    pub fn rounds(&self) -> &[RoundSummary] {
        &self.rounds
    }

    /// The match result, once decided.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Cards currently in the deck, marketplace, hands, herds and discard.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        let held: usize = self
            .players
            .iter()
            .map(|(_, p)| p.hand_size() + p.herd_size())
            .sum();
        self.deck.len() + self.market.len() + held + self.discard.len()
    }

    /// Everything a renderer needs, in one serializable value.
    #[must_use]
    pub fn board(&self) -> BoardView {
        BoardView {
            round: self.round,
            phase: self.phase,
            current_player: self.current,
            market: self.market.cards().to_vec(),
            deck_size: self.deck.len(),
            supply: self.supply.counts(),
            players: self.players.map(|p| PlayerView {
                hand: p.hand().to_vec(),
                herd_size: p.herd_size(),
                tokens: p.tokens().to_vec(),
                token_total: p.token_total(),
                victory_points: p.victory_points(),
            }),
        }
    }
}
