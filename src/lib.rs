//! # jaipur
//!
//! A rules engine for Jaipur, the two-player goods-trading card game.
//!
//! ## Design Principles
//!
//! 1. **Structured actions in, structured results out**: the engine never
//!    parses text or renders the board. Front-ends submit `Action`s and
//!    read `BoardView`s.
//!
//! 2. **All or nothing**: every action is fully checked before anything
//!    moves. A rejected action changes nothing and the same player goes again.
//!
//! 3. **Seeded randomness**: shuffling is the only random step and it goes
//!    through `GameRng`, so a seed reproduces a whole match.
//!
//! ## Modules
//!
//! - `core`: cards, tokens, players, actions, RNG, configuration
//! - `zones`: deck, marketplace and token stacks
//! - `rules`: the game state machine, scoring and the match driver
//! - `error`: rejection reasons and engine errors
//!
//! ## Example
//!
//! ```
//! use jaipur::{Action, Game, Phase};
//!
//! let mut game = Game::with_seed(42);
//! game.setup_round().unwrap();
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! // The opening marketplace always holds camels.
//! game.apply(&Action::TakeCamels).unwrap();
//! assert_eq!(game.market().len(), 5);
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, BonusKind, Card, GameConfig, GameRng, Player, PlayerId,
    PlayerMap, SellAmount, Token, TokenKind, TradeCards,
};

pub use crate::error::{ActionError, EngineError, Rejection};

pub use crate::rules::{
    BoardView, Controller, Game, GameResult, Phase, PlayerView, Position, RoundSummary,
    RulesEngine, TurnOutcome,
};

pub use crate::zones::{Deck, Marketplace, SupplyCounts, TokenStack, TokenSupply};
