//! Core vocabulary: cards, tokens, players, actions, RNG, configuration.

pub mod action;
pub mod card;
pub mod config;
pub mod player;
pub mod rng;
pub mod token;

pub use action::{Action, ActionRecord, SellAmount, TradeCards};
pub use card::Card;
pub use config::GameConfig;
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use token::{BonusKind, Token, TokenKind};
