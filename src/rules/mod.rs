//! The Jaipur rules engine.
//!
//! `Game` owns the deck, marketplace, token supply and both players, and
//! is the only thing that mutates them. `RulesEngine` is the generic face
//! it presents to drivers; `Controller` is how `play_match` asks seats for
//! their moves.

pub mod actions;
pub mod controller;
pub mod engine;
pub mod game;
pub mod position;
pub mod scoring;

pub use controller::{Controller, MAX_ATTEMPTS};
pub use engine::{GameResult, RulesEngine};
pub use game::{BoardView, Game, Phase, PlayerView, TurnOutcome};
pub use position::Position;
pub use scoring::RoundSummary;
