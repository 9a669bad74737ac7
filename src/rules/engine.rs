//! Rules engine trait.
//!
//! The seam a front-end or a search routine drives:
//! - Which actions the current player may take
//! - How an action changes the game
//! - Whether the match is over

use serde::{Deserialize, Serialize};

use crate::core::{Action, GameConfig, PlayerId};
use crate::error::ActionError;

use super::game::TurnOutcome;

/// Result of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Winner(PlayerId),
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// ## Implementation Notes
///
/// - `validate` must not mutate and must agree with `apply_action`
/// - `apply_action` either commits every effect or none
/// - `candidate_actions` may over-approximate; `legal_actions` filters it
pub trait RulesEngine {
    fn config(&self) -> &GameConfig;

    /// The player to act, or `None` outside of play.
    fn active_player(&self) -> Option<PlayerId>;

    /// Check `action` for the active player without changing anything.
    fn validate(&self, action: &Action) -> Result<(), ActionError>;

    /// Validate then execute `action` for the active player.
    fn apply_action(&mut self, action: &Action) -> Result<TurnOutcome, ActionError>;

    /// `Some(result)` once the match has been decided.
    fn is_terminal(&self) -> Option<GameResult>;

    /// Actions worth checking for the active player. May include illegal ones.
    fn candidate_actions(&self) -> Vec<Action>;

    /// Every action `apply_action` would accept right now.
    fn legal_actions(&self) -> Vec<Action> {
        self.candidate_actions()
            .into_iter()
            .filter(|action| self.validate(action).is_ok())
            .collect()
    }
}
