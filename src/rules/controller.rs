//! Player controllers and the match driver.
//!
//! The engine never reads input. A controller is handed the board and the
//! list of legal actions and picks one; `Game::play_match` runs a whole
//! match by asking the controllers in turn.

use tracing::{debug, warn};

use super::engine::{GameResult, RulesEngine};
use super::game::{BoardView, Game, Phase};
use crate::core::{Action, PlayerMap};
use crate::error::{ActionError, EngineError, Rejection};

/// Attempts a controller gets to produce an acceptable action each turn.
pub const MAX_ATTEMPTS: usize = 16;

/// Chooses actions for one seat.
pub trait Controller {
    /// Pick an action. Returning something outside `legal` is allowed; it is
    /// rejected and the controller is asked again.
    fn choose_action(&mut self, board: &BoardView, legal: &[Action]) -> Action;

    /// Called when the chosen action was refused.
    fn on_rejected(&mut self, _action: &Action, _reason: &Rejection) {}
}

impl Game {
    /// Play the match to the end, dealing and scoring rounds as needed.
    pub fn play_match(
        &mut self,
        controllers: &mut PlayerMap<Box<dyn Controller>>,
    ) -> Result<GameResult, EngineError> {
        loop {
            match self.phase {
                Phase::Setup => self.setup_round()?,
                Phase::Playing => self.play_turn(controllers)?,
                Phase::RoundScoring => {
                    self.score_round()?;
                }
                Phase::MatchOver => {
                    return self.result.ok_or(EngineError::WrongPhase(Phase::MatchOver));
                }
            }
        }
    }

    fn play_turn(
        &mut self,
        controllers: &mut PlayerMap<Box<dyn Controller>>,
    ) -> Result<(), EngineError> {
        let player = self.current;
        let legal = self.legal_actions();
        if legal.is_empty() {
            return Err(EngineError::NoLegalActions(player));
        }

        let controller = &mut controllers[player];
        for attempt in 1..=MAX_ATTEMPTS {
            let action = controller.choose_action(&self.board(), &legal);
            match self.apply(&action) {
                Ok(outcome) => {
                    debug!(%player, attempt, round_over = outcome.round_over, "turn played");
                    return Ok(());
                }
                Err(ActionError::Rejected(reason)) => {
                    warn!(%player, %action, %reason, attempt, "controller action refused");
                    controller.on_rejected(&action, &reason);
                }
                Err(ActionError::Engine(err)) => return Err(err),
            }
        }
        Err(EngineError::ControllerStalled {
            player,
            attempts: MAX_ATTEMPTS,
        })
    }
}
