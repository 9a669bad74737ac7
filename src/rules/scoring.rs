//! Round end and match progression.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::info;

use super::engine::GameResult;
use super::game::{Game, Phase};
use crate::core::{PlayerId, PlayerMap, Token, TokenKind};
use crate::error::EngineError;

/// How a round was scored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub herd_sizes: PlayerMap<usize>,
    /// Holder of the largest herd token. `None` when herds are equal.
    pub largest_herd: Option<PlayerId>,
    /// Token totals including the largest herd token.
    pub totals: PlayerMap<u32>,
    /// `None` when totals are equal and both players score.
    pub winner: Option<PlayerId>,
    /// Victory points after this round.
    pub victory_points: PlayerMap<u32>,
}

impl Game {
    /// True when the deck is empty or enough goods stacks have run out.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.deck.is_empty()
            || self.supply.depleted_goods_count() >= self.config.depleted_stacks_to_end
    }

    /// Score the finished round and decide whether the match continues.
    ///
    /// Leaves the game in [`Phase::Setup`] for the next round or in
    /// [`Phase::MatchOver`].
    pub fn score_round(&mut self) -> Result<RoundSummary, EngineError> {
        if self.phase != Phase::RoundScoring {
            return Err(EngineError::WrongPhase(self.phase));
        }

        let herd_sizes = self.players.map(|p| p.herd_size());
        let largest_herd = leader(herd_sizes[PlayerId::FIRST], herd_sizes[PlayerId::SECOND]);
        if let Some(holder) = largest_herd {
            let token = Token::new(TokenKind::LargestHerd, self.config.largest_herd_value)?;
            self.players[holder].award_tokens([token]);
        }

        let totals = self.players.map(|p| p.token_total());
        let winner = leader(totals[PlayerId::FIRST], totals[PlayerId::SECOND]);
        match winner {
            Some(player) => self.players[player].add_victory_point(),
            None => {
                for (_, player) in self.players.iter_mut() {
                    player.add_victory_point();
                }
            }
        }

        // The loser opens the next round; after a drawn round the seats alternate.
        self.next_starter = match winner {
            Some(player) => player.opponent(),
            None => self.next_starter.opponent(),
        };

        let summary = RoundSummary {
            round: self.round,
            herd_sizes,
            largest_herd,
            totals,
            winner,
            victory_points: self.players.map(|p| p.victory_points()),
        };
        info!(
            round = summary.round,
            winner = ?summary.winner,
            totals = ?summary.totals,
            largest_herd = ?summary.largest_herd,
            "round scored"
        );
        self.rounds.push(summary.clone());

        match self.decide_match() {
            Some(result) => {
                info!(?result, rounds = self.round, "match over");
                self.result = Some(result);
                self.phase = Phase::MatchOver;
            }
            None => self.phase = Phase::Setup,
        }
        Ok(summary)
    }

    fn decide_match(&self) -> Option<GameResult> {
        let target = self.config.victory_points_to_win;
        let first = self.players[PlayerId::FIRST].victory_points();
        let second = self.players[PlayerId::SECOND].victory_points();

        if first < target && second < target && self.round < self.config.max_rounds {
            return None;
        }
        Some(match leader(first, second) {
            Some(player) => GameResult::Winner(player),
            None => GameResult::Draw,
        })
    }
}

/// The player with the strictly larger value.
fn leader<T: Ord>(first: T, second: T) -> Option<PlayerId> {
    match first.cmp(&second) {
        Ordering::Greater => Some(PlayerId::FIRST),
        Ordering::Less => Some(PlayerId::SECOND),
        Ordering::Equal => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leader() {
        assert_eq!(leader(3, 1), Some(PlayerId::FIRST));
        assert_eq!(leader(1, 3), Some(PlayerId::SECOND));
        assert_eq!(leader(2, 2), None);
    }

    #[test]
    fn test_score_requires_finished_round() {
        let mut game = Game::with_seed(1);
        game.setup_round().unwrap();
        assert_eq!(
            game.score_round(),
            Err(EngineError::WrongPhase(Phase::Playing))
        );
    }
}
