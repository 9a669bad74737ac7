//! Turn resolution: validating and executing the four actions.
//!
//! Checks are pure and run in full before anything is touched, so a
//! rejected action leaves the game exactly as it was and the same player
//! acts again.

use smallvec::SmallVec;
use tracing::debug;

use super::engine::{GameResult, RulesEngine};
use super::game::{Game, Phase, TurnOutcome};
use crate::core::{Action, ActionRecord, BonusKind, Card, GameConfig, PlayerId, SellAmount};
use crate::error::{ActionError, EngineError, Rejection};

impl Game {
    /// Play `action` for the current player.
    ///
    /// On success the turn passes and, if the round-over condition now
    /// holds, the game moves to [`Phase::RoundScoring`].
    pub fn apply(&mut self, action: &Action) -> Result<TurnOutcome, ActionError> {
        self.ensure_playing()?;
        if let Err(rejection) = self.check(action) {
            debug!(player = %self.current, %action, %rejection, "action rejected");
            return Err(rejection.into());
        }

        let mut outcome = self.execute(action)?;

        self.turn += 1;
        self.history.push(ActionRecord::new(
            self.current,
            outcome.action.clone(),
            self.round,
            self.turn,
        ));
        debug!(
            player = %self.current,
            action = %outcome.action,
            round = self.round,
            turn = self.turn,
            tokens = outcome.tokens.len(),
            "action applied"
        );

        self.current = self.current.opponent();
        if self.is_round_over() {
            outcome.round_over = true;
            self.phase = Phase::RoundScoring;
        }
        Ok(outcome)
    }

    /// Whether `action` would be accepted for the current player.
    pub fn check_action(&self, action: &Action) -> Result<(), ActionError> {
        self.ensure_playing()?;
        self.check(action).map_err(ActionError::from)
    }

    fn ensure_playing(&self) -> Result<(), EngineError> {
        if self.phase == Phase::Playing {
            Ok(())
        } else {
            Err(EngineError::WrongPhase(self.phase))
        }
    }

    fn check(&self, action: &Action) -> Result<(), Rejection> {
        match action {
            Action::Buy(card) => self.check_buy(*card),
            Action::Sell { goods, amount } => self.check_sell(*goods, *amount).map(|_| ()),
            Action::Trade { give, take } => self.check_trade(give, take),
            Action::TakeCamels => self.check_take_camels(),
        }
    }

    fn check_buy(&self, card: Card) -> Result<(), Rejection> {
        if card.is_camel() {
            return Err(Rejection::CamelPurchase);
        }
        let limit = self.config.hand_limit;
        if self.players[self.current].hand_size() >= limit {
            return Err(Rejection::HandFull { limit });
        }
        if self.market.missing(&[card]).is_some() {
            return Err(Rejection::NotInMarket(card));
        }
        Ok(())
    }

    /// Returns the resolved number of cards to sell.
    fn check_sell(&self, goods: Card, amount: SellAmount) -> Result<usize, Rejection> {
        if goods.is_camel() {
            return Err(Rejection::CamelSale);
        }
        let held = self.players[self.current].count(goods);
        if held == 0 {
            return Err(Rejection::NothingToSell(goods));
        }
        let requested = amount.resolve(held);
        if requested == 0 {
            return Err(Rejection::ZeroAmount);
        }
        if requested > held {
            return Err(Rejection::InsufficientGoods {
                card: goods,
                held,
                requested,
            });
        }
        if requested < goods.min_sale() {
            return Err(Rejection::BelowMinimumSale {
                card: goods,
                minimum: goods.min_sale(),
            });
        }
        Ok(requested)
    }

    fn check_trade(&self, give: &[Card], take: &[Card]) -> Result<(), Rejection> {
        if give.len() != take.len() {
            return Err(Rejection::TradeLengthMismatch {
                give: give.len(),
                take: take.len(),
            });
        }
        let minimum = self.config.min_trade;
        if give.len() < minimum {
            return Err(Rejection::TradeTooSmall { minimum });
        }
        if take.iter().any(|c| c.is_camel()) {
            return Err(Rejection::CamelFromMarket);
        }

        let player = &self.players[self.current];
        if let Some(card) = player.missing(give) {
            return Err(Rejection::PlayerMissing(card));
        }
        if let Some(card) = self.market.missing(take) {
            return Err(Rejection::MarketMissing(card));
        }

        // Camels offered come out of the herd, so they free no hand space.
        let goods_given = give.iter().filter(|c| !c.is_camel()).count();
        let size = player.hand_size() - goods_given + take.len();
        let limit = self.config.hand_limit;
        if size > limit {
            return Err(Rejection::TradeOverflowsHand { size, limit });
        }
        Ok(())
    }

    fn check_take_camels(&self) -> Result<(), Rejection> {
        if self.market.camel_count() == 0 {
            return Err(Rejection::NoCamelsInMarket);
        }
        Ok(())
    }

    /// Carry out an already checked action.
    fn execute(&mut self, action: &Action) -> Result<TurnOutcome, EngineError> {
        let player = self.current;
        match action {
            Action::Buy(card) => self.execute_buy(player, *card),
            Action::Sell { goods, amount } => {
                let held = self.players[player].count(*goods);
                self.execute_sell(player, *goods, amount.resolve(held))
            }
            Action::Trade { give, take } => self.execute_trade(player, give, take),
            Action::TakeCamels => Ok(self.execute_take_camels(player)),
        }
    }

    fn execute_buy(&mut self, player: PlayerId, card: Card) -> Result<TurnOutcome, EngineError> {
        let bought = self
            .market
            .take(card)
            .ok_or_else(|| EngineError::MarketMismatch {
                give: Vec::new(),
                take: vec![card],
            })?;
        self.players[player].give(&[bought]);

        let mut outcome = TurnOutcome::new(player, Action::Buy(card));
        outcome.gained.push(bought);
        outcome.refilled = self.market.refill_from(&mut self.deck);
        Ok(outcome)
    }

    fn execute_sell(
        &mut self,
        player: PlayerId,
        goods: Card,
        amount: usize,
    ) -> Result<TurnOutcome, EngineError> {
        let sold = vec![goods; amount];
        self.players[player].take(&sold)?;

        let mut tokens = self.supply.draw_goods(goods, amount);
        if let Some(bonus) = BonusKind::for_sale(amount).and_then(|b| self.supply.draw_bonus(b)) {
            tokens.push(bonus);
        }
        self.players[player].award_tokens(tokens.iter().copied());
        self.discard.extend_from_slice(&sold);

        let mut outcome = TurnOutcome::new(player, Action::sell(goods, amount));
        outcome.given = sold;
        outcome.tokens = tokens;
        Ok(outcome)
    }

    fn execute_trade(
        &mut self,
        player: PlayerId,
        give: &[Card],
        take: &[Card],
    ) -> Result<TurnOutcome, EngineError> {
        self.players[player].take(give)?;
        let taken = self.market.trade(give, take)?;
        self.players[player].give(&taken);

        let mut outcome = TurnOutcome::new(player, Action::trade(give, take));
        outcome.given = give.to_vec();
        outcome.gained = taken;
        Ok(outcome)
    }

    fn execute_take_camels(&mut self, player: PlayerId) -> TurnOutcome {
        let camels = self.market.take_camels();
        self.players[player].give(&camels);

        let mut outcome = TurnOutcome::new(player, Action::TakeCamels);
        outcome.gained = camels;
        outcome.refilled = self.market.refill_from(&mut self.deck);
        outcome
    }

    fn candidates(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.phase != Phase::Playing {
            return actions;
        }
        let player = &self.players[self.current];

        actions.push(Action::TakeCamels);

        for card in Card::GOODS {
            if self.market.count(card) > 0 {
                actions.push(Action::Buy(card));
            }
        }

        for card in Card::GOODS {
            for amount in 1..=player.count(card) {
                actions.push(Action::sell(card, amount));
            }
        }

        let offer: Vec<(Card, usize)> = Card::ALL.iter().map(|&c| (c, player.count(c))).collect();
        let wanted: Vec<(Card, usize)> = Card::GOODS
            .iter()
            .map(|&c| (c, self.market.count(c)))
            .collect();
        for size in self.config.min_trade..=self.market.len() {
            let takes = multisets(&wanted, size);
            if takes.is_empty() {
                continue;
            }
            for give in multisets(&offer, size) {
                for take in &takes {
                    actions.push(Action::Trade {
                        give: give.clone(),
                        take: take.clone(),
                    });
                }
            }
        }

        actions
    }
}

/// Every multiset of exactly `size` cards drawable from `counts`.
fn multisets(counts: &[(Card, usize)], size: usize) -> Vec<SmallVec<[Card; 5]>> {
    fn go(
        counts: &[(Card, usize)],
        size: usize,
        current: &mut SmallVec<[Card; 5]>,
        out: &mut Vec<SmallVec<[Card; 5]>>,
    ) {
        if current.len() == size {
            out.push(current.clone());
            return;
        }
        let Some((&(card, available), rest)) = counts.split_first() else {
            return;
        };
        let room = size - current.len();
        for n in (0..=available.min(room)).rev() {
            current.extend(std::iter::repeat(card).take(n));
            go(rest, size, current, out);
            current.truncate(current.len() - n);
        }
    }

    let mut out = Vec::new();
    go(counts, size, &mut SmallVec::new(), &mut out);
    out
}

impl RulesEngine for Game {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn active_player(&self) -> Option<PlayerId> {
        (self.phase == Phase::Playing).then_some(self.current)
    }

    fn validate(&self, action: &Action) -> Result<(), ActionError> {
        self.check_action(action)
    }

    fn apply_action(&mut self, action: &Action) -> Result<TurnOutcome, ActionError> {
        self.apply(action)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.result
    }

    fn candidate_actions(&self) -> Vec<Action> {
        self.candidates()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multisets() {
        let counts = [(Card::Gold, 2), (Card::Spice, 1), (Card::Camel, 0)];
        let two = multisets(&counts, 2);
        assert_eq!(two.len(), 2);
        assert!(two.iter().any(|m| m.as_slice() == [Card::Gold, Card::Gold]));
        assert!(two.iter().any(|m| m.as_slice() == [Card::Gold, Card::Spice]));

        assert_eq!(multisets(&counts, 3).len(), 1);
        assert!(multisets(&counts, 4).is_empty());
    }

    #[test]
    fn test_apply_outside_play_is_fatal() {
        let mut game = Game::with_seed(1);
        let err = game.apply(&Action::TakeCamels).unwrap_err();
        assert_eq!(err, ActionError::Engine(EngineError::WrongPhase(Phase::Setup)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_opening_take_camels() {
        let mut game = Game::with_seed(5);
        game.setup_round().unwrap();
        let camels = game.market().camel_count();
        let herd = game.player(PlayerId::FIRST).herd_size();

        let outcome = game.apply(&Action::TakeCamels).unwrap();

        assert_eq!(outcome.gained.len(), camels);
        assert_eq!(game.player(PlayerId::FIRST).herd_size(), herd + camels);
        assert_eq!(game.market().len(), 5);
        assert_eq!(game.current_player(), PlayerId::SECOND);
        assert_eq!(game.history().len(), 1);
    }
}
