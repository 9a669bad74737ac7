//! Property-based tests for card conservation and action atomicity.

use proptest::prelude::*;
use proptest::sample::Index;

use jaipur::{
    Action, Card, Deck, Game, GameRng, Phase, PlayerId, RulesEngine, TokenKind, TokenStack,
};

fn card() -> impl Strategy<Value = Card> {
    prop::sample::select(Card::ALL.to_vec())
}

/// Any action, legal or not.
fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        card().prop_map(Action::Buy),
        (card(), 0usize..8).prop_map(|(c, n)| Action::sell(c, n)),
        card().prop_map(Action::sell_all),
        (
            prop::collection::vec(card(), 0..6),
            prop::collection::vec(card(), 0..6)
        )
            .prop_map(|(give, take)| Action::trade(&give, &take)),
        Just(Action::TakeCamels),
    ]
}

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort();
    cards
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Random legal play never loses or creates cards and keeps the table in shape.
    #[test]
    fn prop_legal_play_conserves_cards(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<Index>(), 1..150)
    ) {
        let mut game = Game::with_seed(seed);
        game.setup_round().unwrap();

        for pick in picks {
            if game.phase() != Phase::Playing {
                break;
            }
            let legal = game.legal_actions();
            prop_assert!(!legal.is_empty());
            let action = pick.get(&legal).clone();
            prop_assert!(game.apply(&action).is_ok(), "legal action refused: {}", action);

            prop_assert_eq!(game.cards_in_play(), 55);
            if !game.deck().is_empty() {
                prop_assert_eq!(game.market().len(), 5);
            }
            for (_, player) in game.players().iter() {
                prop_assert!(player.hand_size() <= game.config().hand_limit);
                prop_assert!(player.hand().iter().all(|c| !c.is_camel()));
            }
        }
    }

    /// Whatever is submitted, a refusal leaves the board untouched and
    /// `check_action` predicts the outcome.
    #[test]
    fn prop_actions_are_all_or_nothing(
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 1..60)
    ) {
        let mut game = Game::with_seed(seed);
        game.setup_round().unwrap();

        for action in actions {
            if game.phase() != Phase::Playing {
                break;
            }
            let predicted = game.check_action(&action);
            let before = game.board();
            let player = game.current_player();

            match game.apply(&action) {
                Ok(outcome) => {
                    prop_assert!(predicted.is_ok());
                    prop_assert_eq!(outcome.player, player);
                    prop_assert_eq!(game.current_player(), player.opponent());
                }
                Err(err) => {
                    prop_assert_eq!(predicted, Err(err.clone()));
                    prop_assert!(err.is_recoverable());
                    prop_assert_eq!(game.board(), before);
                }
            }
            prop_assert_eq!(game.cards_in_play(), 55);
        }
    }

    /// Tokens awarded for one goods kind come off the stack highest first.
    #[test]
    fn prop_goods_tokens_descend(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<Index>(), 1..150)
    ) {
        let mut game = Game::with_seed(seed);
        game.setup_round().unwrap();
        for pick in picks {
            if game.phase() != Phase::Playing {
                break;
            }
            let legal = game.legal_actions();
            game.apply(pick.get(&legal)).unwrap();
        }

        for id in PlayerId::both() {
            for goods in Card::GOODS {
                let values: Vec<u32> = game
                    .player(id)
                    .tokens()
                    .iter()
                    .filter(|t| t.kind() == TokenKind::Goods(goods))
                    .map(|t| t.value())
                    .collect();
                prop_assert!(values.windows(2).all(|w| w[0] >= w[1]), "{:?}", values);
            }
        }
    }

    #[test]
    fn prop_shuffle_preserves_deck(
        cards in prop::collection::vec(card(), 0..60),
        seed in any::<u64>()
    ) {
        let mut deck = Deck::from_cards(cards.clone());
        deck.shuffle(&mut GameRng::new(seed));
        prop_assert_eq!(sorted(deck.cards().to_vec()), sorted(cards));
    }

    #[test]
    fn prop_draw_is_bounded(
        cards in prop::collection::vec(card(), 0..60),
        n in 0usize..80
    ) {
        let mut deck = Deck::from_cards(cards.clone());
        let peeked = deck.peek(n);
        let drawn = deck.draw(n);

        prop_assert_eq!(drawn.len(), n.min(cards.len()));
        prop_assert_eq!(deck.len() + drawn.len(), cards.len());
        prop_assert_eq!(peeked, drawn);
    }

    #[test]
    fn prop_deck_take_is_atomic(
        cards in prop::collection::vec(card(), 0..60),
        wanted in card(),
        n in 0usize..12
    ) {
        let mut deck = Deck::from_cards(cards.clone());
        let available = deck.count(wanted);

        match deck.take(wanted, n) {
            Ok(taken) => {
                prop_assert!(n <= available);
                prop_assert_eq!(taken, vec![wanted; n]);
                prop_assert_eq!(deck.count(wanted), available - n);
                prop_assert_eq!(deck.len(), cards.len() - n);
            }
            Err(_) => {
                prop_assert!(n > available);
                prop_assert_eq!(deck.cards(), cards.as_slice());
            }
        }
    }

    #[test]
    fn prop_stack_draws_highest_first(
        values in prop::collection::vec(1i64..20, 0..10),
        n in 0usize..12
    ) {
        let mut stack = TokenStack::new(TokenKind::Goods(Card::Spice), &values).unwrap();
        stack.sort_by_value();
        let drawn: Vec<u32> = stack.draw(n).iter().map(|t| t.value()).collect();

        prop_assert_eq!(drawn.len(), n.min(values.len()));
        prop_assert!(drawn.windows(2).all(|w| w[0] >= w[1]));
        let rest = stack.values();
        if let (Some(&last), Some(&top)) = (drawn.last(), rest.iter().max()) {
            prop_assert!(last >= top);
        }
    }
}
