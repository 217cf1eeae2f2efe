// tests/player_actions_tests.rs
//
// Действия игрока: hit / stand / split / double-down, five-card charlie,
// список допустимых действий и сброс между раундами.

use blackjack_engine::domain::{Card, Chips, Deck, Hand, HandHolder, Player, Rank, Suit, TableRules};
use blackjack_engine::{Action, EngineError};

// -----------------------------
// ВСПОМОГАТЕЛЬНЫЕ КОНСТРУКТОРЫ
// -----------------------------

fn card(rank: Rank) -> Card {
    Card::new(rank, Suit::Clubs)
}

fn deck_of(ranks: &[Rank]) -> Deck {
    Deck::from_cards(ranks.iter().map(|&r| card(r)).collect()).unwrap()
}

/// Рука с готовой ставкой (кошелёк игрока при этом не трогаем).
fn bet_hand(ranks: &[Rank], bet: u64, rules: &TableRules) -> Hand {
    let mut hand = Hand::from_cards(ranks.iter().map(|&r| card(r)).collect());
    hand.set_bet(Chips(bet), rules).unwrap();
    hand
}

fn player_with(purse: u64, hand: Hand) -> Player {
    let mut p = Player::new("Alice", Chips(purse)).unwrap();
    p.give_hand(hand);
    p
}

// -----------------------------
// SPLIT
// -----------------------------

/// Сценарий: кошелёк 100, ставка 50, пара восьмёрок.
#[test]
fn split_pair_of_eights() {
    let rules = TableRules::default();
    let mut p = player_with(100, bet_hand(&[Rank::Eight, Rank::Eight], 50, &rules));
    let mut deck = deck_of(&[Rank::Three, Rank::King, Rank::Two]);

    assert!(p.can_split(&rules));
    p.split(&mut deck, &rules).unwrap();

    assert_eq!(p.purse(), Chips(50));
    assert_eq!(p.split_count(), 1);
    assert_eq!(p.all_hands().len(), 2);
    for hand in p.all_hands() {
        assert_eq!(hand.len(), 2);
        assert_eq!(hand.bet(), Some(Chips(50)));
        assert!(hand.is_active());
    }

    // Исходная рука: 8 + первая карта шуза, новая: 8 + вторая.
    assert_eq!(p.all_hands()[0].cards(), &[card(Rank::Eight), card(Rank::Three)]);
    assert_eq!(p.all_hands()[1].cards(), &[card(Rank::Eight), card(Rank::King)]);
    assert_eq!(deck.len(), 1);

    // Текущая рука – первая.
    assert_eq!(p.current_index(), Some(0));
}

#[test]
fn split_rejected_for_non_pair() {
    let rules = TableRules::default();
    let mut p = player_with(100, bet_hand(&[Rank::Eight, Rank::Nine], 10, &rules));
    let mut deck = deck_of(&[Rank::Two, Rank::Two]);

    assert!(!p.can_split(&rules));
    assert_eq!(p.split(&mut deck, &rules), Err(EngineError::CannotSplit));
    assert_eq!(p.purse(), Chips(100));
    assert_eq!(p.all_hands().len(), 1);
}

#[test]
fn split_rejected_when_purse_below_bet() {
    let rules = TableRules::default();
    let mut p = player_with(49, bet_hand(&[Rank::Nine, Rank::Nine], 50, &rules));
    let mut deck = deck_of(&[Rank::Two, Rank::Two]);

    assert!(!p.can_split(&rules));
    assert_eq!(p.split(&mut deck, &rules), Err(EngineError::CannotSplit));
    assert_eq!(p.purse(), Chips(49));
    assert_eq!(p.split_count(), 0);
}

#[test]
fn split_limit_is_enforced() {
    let rules = TableRules {
        max_splits: 1,
        ..TableRules::default()
    };
    let mut p = player_with(200, bet_hand(&[Rank::Eight, Rank::Eight], 50, &rules));
    // Первая рука снова получает восьмёрку → снова пара.
    let mut deck = deck_of(&[Rank::Eight, Rank::Three, Rank::Four]);

    p.split(&mut deck, &rules).unwrap();
    assert!(p.all_hands()[0].has_pair());
    assert!(!p.can_split(&rules));
    assert_eq!(p.split(&mut deck, &rules), Err(EngineError::CannotSplit));
    assert_eq!(p.split_count(), 1);
    assert_eq!(p.purse(), Chips(150));

    assert_eq!(
        p.action_choices(&rules).unwrap(),
        vec![Action::Hit, Action::Stick, Action::DoubleDown]
    );
}

#[test]
fn split_with_short_deck_changes_nothing() {
    let rules = TableRules::default();
    let mut p = player_with(100, bet_hand(&[Rank::Six, Rank::Six], 20, &rules));
    let mut deck = deck_of(&[Rank::Ten]);

    assert_eq!(p.split(&mut deck, &rules), Err(EngineError::EmptyDeck));
    assert_eq!(p.purse(), Chips(100));
    assert_eq!(p.split_count(), 0);
    assert_eq!(p.all_hands().len(), 1);
    assert_eq!(p.all_hands()[0].len(), 2);
    assert_eq!(deck.len(), 1);
}

#[test]
fn split_second_hand_by_index() {
    let rules = TableRules::default();
    let mut p = Player::new("Bob", Chips(100)).unwrap();
    let mut first = bet_hand(&[Rank::Ten, Rank::Seven], 10, &rules);
    first.deactivate();
    p.give_hand(first);
    p.give_hand(bet_hand(&[Rank::Four, Rank::Four], 10, &rules));

    let mut deck = deck_of(&[Rank::Five, Rank::Six]);
    assert!(!p.can_split_at(0, &rules));
    assert!(p.can_split_at(1, &rules));
    assert!(!p.can_split_at(7, &rules));

    p.split_at(1, &mut deck, &rules).unwrap();
    assert_eq!(p.all_hands().len(), 3);
    assert_eq!(p.all_hands()[1].score(), 9);
    assert_eq!(p.all_hands()[2].score(), 10);
    assert_eq!(p.purse(), Chips(90));
}

// -----------------------------
// DOUBLE DOWN
// -----------------------------

#[test]
fn double_down_takes_one_card_and_stands() {
    let rules = TableRules::default();
    let mut p = player_with(100, bet_hand(&[Rank::Five, Rank::Six], 50, &rules));
    let mut deck = deck_of(&[Rank::King, Rank::Two]);

    assert!(p.can_double_down());
    let drawn = p.double_down(&mut deck).unwrap();
    assert_eq!(drawn, card(Rank::King));

    let hand = &p.all_hands()[0];
    assert_eq!(hand.len(), 3);
    assert_eq!(hand.bet(), Some(Chips(100)));
    assert_eq!(hand.score(), 21);
    assert!(!hand.is_active());
    assert_eq!(p.purse(), Chips(50));
    assert!(!p.has_active_hand());
    assert_eq!(deck.len(), 1);
}

#[test]
fn double_down_rejected_after_hit() {
    let rules = TableRules::default();
    let mut p = player_with(100, bet_hand(&[Rank::Two, Rank::Three], 10, &rules));
    let mut deck = deck_of(&[Rank::Four, Rank::Five]);

    p.hit(&mut deck).unwrap();
    assert!(!p.can_double_down());
    assert_eq!(p.double_down(&mut deck), Err(EngineError::CannotDoubleDown));
    assert_eq!(p.purse(), Chips(100));
    assert_eq!(p.all_hands()[0].bet(), Some(Chips(10)));
}

#[test]
fn double_down_rejected_without_funds() {
    let rules = TableRules::default();
    let mut p = player_with(30, bet_hand(&[Rank::Five, Rank::Five], 40, &rules));
    let mut deck = deck_of(&[Rank::Ace]);

    assert_eq!(p.double_down(&mut deck), Err(EngineError::CannotDoubleDown));
    assert_eq!(p.purse(), Chips(30));
    assert_eq!(deck.len(), 1);
}

// -----------------------------
// HIT / STAND
// -----------------------------

/// Пятая карта выключает руку даже без перебора.
#[test]
fn five_card_charlie_forces_stand() {
    let rules = TableRules::default();
    let mut p = player_with(100, bet_hand(&[Rank::Two, Rank::Two], 10, &rules));
    let mut deck = deck_of(&[Rank::Two, Rank::Three, Rank::Four]);

    p.hit(&mut deck).unwrap();
    p.hit(&mut deck).unwrap();
    assert!(p.current_hand().is_some());
    assert_eq!(p.current_hand().unwrap().len(), 4);

    p.hit(&mut deck).unwrap();
    let hand = &p.all_hands()[0];
    assert_eq!(hand.len(), 5);
    assert_eq!(hand.score(), 13);
    assert!(!hand.is_active());
    assert_eq!(p.hit(&mut deck), Err(EngineError::NoActiveHand));
}

/// Рука, уже собранная из пяти карт, после добора остаётся выключенной.
#[test]
fn hit_past_five_cards_keeps_hand_inactive() {
    let rules = TableRules::default();
    let hand = bet_hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace, Rank::Two], 10, &rules);
    assert!(hand.is_active());
    let mut p = player_with(100, hand);
    let mut deck = deck_of(&[Rank::Two, Rank::Three]);

    assert_eq!(p.hit(&mut deck), Ok(card(Rank::Two)));
    let hand = &p.all_hands()[0];
    assert_eq!(hand.len(), 6);
    assert_eq!(hand.score(), 18);
    assert!(!hand.is_bust());
    assert!(!hand.is_active());
    assert!(p.current_hand().is_none());
    assert_eq!(deck.len(), 1);
}

#[test]
fn bust_deactivates_hand() {
    let rules = TableRules::default();
    let mut p = player_with(100, bet_hand(&[Rank::King, Rank::Six], 10, &rules));
    let mut deck = deck_of(&[Rank::Queen]);

    p.hit(&mut deck).unwrap();
    assert!(p.all_hands()[0].is_bust());
    assert!(!p.all_hands()[0].is_active());
    assert!(p.current_hand().is_none());
}

#[test]
fn hit_on_empty_deck_propagates() {
    let rules = TableRules::default();
    let mut p = player_with(100, bet_hand(&[Rank::Two, Rank::Three], 10, &rules));
    let mut deck = deck_of(&[Rank::Four]);
    deck.draw().unwrap();

    assert_eq!(p.hit(&mut deck), Err(EngineError::EmptyDeck));
    assert_eq!(p.all_hands()[0].len(), 2);
}

#[test]
fn stand_moves_to_next_hand() {
    let rules = TableRules::default();
    let mut p = player_with(100, bet_hand(&[Rank::Ten, Rank::Nine], 10, &rules));
    p.give_hand(bet_hand(&[Rank::Ten, Rank::Five], 10, &rules));

    assert_eq!(p.current_index(), Some(0));
    p.stand().unwrap();
    assert_eq!(p.current_index(), Some(1));
    p.stand_at(1).unwrap();
    assert_eq!(p.current_index(), None);
    assert_eq!(p.stand(), Err(EngineError::NoActiveHand));
}

#[test]
fn hit_at_inactive_hand_rejected() {
    let rules = TableRules::default();
    let mut p = player_with(100, bet_hand(&[Rank::Ten, Rank::Nine], 10, &rules));
    p.stand().unwrap();
    let mut deck = deck_of(&[Rank::Two]);

    assert_eq!(p.hit_at(0, &mut deck), Err(EngineError::NoActiveHand));
    assert_eq!(p.hit_at(3, &mut deck), Err(EngineError::InvalidIndex(3)));
    assert_eq!(deck.len(), 1);
}

// -----------------------------
// ACTION CHOICES
// -----------------------------

#[test]
fn action_choices_follow_eligibility() {
    let rules = TableRules::default();

    let p = player_with(100, bet_hand(&[Rank::Eight, Rank::Eight], 10, &rules));
    assert_eq!(
        p.action_choices(&rules).unwrap(),
        vec![Action::Hit, Action::Stick, Action::Split, Action::DoubleDown]
    );

    let p = player_with(0, bet_hand(&[Rank::Eight, Rank::Eight], 10, &rules));
    assert_eq!(p.action_choices(&rules).unwrap(), vec![Action::Hit, Action::Stick]);

    let p = player_with(100, bet_hand(&[Rank::Two, Rank::Three, Rank::Four], 10, &rules));
    assert_eq!(p.action_choices(&rules).unwrap(), vec![Action::Hit, Action::Stick]);

    let p = Player::new("Empty", Chips(100)).unwrap();
    assert_eq!(p.action_choices(&rules), Err(EngineError::NoActiveHand));
}

#[test]
fn validate_action_parses_and_checks() {
    let rules = TableRules::default();
    let p = player_with(100, bet_hand(&[Rank::Five, Rank::Six], 10, &rules));

    assert_eq!(p.validate_action("hit", &rules), Ok(Action::Hit));
    assert_eq!(p.validate_action("stand", &rules), Ok(Action::Stick));
    assert_eq!(p.validate_action("double-down", &rules), Ok(Action::DoubleDown));
    assert!(matches!(
        p.validate_action("split", &rules),
        Err(EngineError::InvalidAction(_))
    ));
    assert!(matches!(
        p.validate_action("surrender", &rules),
        Err(EngineError::InvalidAction(_))
    ));
}

// -----------------------------
// RESET
// -----------------------------

#[test]
fn reset_clears_hands_keeps_purse() {
    let rules = TableRules::default();
    let mut p = player_with(100, bet_hand(&[Rank::Eight, Rank::Eight], 50, &rules));
    let mut deck = deck_of(&[Rank::Two, Rank::Three]);
    p.split(&mut deck, &rules).unwrap();

    p.reset();
    assert!(p.all_hands().is_empty());
    assert_eq!(p.split_count(), 0);
    assert_eq!(p.purse(), Chips(50));
    assert_eq!(p.name(), "Alice");
}

#[test]
fn open_hand_and_credit() {
    let rules = TableRules::default();
    let mut p = Player::new("Carol", Chips(20)).unwrap();

    assert!(matches!(
        p.open_hand(Chips(2), &rules),
        Err(EngineError::InvalidBet { .. })
    ));
    p.open_hand(Chips(20), &rules).unwrap();
    assert_eq!(p.purse(), Chips::ZERO);

    p.credit(Chips(40));
    assert_eq!(p.purse(), Chips(40));
}

#[test]
fn open_hand_debits_and_rejects_overdraft() {
    let rules = TableRules::default();
    let mut p = Player::new("Erin", Chips(100)).unwrap();

    p.open_hand(Chips(30), &rules).unwrap();
    assert_eq!(p.purse(), Chips(70));
    assert_eq!(p.all_hands().len(), 1);

    assert_eq!(
        p.open_hand(Chips(80), &rules),
        Err(EngineError::InsufficientFunds {
            needed: Chips(80),
            available: Chips(70),
        })
    );
    assert_eq!(p.purse(), Chips(70));
    assert_eq!(p.all_hands().len(), 1);
}

/// Пустое имя запрещено, любое непустое (даже из пробелов) разрешено.
#[test]
fn only_empty_name_is_rejected() {
    assert_eq!(Player::new("", Chips(100)), Err(EngineError::InvalidName));
    let p = Player::new(" ", Chips(100)).unwrap();
    assert_eq!(p.name(), " ");
    assert!(Player::new("\t", Chips(0)).is_ok());
}

/// Игрок сериализуется в JSON вместе с руками.
#[test]
fn player_serializes_to_json() {
    let rules = TableRules::default();
    let p = player_with(100, bet_hand(&[Rank::Ace, Rank::King], 10, &rules));
    let value = serde_json::to_value(&p).unwrap();
    assert_eq!(value["name"], "Alice");
    assert_eq!(value["purse"], 100);
    assert_eq!(value["hands"][0]["bet"], 10);
    assert_eq!(value["hands"][0]["active"], true);
}
