use serde::Serialize;
use tracing::debug;

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::Hand;
use crate::domain::holder::{hit_hand, stand_hand, HandHolder};
use crate::domain::rules::TableRules;
use crate::engine::actions::Action;
use crate::engine::errors::EngineError;

/// Игрок: имя, кошелёк и руки текущего раунда.
///
/// Первая рука – исходная, остальные появляются после сплитов
/// в порядке создания.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Player {
    name: String,
    purse: Chips,
    hands: Vec<Hand>,
    split_count: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, purse: Chips) -> Result<Self, EngineError> {
        let name = name.into();
        if name.is_empty() {
            return Err(EngineError::InvalidName);
        }
        Ok(Self {
            name,
            purse,
            hands: Vec::new(),
            split_count: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn purse(&self) -> Chips {
        self.purse
    }

    pub fn all_hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn split_count(&self) -> u32 {
        self.split_count
    }

    /// Индекс текущей (первой активной) руки.
    pub fn current_index(&self) -> Option<usize> {
        self.hands.iter().position(Hand::is_active)
    }

    /// Есть ли ещё руки, по которым игрок должен ходить.
    pub fn has_active_hand(&self) -> bool {
        self.current_index().is_some()
    }

    pub fn hand_at(&self, index: usize) -> Result<&Hand, EngineError> {
        self.hands.get(index).ok_or(EngineError::InvalidIndex(index))
    }

    /// Начать раунд: поставить `bet` из кошелька на новую руку.
    pub fn open_hand(&mut self, bet: Chips, rules: &TableRules) -> Result<(), EngineError> {
        let mut hand = Hand::new();
        hand.set_bet(bet, rules)?;
        self.debit(bet)?;
        self.give_hand(hand);
        Ok(())
    }

    /// Зачислить выигрыш (или вернуть ставку).
    pub fn credit(&mut self, amount: Chips) {
        self.purse += amount;
    }

    fn debit(&mut self, amount: Chips) -> Result<(), EngineError> {
        self.purse = self
            .purse
            .checked_sub(amount)
            .ok_or(EngineError::InsufficientFunds {
                needed: amount,
                available: self.purse,
            })?;
        Ok(())
    }

    fn current_or_err(&self) -> Result<usize, EngineError> {
        self.current_index().ok_or(EngineError::NoActiveHand)
    }

    fn active_hand_at(&mut self, index: usize) -> Result<&mut Hand, EngineError> {
        let hand = self
            .hands
            .get_mut(index)
            .ok_or(EngineError::InvalidIndex(index))?;
        if !hand.is_active() {
            return Err(EngineError::NoActiveHand);
        }
        Ok(hand)
    }

    fn covers_bet(&self, hand: &Hand) -> bool {
        hand.bet().is_some_and(|bet| self.purse >= bet)
    }

    // ---------------- hit / stand ----------------

    pub fn hit_at(&mut self, index: usize, deck: &mut Deck) -> Result<Card, EngineError> {
        let hand = self.active_hand_at(index)?;
        hit_hand(hand, deck)
    }

    pub fn stand_at(&mut self, index: usize) -> Result<(), EngineError> {
        let hand = self
            .hands
            .get_mut(index)
            .ok_or(EngineError::InvalidIndex(index))?;
        stand_hand(hand);
        Ok(())
    }

    // ---------------- split ----------------

    pub fn can_split(&self, rules: &TableRules) -> bool {
        self.current_index()
            .is_some_and(|i| self.can_split_at(i, rules))
    }

    /// Сплит возможен: активная пара, хватает денег на вторую ставку,
    /// лимит сплитов не исчерпан.
    pub fn can_split_at(&self, index: usize, rules: &TableRules) -> bool {
        let Some(hand) = self.hands.get(index) else {
            return false;
        };
        hand.is_active()
            && self.covers_bet(hand)
            && self.split_count < rules.max_splits
            && hand.has_pair()
    }

    pub fn split(&mut self, deck: &mut Deck, rules: &TableRules) -> Result<(), EngineError> {
        let index = self.current_or_err()?;
        self.split_at(index, deck, rules)
    }

    /// Разделить пару на две руки с одинаковой ставкой и добрать
    /// по карте в каждую. Новая рука добавляется в конец списка.
    pub fn split_at(
        &mut self,
        index: usize,
        deck: &mut Deck,
        rules: &TableRules,
    ) -> Result<(), EngineError> {
        if !self.can_split_at(index, rules) {
            return Err(EngineError::CannotSplit);
        }
        if deck.len() < 2 {
            return Err(EngineError::EmptyDeck);
        }

        let bet = self.hands[index].bet().ok_or(EngineError::NoBet)?;
        self.debit(bet)?;
        self.split_count += 1;

        let original = &mut self.hands[index];
        let second = original.split()?;
        hit_hand(original, deck)?;

        let mut split_hand = Hand::split_off(second, Some(bet));
        hit_hand(&mut split_hand, deck)?;
        self.hands.push(split_hand);

        debug!(
            player = %self.name,
            index,
            %bet,
            split_count = self.split_count,
            purse = %self.purse,
            "hand split"
        );
        Ok(())
    }

    // ---------------- double down ----------------

    pub fn can_double_down(&self) -> bool {
        self.current_index()
            .is_some_and(|i| self.can_double_down_at(i))
    }

    /// Удвоение возможно на активной руке из двух карт, если хватает денег.
    pub fn can_double_down_at(&self, index: usize) -> bool {
        let Some(hand) = self.hands.get(index) else {
            return false;
        };
        hand.is_active() && self.covers_bet(hand) && hand.len() == 2
    }

    pub fn double_down(&mut self, deck: &mut Deck) -> Result<Card, EngineError> {
        let index = self.current_or_err()?;
        self.double_down_at(index, deck)
    }

    /// Удвоить ставку, взять ровно одну карту и остановиться.
    pub fn double_down_at(&mut self, index: usize, deck: &mut Deck) -> Result<Card, EngineError> {
        if !self.can_double_down_at(index) {
            return Err(EngineError::CannotDoubleDown);
        }
        if deck.is_empty() {
            return Err(EngineError::EmptyDeck);
        }

        let bet = self.hands[index].bet().ok_or(EngineError::NoBet)?;
        self.debit(bet)?;

        let hand = &mut self.hands[index];
        let card = hit_hand(hand, deck)?;
        hand.double_bet()?;
        hand.deactivate();

        debug!(player = %self.name, index, %card, purse = %self.purse, "doubled down");
        Ok(card)
    }

    // ---------------- choices ----------------

    /// Допустимые действия для текущей руки: всегда hit и stick,
    /// плюс split и double-down, если разрешены.
    pub fn action_choices(&self, rules: &TableRules) -> Result<Vec<Action>, EngineError> {
        let index = self.current_or_err()?;
        self.action_choices_at(index, rules)
    }

    pub fn action_choices_at(
        &self,
        index: usize,
        rules: &TableRules,
    ) -> Result<Vec<Action>, EngineError> {
        let hand = self.hand_at(index)?;
        if !hand.is_active() {
            return Err(EngineError::NoActiveHand);
        }

        let mut actions = vec![Action::Hit, Action::Stick];
        if self.can_split_at(index, rules) {
            actions.push(Action::Split);
        }
        if self.can_double_down_at(index) {
            actions.push(Action::DoubleDown);
        }
        Ok(actions)
    }

    /// Разобрать ввод игрока и проверить, что действие сейчас допустимо.
    pub fn validate_action(&self, input: &str, rules: &TableRules) -> Result<Action, EngineError> {
        let action: Action = input.parse()?;
        if self.action_choices(rules)?.contains(&action) {
            Ok(action)
        } else {
            Err(EngineError::InvalidAction(input.to_string()))
        }
    }
}

impl HandHolder for Player {
    fn current_hand(&self) -> Option<&Hand> {
        self.hands.iter().find(|h| h.is_active())
    }

    fn current_hand_mut(&mut self) -> Option<&mut Hand> {
        self.hands.iter_mut().find(|h| h.is_active())
    }

    fn give_hand(&mut self, hand: Hand) {
        self.hands.push(hand);
    }

    /// Руки и счётчик сплитов обнуляются; кошелёк переходит в следующий раунд.
    fn reset(&mut self) {
        self.hands.clear();
        self.split_count = 0;
    }
}
