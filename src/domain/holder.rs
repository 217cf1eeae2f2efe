//! Общее поведение участников раунда, у которых есть руки (игрок и дилер).

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::{Hand, MAX_HAND_CARDS};
use crate::engine::errors::EngineError;

/// Участник раунда, держащий руки.
///
/// "Текущая" рука – первая активная в порядке владельца; к ней применяются
/// `hit` / `stand` без явного указания руки.
pub trait HandHolder {
    /// Текущая рука или `None`, если активных рук нет.
    fn current_hand(&self) -> Option<&Hand>;

    fn current_hand_mut(&mut self) -> Option<&mut Hand>;

    /// Выдать руку участнику (игрок – добавляет, дилер – заменяет).
    fn give_hand(&mut self, hand: Hand);

    /// Сброс состояния между раундами.
    fn reset(&mut self);

    /// Взять карту в текущую руку.
    fn hit(&mut self, deck: &mut Deck) -> Result<Card, EngineError> {
        let hand = self.current_hand_mut().ok_or(EngineError::NoActiveHand)?;
        hit_hand(hand, deck)
    }

    /// Остановиться на текущей руке.
    fn stand(&mut self) -> Result<(), EngineError> {
        let hand = self.current_hand_mut().ok_or(EngineError::NoActiveHand)?;
        stand_hand(hand);
        Ok(())
    }
}

/// Добрать карту в руку. Перебор или пятая (и любая следующая) карта выключают руку.
pub fn hit_hand(hand: &mut Hand, deck: &mut Deck) -> Result<Card, EngineError> {
    let card = deck.draw()?;
    hand.add_card(card);
    if hand.is_bust() || hand.len() >= MAX_HAND_CARDS {
        hand.deactivate();
    }
    Ok(card)
}

pub fn stand_hand(hand: &mut Hand) {
    hand.deactivate();
}
