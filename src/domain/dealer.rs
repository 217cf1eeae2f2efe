use serde::Serialize;

use crate::domain::card::{Card, Rank};
use crate::domain::hand::Hand;
use crate::domain::holder::HandHolder;
use crate::engine::errors::EngineError;

/// Индекс закрытой карты дилера (первая сданная).
const HOLE_CARD_INDEX: usize = 0;
/// Индекс открытой карты дилера.
const UPCARD_INDEX: usize = 1;

/// Дилер: ровно одна рука, без кошелька.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct Dealer {
    hand: Option<Hand>,
}

impl Dealer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Рука дилера, даже если она уже выключена.
    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    fn hand_or_err(&self) -> Result<&Hand, EngineError> {
        self.hand.as_ref().ok_or(EngineError::NoDealerHand)
    }

    /// Открытая карта.
    pub fn upcard(&self) -> Result<Card, EngineError> {
        self.hand_or_err()?.card_at(UPCARD_INDEX)
    }

    /// Закрытая карта.
    pub fn hole_card(&self) -> Result<Card, EngineError> {
        self.hand_or_err()?.card_at(HOLE_CARD_INDEX)
    }

    /// Страховку предлагают, только если открытая карта – туз.
    pub fn can_offer_insurance(&self) -> Result<bool, EngineError> {
        Ok(self.upcard()?.rank() == Rank::Ace)
    }
}

impl HandHolder for Dealer {
    fn current_hand(&self) -> Option<&Hand> {
        self.hand.as_ref().filter(|h| h.is_active())
    }

    fn current_hand_mut(&mut self) -> Option<&mut Hand> {
        self.hand.as_mut().filter(|h| h.is_active())
    }

    /// Вторая выданная рука молча заменяет первую.
    fn give_hand(&mut self, hand: Hand) {
        self.hand = Some(hand);
    }

    fn reset(&mut self) {
        self.hand = None;
    }
}
