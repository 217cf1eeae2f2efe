use core::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::rules::TableRules;
use crate::engine::errors::EngineError;

/// Предел очков; всё, что выше, – перебор.
pub const BLACKJACK_SCORE: u32 = 21;

/// После стольких карт рука принудительно останавливается ("five-card charlie").
pub const MAX_HAND_CARDS: usize = 5;

/// Рука: карты в порядке получения, ставка и флаг активности.
///
/// Порядок карт важен: у дилера индекс 0 – закрытая карта, индекс 1 – открытая.
///
/// Руку можно только сериализовать; ставка и активность меняются
/// лишь через методы.
///
/// ```compile_fail
/// let _: blackjack_engine::Hand =
///     serde_json::from_str(r#"{"cards":[],"bet":1,"active":true}"#).unwrap();
/// ```
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    /// `None`, пока ставка не сделана.
    bet: Option<Chips>,
    active: bool,
}

impl Hand {
    pub fn new() -> Self {
        Self::from_cards(Vec::new())
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            bet: None,
            active: true,
        }
    }

    /// Новая рука после сплита: одна карта и та же ставка.
    pub(crate) fn split_off(card: Card, bet: Option<Chips>) -> Self {
        Self {
            cards: vec![card],
            bet,
            active: true,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn bet(&self) -> Option<Chips> {
        self.bet
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Лучшая сумма очков.
    ///
    /// Все тузы сначала считаются за 11; пока сумма больше 21, по одному
    /// туза переводим в 1. Если даже все тузы по 1 дают перебор,
    /// возвращается именно эта (минимальная) сумма.
    pub fn score(&self) -> u32 {
        let aces = self.cards.iter().filter(|c| c.rank().is_ace()).count() as u32;
        let others: u32 = self
            .cards
            .iter()
            .filter(|c| !c.rank().is_ace())
            .map(|c| c.rank().base_value())
            .sum();

        let mut elevens = aces;
        let total = |elevens: u32| others + elevens * 11 + (aces - elevens);
        while total(elevens) > BLACKJACK_SCORE && elevens > 0 {
            elevens -= 1;
        }
        total(elevens)
    }

    /// 21 очко ровно двумя картами.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == BLACKJACK_SCORE
    }

    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK_SCORE
    }

    /// Две карты одного ранга (K и Q – не пара).
    pub fn has_pair(&self) -> bool {
        match self.cards.as_slice() {
            [a, b] => a.rank() == b.rank(),
            _ => false,
        }
    }

    /// Забрать вторую карту пары. Первая остаётся на руке.
    pub fn split(&mut self) -> Result<Card, EngineError> {
        if !self.has_pair() {
            return Err(EngineError::CannotSplit);
        }
        self.cards.pop().ok_or(EngineError::CannotSplit)
    }

    /// Сделать ставку. Ставку нельзя переставить, только удвоить.
    pub fn set_bet(&mut self, amount: Chips, rules: &TableRules) -> Result<(), EngineError> {
        if self.bet.is_some() {
            return Err(EngineError::BetAlreadyPlaced);
        }
        if amount < rules.minimum_bet {
            return Err(EngineError::InvalidBet {
                amount,
                minimum: rules.minimum_bet,
            });
        }
        self.bet = Some(amount);
        debug!(%amount, "bet placed");
        Ok(())
    }

    pub fn double_bet(&mut self) -> Result<(), EngineError> {
        let bet = self.bet.ok_or(EngineError::NoBet)?;
        self.bet = Some(bet.doubled());
        Ok(())
    }

    pub fn deactivate(&mut self) {
        if self.active {
            trace!(hand = %self, score = self.score(), "hand deactivated");
        }
        self.active = false;
    }

    /// Доступ к первой или второй карте (закрытая/открытая карта дилера).
    pub fn card_at(&self, index: usize) -> Result<Card, EngineError> {
        if index > 1 {
            return Err(EngineError::InvalidIndex(index));
        }
        self.cards
            .get(index)
            .copied()
            .ok_or(EngineError::InvalidIndex(index))
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Hand {
    /// Карты через запятую: `A♠, 10♥`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
