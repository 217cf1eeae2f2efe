use std::collections::VecDeque;

use serde::Serialize;
use tracing::{debug, trace};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::rules::TableRules;
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;
use crate::infra::rng::DeterministicRng;

/// Шуз: упорядоченный список карт. Карты берутся с начала (индекс 0).
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Шуз из `packs` колод по 52 карты в порядке:
    /// колода 1 (♠ A..K, ♦ A..K, ♥ A..K, ♣ A..K), затем колода 2 и т.д.
    pub fn new(packs: u32, rules: &TableRules) -> Result<Self, EngineError> {
        rules.check_pack_count(packs)?;

        let mut cards = VecDeque::with_capacity(52 * packs as usize);
        for _ in 0..packs {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push_back(Card::new(rank, suit));
                }
            }
        }
        debug!(packs, cards = cards.len(), "deck built");
        Ok(Deck { cards })
    }

    /// Колода из заранее заданных карт (для тестов и реплея).
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, EngineError> {
        if cards.is_empty() {
            return Err(EngineError::EmptyDeck);
        }
        Ok(Deck {
            cards: cards.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Оставшиеся карты в порядке выдачи.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Взять верхнюю карту (индекс 0).
    pub fn draw(&mut self) -> Result<Card, EngineError> {
        let card = self.cards.pop_front().ok_or(EngineError::EmptyDeck)?;
        trace!(%card, remaining = self.cards.len(), "card drawn");
        Ok(card)
    }

    /// Перемешать оставшиеся карты источником случайности вызывающего.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Перемешать детерминированно: один и тот же seed даёт один и тот же порядок.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = DeterministicRng::from_seed(seed);
        self.shuffle(&mut rng);
        debug!(seed, cards = self.cards.len(), "deck shuffled");
    }
}
