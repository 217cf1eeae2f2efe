use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::engine::errors::EngineError;

/// Параметры стола. Движок сам ничего не читает с диска –
/// вызывающая сторона создаёт `TableRules` и передаёт в нужные операции.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableRules {
    /// Максимум колод (по 52 карты) в шузе.
    pub max_deck_packs: u32,
    /// Сколько раз игрок может сплитовать за один раунд.
    pub max_splits: u32,
    /// Максимум игроков за столом.
    pub max_players: u32,
    /// Минимальная ставка на руку.
    pub minimum_bet: Chips,
}

impl TableRules {
    pub const DEFAULT_MAX_DECK_PACKS: u32 = 8;
    pub const DEFAULT_MAX_SPLITS: u32 = 3;
    pub const DEFAULT_MAX_PLAYERS: u32 = 7;
    pub const DEFAULT_MINIMUM_BET: Chips = Chips(5);

    /// Разобрать правила из JSON. Отсутствующие поля берутся из `Default`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Проверка, что количество колод в допустимом диапазоне 0..=max.
    pub fn check_pack_count(&self, packs: u32) -> Result<(), EngineError> {
        if packs > self.max_deck_packs {
            return Err(EngineError::InvalidDeckSize {
                packs,
                max: self.max_deck_packs,
            });
        }
        Ok(())
    }
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            max_deck_packs: Self::DEFAULT_MAX_DECK_PACKS,
            max_splits: Self::DEFAULT_MAX_SPLITS,
            max_players: Self::DEFAULT_MAX_PLAYERS,
            minimum_bet: Self::DEFAULT_MINIMUM_BET,
        }
    }
}
