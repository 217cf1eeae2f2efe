use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::engine::Action;

/// DTO одной руки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandViewDto {
    pub cards: Vec<Card>,
    /// Карты строкой, например `A♠, 10♥`.
    pub display: String,
    pub score: u32,
    pub bet: Option<Chips>,
    pub active: bool,
    pub blackjack: bool,
    pub bust: bool,
}

/// DTO игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerViewDto {
    pub name: String,
    pub purse: Chips,
    pub split_count: u32,
    pub hands: Vec<HandViewDto>,
    /// Индекс руки, по которой сейчас ход.
    pub current_hand: Option<usize>,
    /// Пусто, если активных рук нет.
    pub action_choices: Vec<Action>,
}

/// DTO дилера. Пока закрытая карта не вскрыта, видна только открытая.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealerViewDto {
    pub upcard: Option<Card>,
    pub can_offer_insurance: bool,
    /// Полная рука – только после вскрытия.
    pub hand: Option<HandViewDto>,
}
