use crate::domain::chips::Chips;

use thiserror::Error;

/// Ошибки движка блэкджека. Все локальные и восстановимые:
/// вызывающий слой решает, переспросить игрока или прервать раунд.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Недопустимая карта: {0}")]
    InvalidCard(String),

    #[error("Недопустимое число колод {packs} (максимум {max})")]
    InvalidDeckSize { packs: u32, max: u32 },

    #[error("Колода пуста")]
    EmptyDeck,

    #[error("Ставка {amount} меньше минимальной {minimum}")]
    InvalidBet { amount: Chips, minimum: Chips },

    #[error("Ставка на эту руку уже сделана")]
    BetAlreadyPlaced,

    #[error("На руке нет ставки")]
    NoBet,

    #[error("Недопустимый индекс {0}")]
    InvalidIndex(usize),

    #[error("Эту руку нельзя разделить")]
    CannotSplit,

    #[error("На этой руке нельзя удвоить ставку")]
    CannotDoubleDown,

    #[error("Нет активной руки")]
    NoActiveHand,

    #[error("У дилера нет руки")]
    NoDealerHand,

    #[error("Имя игрока не может быть пустым")]
    InvalidName,

    #[error("Недостаточно средств: нужно {needed}, есть {available}")]
    InsufficientFunds { needed: Chips, available: Chips },

    #[error("Недопустимое число игроков {count} (максимум {max})")]
    InvalidPlayerCount { count: u32, max: u32 },

    #[error("Недопустимое действие: {0}")]
    InvalidAction(String),
}
