//! Общие части движка: ошибки, словарь действий игрока, проверки
//! параметров стола и интерфейс источника случайности.

pub mod actions;
pub mod errors;
pub mod validation;

pub use actions::Action;
pub use errors::EngineError;
pub use validation::{validate_bet, validate_pack_count, validate_player_count, validate_purse};

/// RNG интерфейс для перемешивания шуза.
/// Реализация – в infra (обёртка над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
