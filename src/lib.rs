//! Движок правил блэкджека.
//!
//! - `domain` – карты, шуз, руки, игроки, дилер, правила стола;
//! - `engine` – ошибки, действия игрока, проверки параметров, RNG-интерфейс;
//! - `infra` – детерминированный RNG поверх `rand`;
//! - `api` – снимки состояния для отображения.
//!
//! Оркестрация раунда (ставки, порядок ходов, выплаты) – снаружи:
//! движок только меняет состояние рук в ответ на действия.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use domain::{Card, Chips, Dealer, Deck, Hand, HandHolder, Player, Rank, Suit, TableRules};
pub use engine::{Action, EngineError, RandomSource};
