//! Доменная модель блэкджека: карты, шуз, руки, игроки, дилер и правила стола.

pub mod card;
pub mod chips;
pub mod dealer;
pub mod deck;
pub mod hand;
pub mod holder;
pub mod player;
pub mod rules;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use dealer::*;
pub use deck::*;
pub use hand::*;
pub use holder::*;
pub use player::*;
pub use rules::*;
