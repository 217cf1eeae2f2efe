use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::errors::EngineError;

/// Масть карты. Порядок вариантов = порядок генерации колоды.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,   // ♠
    Diamonds, // ♦
    Hearts,   // ♥
    Clubs,    // ♣
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Hearts, Suit::Clubs];

    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Clubs => '♣',
        }
    }

    fn from_symbol(s: &str) -> Option<Suit> {
        match s {
            "♠" => Some(Suit::Spades),
            "♦" => Some(Suit::Diamonds),
            "♥" => Some(Suit::Hearts),
            "♣" => Some(Suit::Clubs),
            _ => None,
        }
    }
}

/// Ранг карты. Туз идёт первым, как в обычной колоде для блэкджека.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Очки карты без учёта туза: J/Q/K = 10, туз здесь = 1.
    /// Выбор 1 или 11 для туза делает `Hand::score`.
    pub fn base_value(&self) -> u32 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            r => *r as u32,
        }
    }

    pub fn is_ace(&self) -> bool {
        matches!(self, Rank::Ace)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    fn from_symbol(s: &str) -> Option<Rank> {
        Rank::ALL.iter().copied().find(|r| r.symbol() == s)
    }
}

/// Игральная карта. После создания не меняется.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Создать карту из текстовых обозначений ранга ("A", "10", "K")
    /// и масти ("♠", "♦", "♥", "♣").
    pub fn from_symbols(rank: &str, suit: &str) -> Result<Self, EngineError> {
        let r = Rank::from_symbol(rank)
            .ok_or_else(|| EngineError::InvalidCard(format!("rank {rank:?}")))?;
        let s = Suit::from_symbol(suit)
            .ok_or_else(|| EngineError::InvalidCard(format!("suit {suit:?}")))?;
        Ok(Card::new(r, s))
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Card {
    /// Формат вида `A♠`, `10♥`, `Q♣`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Парсинг строки вида "A♠", "10♥", "Q♣". Масть – всегда последний символ.
impl FromStr for Card {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit_ch = chars
            .next_back()
            .ok_or_else(|| EngineError::InvalidCard("empty string".into()))?;
        let rank_part = chars.as_str();

        let mut buf = [0u8; 4];
        Card::from_symbols(rank_part, suit_ch.encode_utf8(&mut buf))
    }
}
