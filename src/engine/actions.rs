use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::errors::EngineError;

/// Действие игрока над текущей рукой.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Hit,
    /// Остановиться (stand / stick).
    Stick,
    Split,
    DoubleDown,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Hit => "hit",
            Action::Stick => "stick",
            Action::Split => "split",
            Action::DoubleDown => "double-down",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Парсинг ввода игрока. "stand" принимается как синоним "stick".
impl FromStr for Action {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hit" => Ok(Action::Hit),
            "stick" | "stand" => Ok(Action::Stick),
            "split" => Ok(Action::Split),
            "double-down" | "double" => Ok(Action::DoubleDown),
            other => Err(EngineError::InvalidAction(other.to_string())),
        }
    }
}
