//! Проверки параметров стола и ставок до начала раунда.

use crate::domain::chips::Chips;
use crate::domain::rules::TableRules;
use crate::engine::errors::EngineError;

/// Число колод для нового шуза: от 1 до `max_deck_packs`.
pub fn validate_pack_count(packs: u32, rules: &TableRules) -> Result<(), EngineError> {
    if packs == 0 {
        return Err(EngineError::InvalidDeckSize {
            packs,
            max: rules.max_deck_packs,
        });
    }
    rules.check_pack_count(packs)
}

/// Число игроков за столом: от 1 до `max_players`.
pub fn validate_player_count(count: u32, rules: &TableRules) -> Result<(), EngineError> {
    if count == 0 || count > rules.max_players {
        return Err(EngineError::InvalidPlayerCount {
            count,
            max: rules.max_players,
        });
    }
    Ok(())
}

/// Стартовый кошелёк должен покрывать хотя бы одну минимальную ставку.
pub fn validate_purse(purse: Chips, rules: &TableRules) -> Result<(), EngineError> {
    if purse < rules.minimum_bet {
        return Err(EngineError::InsufficientFunds {
            needed: rules.minimum_bet,
            available: purse,
        });
    }
    Ok(())
}

/// Ставка не меньше минимальной и не больше кошелька.
pub fn validate_bet(amount: Chips, purse: Chips, rules: &TableRules) -> Result<(), EngineError> {
    if amount < rules.minimum_bet {
        return Err(EngineError::InvalidBet {
            amount,
            minimum: rules.minimum_bet,
        });
    }
    if amount > purse {
        return Err(EngineError::InsufficientFunds {
            needed: amount,
            available: purse,
        });
    }
    Ok(())
}
