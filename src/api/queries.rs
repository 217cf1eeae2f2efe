use serde::Serialize;

use crate::domain::dealer::Dealer;
use crate::domain::hand::Hand;
use crate::domain::player::Player;
use crate::domain::rules::TableRules;

use super::dto::{DealerViewDto, HandViewDto, PlayerViewDto};

pub fn build_hand_view(hand: &Hand) -> HandViewDto {
    HandViewDto {
        cards: hand.cards().to_vec(),
        display: hand.to_string(),
        score: hand.score(),
        bet: hand.bet(),
        active: hand.is_active(),
        blackjack: hand.is_blackjack(),
        bust: hand.is_bust(),
    }
}

/// Сформировать DTO игрока вместе с допустимыми действиями по текущей руке.
pub fn build_player_view(player: &Player, rules: &TableRules) -> PlayerViewDto {
    PlayerViewDto {
        name: player.name().to_string(),
        purse: player.purse(),
        split_count: player.split_count(),
        hands: player.all_hands().iter().map(build_hand_view).collect(),
        current_hand: player.current_index(),
        action_choices: player.action_choices(rules).unwrap_or_default(),
    }
}

/// Сформировать DTO дилера. `reveal_hole` – вскрыта ли закрытая карта.
pub fn build_dealer_view(dealer: &Dealer, reveal_hole: bool) -> DealerViewDto {
    DealerViewDto {
        upcard: dealer.upcard().ok(),
        can_offer_insurance: dealer.can_offer_insurance().unwrap_or(false),
        hand: if reveal_hole {
            dealer.hand().map(build_hand_view)
        } else {
            None
        },
    }
}

/// Снимок в JSON для внешнего отображения.
pub fn to_json<T: Serialize>(view: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(view)
}
