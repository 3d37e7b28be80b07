use serde::{Deserialize, Serialize};

use crate::domain::{GameKind, Money, PlayerId};
use crate::engine::{CardSettlementBreakdown, SkippedGame};

/// Итог игрока для отображения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerNetDto {
    pub player_id: PlayerId,
    pub display_name: String,
    pub net: Money,
    /// "$12.67" / "-$14.00".
    pub net_display: String,
}

/// Один перевод "кто кому" для отображения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionDto {
    pub from_player_id: PlayerId,
    pub from_name: String,
    pub to_player_id: PlayerId,
    pub to_name: String,
    pub amount: Money,
    pub amount_display: String,
}

/// Итог одной игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSummaryDto {
    pub kind: GameKind,
    pub players: Vec<PlayerNetDto>,
}

/// Ответ на запрос расчёта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementResponse {
    /// Итог по всем учтённым играм.
    pub players: Vec<PlayerNetDto>,
    pub transactions: Vec<TransactionDto>,
    pub games: Vec<GameSummaryDto>,
    /// Подробности карточной игры (если была учтена).
    pub card_breakdown: Option<CardSettlementBreakdown>,
    /// Выбранные, но не учтённые игры.
    pub skipped: Vec<SkippedGame>,
}
