use serde::{Deserialize, Serialize};

use crate::domain::{GameKind, RawGameData, SettlementConfig};

/// Запрос на расчёт: какие игры учитывать, ставки и снимок данных раунда.
///
/// Данные уже проверены и авторизованы снаружи (состав группы, права).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettleRequest {
    pub selected_games: Vec<GameKind>,
    #[serde(default)]
    pub config: SettlementConfig,
    #[serde(default)]
    pub data: RawGameData,
}
