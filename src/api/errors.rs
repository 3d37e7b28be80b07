use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Данные ссылаются на игрока не из группы.
    UnknownPlayer(PlayerId),

    /// Расчёт отменён ошибкой движка.
    EngineError(String),

    /// Внутренняя ошибка сервера.
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::UnknownPlayerReference { player_id, .. } => {
                ApiError::UnknownPlayer(player_id)
            }
            other => ApiError::EngineError(other.to_string()),
        }
    }
}
