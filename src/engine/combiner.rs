use serde::{Deserialize, Serialize};

use crate::domain::{GameKind, NetPosition};
use crate::engine::errors::{EngineError, InvariantSource};

/// Позиция одной игры до объединения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GamePosition {
    pub kind: GameKind,
    pub position: NetPosition,
}

/// Поэлементная сумма позиций. Игрок, которого нет в какой-то позиции,
/// считается там нулём. Игроки с нулевым итогом в результат не попадают.
///
/// Единственное место, где складываются выплаты разных игр: сумма
/// сбалансированных позиций сбалансирована по линейности, а итог всё равно
/// проверяется.
pub fn combine_positions<'a>(
    positions: impl IntoIterator<Item = &'a NetPosition>,
) -> Result<NetPosition, EngineError> {
    let mut combined = NetPosition::new();
    for position in positions {
        for (player, amount) in position.iter() {
            combined
                .checked_credit(player, amount)
                .ok_or(EngineError::CombinedAmountOverflow { player_id: player })?;
        }
    }
    let combined = combined.without_zeros();

    if !combined.is_balanced() {
        return Err(EngineError::InvariantViolation {
            origin: InvariantSource::Combiner,
            total: combined.total(),
        });
    }

    Ok(combined)
}

/// Объединить позиции игр, предварительно проверив каждую: ошибка
/// указывает, какая именно игра дала несбалансированный результат.
pub fn combine(games: &[GamePosition]) -> Result<NetPosition, EngineError> {
    for game in games {
        if !game.position.is_balanced() {
            return Err(EngineError::InvariantViolation {
                origin: InvariantSource::Game(game.kind),
                total: game.position.total(),
            });
        }
    }

    combine_positions(games.iter().map(|g| &g.position))
}
