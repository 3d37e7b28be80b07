use std::collections::BTreeMap;

use crate::domain::{GameKind, HoleScore, Money, NetPosition, PlayerId, PointsGameData, PointsInput};
use crate::engine::errors::EngineError;
use crate::engine::pairwise::pairwise_settlement;
use crate::engine::points_table::strokes_to_points;

/// Сумма очков по всем лункам. Нет записи на лунке = 0 очков за неё.
/// Готовые очки приходят извне, поэтому сумма проверяется на переполнение.
pub fn total_points(holes: &[HoleScore<i64>]) -> Result<BTreeMap<PlayerId, i64>, EngineError> {
    let mut totals: BTreeMap<PlayerId, i64> = BTreeMap::new();
    for hole in holes {
        for (player, points) in &hole.entries {
            let total = totals.entry(*player).or_insert(0);
            *total = total
                .checked_add(*points)
                .ok_or(EngineError::AmountOverflow {
                    game: GameKind::Points,
                })?;
        }
    }
    Ok(totals)
}

/// Игра 2/9/16: сумма очков по лункам, затем попарный расчёт.
pub fn score_points(data: &PointsGameData, unit: Money) -> Result<NetPosition, EngineError> {
    let totals = match &data.input {
        PointsInput::Points(holes) => total_points(holes)?,
        PointsInput::Strokes(holes) => total_points(&strokes_to_points(holes))?,
    };

    pairwise_settlement(&totals, unit, GameKind::Points)
}
