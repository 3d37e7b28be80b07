use std::collections::BTreeMap;

use crate::domain::{GameKind, Money, NetPosition, PlayerId};
use crate::engine::errors::EngineError;

/// Сколько A получает от B при попарном сравнении очков.
///
/// Положительное значение = B платит A, отрицательное = A платит B.
/// Перестановка игроков меняет только знак.
pub fn pair_amount(a_points: i64, b_points: i64, unit: Money) -> Option<Money> {
    let diff = a_points.checked_sub(b_points)?;
    unit.checked_times(diff)
}

/// Попарный расчёт: для каждой неупорядоченной пары (A, B) игрок с большим
/// числом очков получает `разница × unit` от другого.
///
/// Каждый перевод одновременно зачисляет и списывает, так что нулевая сумма
/// выполняется по построению. `unit <= 0` — игра выключена, все по нулям.
/// Любое переполнение суммы — `AmountOverflow`, позиция не возвращается.
pub fn pairwise_settlement(
    totals: &BTreeMap<PlayerId, i64>,
    unit: Money,
    game: GameKind,
) -> Result<NetPosition, EngineError> {
    let mut position = NetPosition::zeroed(totals.keys().copied());
    if !unit.is_positive() {
        return Ok(position);
    }

    let players: Vec<(PlayerId, i64)> = totals.iter().map(|(p, v)| (*p, *v)).collect();

    for (i, &(a, a_points)) in players.iter().enumerate() {
        for &(b, b_points) in &players[i + 1..] {
            let amount =
                pair_amount(a_points, b_points, unit).ok_or(EngineError::AmountOverflow { game })?;

            let applied = if amount.is_positive() {
                position.checked_transfer(b, a, amount)
            } else if amount.is_negative() {
                Money::ZERO
                    .checked_sub(amount)
                    .and_then(|owed| position.checked_transfer(a, b, owed))
            } else {
                Some(())
            };
            applied.ok_or(EngineError::AmountOverflow { game })?;
        }
    }

    Ok(position)
}
