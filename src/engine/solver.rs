//! "Кто кому должен": сведение нетто-позиции к минимальному списку переводов.

use std::cmp::Reverse;

use crate::domain::{Money, NetPosition, PlayerId, Transaction};
use crate::engine::errors::{EngineError, InvariantSource};

/// Индекс стороны с наибольшим остатком; при равенстве — меньший PlayerId.
fn largest(side: &[(PlayerId, Money)]) -> Option<usize> {
    side.iter()
        .enumerate()
        .max_by_key(|(_, (player, amount))| (*amount, Reverse(*player)))
        .map(|(i, _)| i)
}

/// Жадное сведение "крупнейший с крупнейшим".
///
/// Каждый шаг закрывает хотя бы одну сторону, последний — обе, так что
/// переводов не больше `n − 1` для `n` игроков с ненулевым итогом.
/// Игроки с нулём в расчёт не попадают.
///
/// Несбалансированная позиция — ошибка выше по цепочке: переводы не
/// строятся, позиция не "подправляется".
pub fn settle_debts(position: &NetPosition) -> Result<Vec<Transaction>, EngineError> {
    if !position.is_balanced() {
        return Err(EngineError::InvariantViolation {
            origin: InvariantSource::Solver,
            total: position.total(),
        });
    }

    let mut creditors: Vec<(PlayerId, Money)> =
        position.iter().filter(|(_, m)| m.is_positive()).collect();
    let mut debtors: Vec<(PlayerId, Money)> = position
        .iter()
        .filter(|(_, m)| m.is_negative())
        .map(|(p, m)| (p, -m))
        .collect();

    let mut transactions = Vec::new();

    while let (Some(ci), Some(di)) = (largest(&creditors), largest(&debtors)) {
        let (to, receivable) = creditors[ci];
        let (from, payable) = debtors[di];
        let amount = receivable.min(payable);

        transactions.push(Transaction { from, to, amount });

        creditors[ci].1 -= amount;
        debtors[di].1 -= amount;

        if creditors[ci].1.is_zero() {
            creditors.swap_remove(ci);
        }
        if debtors[di].1.is_zero() {
            debtors.swap_remove(di);
        }
    }

    Ok(transactions)
}

/// Позиция, которую кодирует список переводов: `to` получает, `from` платит.
pub fn replay(transactions: &[Transaction]) -> NetPosition {
    let mut position = NetPosition::new();
    for tx in transactions {
        position.transfer(tx.from, tx.to, tx.amount);
    }
    position
}
