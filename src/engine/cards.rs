//! Карточная игра: расчёт "pay-up".
//!
//! Вход: суммарный долг каждого игрока (сумма стоимостей его текущих
//! карточек). Выход: нетто-позиция, а не переводы.
//!
//! Две фазы:
//!   1. Порог `min + 0.4 × (total − min)`. Все, кроме держателей минимума,
//!      чей долг не выше порога, целиком отдают свой долг держателям
//!      минимума (поровну, если минимум делят несколько игроков).
//!   2. Долги тех, кто выше порога ("крупные должники"), делятся поровну
//!      между всеми рассчитавшимися: держателями минимума и теми, кто
//!      заплатил в фазе 1.
//!
//! Собственный долг держателя минимума никому не платится.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{CardGameData, GameKind, Money, NetPosition, PlayerId};
use crate::engine::errors::EngineError;

/// Множитель порога 0.4 в виде дроби 2/5: сравнения идут в целых числах.
pub const PAY_UP_NUMERATOR: i64 = 2;
pub const PAY_UP_DENOMINATOR: i64 = 5;

/// Роль игрока в расчёте.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CardRole {
    /// Минимальный долг: получает в фазе 1.
    MinimumHolder,
    /// Долг не выше порога: отдал всё в фазе 1.
    PaidUp,
    /// Долг выше порога: платит в фазе 2.
    LargeDebtor,
}

/// Разбивка по игроку для отображения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardPlayerBreakdown {
    pub player_id: PlayerId,
    pub debt: Money,
    pub role: CardRole,
    pub phase_one_paid: Money,
    pub phase_one_received: Money,
    pub phase_two_paid: Money,
    pub phase_two_received: Money,
    /// Итог: получил минус заплатил.
    pub net: Money,
}

/// Полная разбивка карточного расчёта.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardSettlementBreakdown {
    pub total_debt: Money,
    pub min_debt: Money,
    pub net_pot: Money,
    /// Порог, округлённый вниз до цента. Принадлежность к порогу
    /// проверяется точно, без округления.
    pub pay_up_threshold: Money,
    /// Сколько всего перешло держателям минимума в фазе 1.
    pub pay_up_total: Money,
    /// Сколько распределено в фазе 2.
    pub remainder: Money,
    pub players: Vec<CardPlayerBreakdown>,
}

/// Результат карточного расчёта.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardSettlement {
    pub position: NetPosition,
    pub breakdown: CardSettlementBreakdown,
}

fn overflow() -> EngineError {
    EngineError::AmountOverflow {
        game: GameKind::Cards,
    }
}

/// Долг каждого игрока состава: сумма стоимостей его карточек.
/// Игрок без карточек должен 0.
pub fn card_debts(
    data: &CardGameData,
    roster: &[PlayerId],
) -> Result<BTreeMap<PlayerId, Money>, EngineError> {
    let mut debts: BTreeMap<PlayerId, Money> = roster.iter().map(|p| (*p, Money::ZERO)).collect();
    for assignment in data.assignments.values() {
        let debt = debts.entry(assignment.player_id).or_insert(Money::ZERO);
        *debt = debt.checked_add(assignment.value).ok_or_else(overflow)?;
    }
    Ok(debts)
}

/// Долг не выше порога `min + 2/5 × net_pot` (точно, в i128).
fn within_pay_up_threshold(debt: Money, min_debt: Money, net_pot: Money) -> bool {
    let lhs = i128::from(debt.0) * i128::from(PAY_UP_DENOMINATOR);
    let rhs = i128::from(min_debt.0) * i128::from(PAY_UP_DENOMINATOR)
        + i128::from(net_pot.0) * i128::from(PAY_UP_NUMERATOR);
    lhs <= rhs
}

/// Порог для отображения, округлённый вниз до цента.
fn displayed_threshold(min_debt: Money, net_pot: Money) -> Option<Money> {
    let share = i128::from(net_pot.0) * i128::from(PAY_UP_NUMERATOR)
        / i128::from(PAY_UP_DENOMINATOR);
    i64::try_from(i128::from(min_debt.0) + share).ok().map(Money)
}

/// Алгоритм "pay-up" по уже посчитанным долгам.
///
/// Суммы, не влезающие в i64, дают `AmountOverflow`.
pub fn settle_cards(debts: &BTreeMap<PlayerId, Money>) -> Result<CardSettlement, EngineError> {
    let Some(min_debt) = debts.values().copied().min() else {
        return Ok(CardSettlement::default());
    };

    let total_debt = Money::checked_sum(debts.values().copied()).ok_or_else(overflow)?;
    let net_pot = total_debt.checked_sub(min_debt).ok_or_else(overflow)?;
    let pay_up_threshold = displayed_threshold(min_debt, net_pot).ok_or_else(overflow)?;

    let mut rows: Vec<CardPlayerBreakdown> = debts
        .iter()
        .map(|(player_id, debt)| {
            let role = if *debt == min_debt {
                CardRole::MinimumHolder
            } else if within_pay_up_threshold(*debt, min_debt, net_pot) {
                CardRole::PaidUp
            } else {
                CardRole::LargeDebtor
            };
            CardPlayerBreakdown {
                player_id: *player_id,
                debt: *debt,
                role,
                phase_one_paid: Money::ZERO,
                phase_one_received: Money::ZERO,
                phase_two_paid: Money::ZERO,
                phase_two_received: Money::ZERO,
                net: Money::ZERO,
            }
        })
        .collect();

    // Фаза 1: мелкие долги целиком уходят держателям минимума.
    for row in rows.iter_mut().filter(|r| r.role == CardRole::PaidUp) {
        row.phase_one_paid = row.debt;
    }
    let pay_up_total =
        Money::checked_sum(rows.iter().map(|r| r.phase_one_paid)).ok_or_else(overflow)?;

    let holders: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, r)| r.role == CardRole::MinimumHolder)
        .map(|(i, _)| i)
        .collect();
    for (idx, share) in holders.iter().zip(pay_up_total.split_evenly(holders.len())) {
        rows[*idx].phase_one_received = share;
    }

    // Фаза 2: крупные долги делятся между всеми рассчитавшимися.
    for row in rows.iter_mut().filter(|r| r.role == CardRole::LargeDebtor) {
        row.phase_two_paid = row.debt;
    }
    let remainder =
        Money::checked_sum(rows.iter().map(|r| r.phase_two_paid)).ok_or_else(overflow)?;

    let settled: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, r)| r.role != CardRole::LargeDebtor)
        .map(|(i, _)| i)
        .collect();
    for (idx, share) in settled.iter().zip(remainder.split_evenly(settled.len())) {
        rows[*idx].phase_two_received = share;
    }

    let mut position = NetPosition::new();
    for row in rows.iter_mut() {
        row.net = row
            .phase_one_received
            .checked_add(row.phase_two_received)
            .and_then(|m| m.checked_sub(row.phase_one_paid))
            .and_then(|m| m.checked_sub(row.phase_two_paid))
            .ok_or_else(overflow)?;
        position.credit(row.player_id, row.net);
    }

    Ok(CardSettlement {
        position,
        breakdown: CardSettlementBreakdown {
            total_debt,
            min_debt,
            net_pot,
            pay_up_threshold,
            pay_up_total,
            remainder,
            players: rows,
        },
    })
}

/// Карточная игра целиком: долги по составу, затем "pay-up".
pub fn score_cards(
    data: &CardGameData,
    roster: &[PlayerId],
) -> Result<CardSettlement, EngineError> {
    settle_cards(&card_debts(data, roster)?)
}
