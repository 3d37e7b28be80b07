use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::money::Money;
use crate::domain::PlayerId;

/// Нетто-позиция группы: PlayerId -> сумма со знаком.
///
/// Положительное значение = игроку должны, отрицательное = игрок должен.
/// Инвариант всех расчётов: сумма значений ровно 0 (целые центы).
///
/// BTreeMap, а не HashMap: порядок игроков детерминирован, и одинаковый
/// вход всегда даёт побайтно одинаковый вывод.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct NetPosition {
    balances: BTreeMap<PlayerId, Money>,
}

impl NetPosition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Позиция с нулями для всех перечисленных игроков.
    pub fn zeroed(players: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            balances: players.into_iter().map(|p| (p, Money::ZERO)).collect(),
        }
    }

    pub fn get(&self, player: PlayerId) -> Money {
        self.balances.get(&player).copied().unwrap_or(Money::ZERO)
    }

    /// Гарантировать, что игрок есть в позиции (с нулём, если не было).
    pub fn touch(&mut self, player: PlayerId) {
        self.balances.entry(player).or_insert(Money::ZERO);
    }

    pub fn credit(&mut self, player: PlayerId, amount: Money) {
        *self.balances.entry(player).or_insert(Money::ZERO) += amount;
    }

    pub fn debit(&mut self, player: PlayerId, amount: Money) {
        *self.balances.entry(player).or_insert(Money::ZERO) -= amount;
    }

    /// Перевод: одновременно списать у `from` и зачислить `to`.
    /// Сумма позиции от этого не меняется.
    pub fn transfer(&mut self, from: PlayerId, to: PlayerId, amount: Money) {
        self.debit(from, amount);
        self.credit(to, amount);
    }

    /// Зачисление с проверкой переполнения. При `None` позиция не меняется.
    pub fn checked_credit(&mut self, player: PlayerId, amount: Money) -> Option<()> {
        let balance = self.balances.entry(player).or_insert(Money::ZERO);
        *balance = balance.checked_add(amount)?;
        Some(())
    }

    /// Перевод с проверкой переполнения обеих сторон.
    pub fn checked_transfer(&mut self, from: PlayerId, to: PlayerId, amount: Money) -> Option<()> {
        if from == to {
            return Some(());
        }
        let paid = self.get(from).checked_sub(amount)?;
        let received = self.get(to).checked_add(amount)?;
        self.balances.insert(from, paid);
        self.balances.insert(to, received);
        Some(())
    }

    /// Точная сумма в i128: сбалансированная позиция с крупными суммами
    /// не должна переполняться на промежуточных шагах.
    fn exact_total(&self) -> i128 {
        self.balances.values().map(|m| i128::from(m.0)).sum()
    }

    /// Сумма всех значений. Для корректной позиции = 0.
    /// Если сумма не влезает в i64, возвращается ближайшая граница.
    pub fn total(&self) -> Money {
        let total = self.exact_total();
        let clamped = i64::try_from(total).unwrap_or(if total < 0 { i64::MIN } else { i64::MAX });
        Money(clamped)
    }

    pub fn is_balanced(&self) -> bool {
        self.exact_total() == 0
    }

    /// Убрать игроков с нулевым итогом.
    pub fn without_zeros(mut self) -> Self {
        self.balances.retain(|_, m| !m.is_zero());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, Money)> + '_ {
        self.balances.iter().map(|(p, m)| (*p, *m))
    }

    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.balances.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Сколько игроков с ненулевым итогом.
    pub fn participants(&self) -> usize {
        self.balances.values().filter(|m| !m.is_zero()).count()
    }
}

impl FromIterator<(PlayerId, Money)> for NetPosition {
    /// Повторяющиеся игроки суммируются.
    fn from_iter<I: IntoIterator<Item = (PlayerId, Money)>>(iter: I) -> Self {
        let mut position = NetPosition::new();
        for (player, amount) in iter {
            position.credit(player, amount);
        }
        position
    }
}
