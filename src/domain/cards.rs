use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::money::Money;
use crate::domain::{CardId, PlayerId};

/// Текущее назначение штрафной карточки.
///
/// История переназначений хранится снаружи; сюда приходит уже
/// разрешённое состояние: на каждую карточку одно последнее назначение.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardAssignment {
    pub card_id: CardId,
    /// Тип карточки ("snake", "sandy" и т.п.) — только для отображения.
    pub card_type: String,
    /// Стоимость карточки, > 0.
    pub value: Money,
    pub player_id: PlayerId,
    /// Время назначения (unix ms). На расчёт не влияет.
    #[serde(default)]
    pub timestamp: i64,
}

/// Данные карточной игры: card_id -> текущее назначение.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardGameData {
    pub assignments: BTreeMap<CardId, CardAssignment>,
}

impl CardGameData {
    pub fn new(assignments: impl IntoIterator<Item = CardAssignment>) -> Self {
        Self {
            assignments: assignments
                .into_iter()
                .map(|a| (a.card_id, a))
                .collect(),
        }
    }
}
