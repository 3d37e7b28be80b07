use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::money::Money;

/// Виды игр, которые можно включить в общий расчёт.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GameKind {
    /// Штрафные карточки (алгоритм "pay-up").
    Cards,
    /// Очковая игра 2/9/16, попарные расчёты.
    Points,
    /// Классика Front/Back/Total по ударам.
    SegmentPot,
    /// BBB, попарные расчёты по очкам.
    #[serde(rename = "BBBPoints")]
    BbbPoints,
    /// BBB, банки Front/Back/Total.
    #[serde(rename = "BBBSegmentPot")]
    BbbSegmentPot,
    /// GIR, попарные расчёты по очкам.
    #[serde(rename = "GIRPoints")]
    GirPoints,
    /// GIR, банки Front/Back/Total.
    #[serde(rename = "GIRSegmentPot")]
    GirSegmentPot,
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameKind::Cards => "Cards",
            GameKind::Points => "Points",
            GameKind::SegmentPot => "SegmentPot",
            GameKind::BbbPoints => "BBBPoints",
            GameKind::BbbSegmentPot => "BBBSegmentPot",
            GameKind::GirPoints => "GIRPoints",
            GameKind::GirSegmentPot => "GIRSegmentPot",
        };
        f.write_str(name)
    }
}

/// Ставки по видам игр.
///
/// Ноль или отсутствие значения = игра выключена (это не ошибка:
/// интерфейс позволяет заполнять настройки частично).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SettlementConfig {
    /// Цена одного очка в игре 2/9/16.
    pub points_unit: Money,
    /// Банк на один отрезок в классике Front/Back/Total.
    pub segment_pot: Money,
    /// Цена одного очка BBB.
    pub bbb_unit: Money,
    /// Банк на один отрезок BBB.
    pub bbb_pot: Money,
    /// Цена одного очка GIR.
    pub gir_unit: Money,
    /// Банк на один отрезок GIR.
    pub gir_pot: Money,
}

impl SettlementConfig {
    /// Ставка для вида игры. У карточек своей ставки нет — суммы берутся
    /// из стоимости карточек, поэтому для них `None`.
    pub fn unit_value(&self, kind: GameKind) -> Option<Money> {
        match kind {
            GameKind::Cards => None,
            GameKind::Points => Some(self.points_unit),
            GameKind::SegmentPot => Some(self.segment_pot),
            GameKind::BbbPoints => Some(self.bbb_unit),
            GameKind::BbbSegmentPot => Some(self.bbb_pot),
            GameKind::GirPoints => Some(self.gir_unit),
            GameKind::GirSegmentPot => Some(self.gir_pot),
        }
    }
}
