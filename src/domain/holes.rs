use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::{HoleNumber, PlayerId};

pub const FIRST_HOLE: HoleNumber = 1;
pub const LAST_HOLE: HoleNumber = 18;

pub fn is_valid_hole(hole: HoleNumber) -> bool {
    (FIRST_HOLE..=LAST_HOLE).contains(&hole)
}

/// Отрезок раунда, за который разыгрывается отдельный банк
/// (Front / Back / Total, он же Nassau).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    /// Лунки 1–9.
    Front,
    /// Лунки 10–18.
    Back,
    /// Все 18 лунок.
    Total,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Front, Segment::Back, Segment::Total];

    pub fn contains(self, hole: HoleNumber) -> bool {
        match self {
            Segment::Front => (1..=9).contains(&hole),
            Segment::Back => (10..=18).contains(&hole),
            Segment::Total => is_valid_hole(hole),
        }
    }
}

/// Какие лунки штрафные, а какие бонусные (для GIR).
/// Оба множества не пересекаются; остальные лунки — обычные.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HoleConfiguration {
    #[serde(default)]
    pub penalty_holes: BTreeSet<HoleNumber>,
    #[serde(default)]
    pub bonus_holes: BTreeSet<HoleNumber>,
}

/// Тип лунки с точки зрения GIR.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoleKind {
    Penalty,
    Bonus,
    Neutral,
}

impl HoleConfiguration {
    pub fn kind_of(&self, hole: HoleNumber) -> HoleKind {
        if self.penalty_holes.contains(&hole) {
            HoleKind::Penalty
        } else if self.bonus_holes.contains(&hole) {
            HoleKind::Bonus
        } else {
            HoleKind::Neutral
        }
    }

    /// Первая лунка, попавшая в оба множества (если есть).
    pub fn first_overlap(&self) -> Option<HoleNumber> {
        self.penalty_holes
            .intersection(&self.bonus_holes)
            .next()
            .copied()
    }
}

/// Записи одной лунки: игрок -> сырое значение (удары, попадание и т.п.).
///
/// Игрока, которого нет в `entries`, на этой лунке ещё не посчитали —
/// лунка для него просто пропускается.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HoleScore<T> {
    pub hole: HoleNumber,
    pub entries: BTreeMap<PlayerId, T>,
}

impl<T> HoleScore<T> {
    pub fn new(hole: HoleNumber) -> Self {
        Self {
            hole,
            entries: BTreeMap::new(),
        }
    }

    pub fn with(mut self, player: PlayerId, value: T) -> Self {
        self.entries.insert(player, value);
        self
    }
}
