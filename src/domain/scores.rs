use serde::{Deserialize, Serialize};

use crate::domain::cards::CardGameData;
use crate::domain::holes::{HoleConfiguration, HoleScore};
use crate::domain::player::Player;
use crate::domain::{HoleNumber, PlayerId};

/// Как пришли данные игры 2/9/16.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PointsInput {
    /// Очки уже посчитаны снаружи: лунка -> игрок -> очки.
    Points(Vec<HoleScore<i64>>),
    /// Сырые удары: очки за лунку считаются по таблице 2/9/16.
    Strokes(Vec<HoleScore<u32>>),
}

/// Данные игры 2/9/16.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PointsGameData {
    pub input: PointsInput,
}

/// Удары по лункам для классической игры Front/Back/Total.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StrokeGameData {
    pub holes: Vec<HoleScore<u32>>,
}

/// Победители категорий BBB на одной лунке (каждая категория — 0 или 1 игрок).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BbbHole {
    pub hole: HoleNumber,
    #[serde(default)]
    pub first_on: Option<PlayerId>,
    #[serde(default)]
    pub closest_to: Option<PlayerId>,
    #[serde(default)]
    pub first_in: Option<PlayerId>,
}

impl BbbHole {
    /// Все названные победители лунки (с повторами, если один игрок взял
    /// несколько категорий).
    pub fn winners(&self) -> impl Iterator<Item = PlayerId> + '_ {
        [self.first_on, self.closest_to, self.first_in]
            .into_iter()
            .flatten()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BbbGameData {
    pub holes: Vec<BbbHole>,
}

/// Попадания в грин в регуляцию: лунка -> игрок -> hit/miss.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GirGameData {
    pub holes: Vec<HoleScore<bool>>,
    #[serde(default)]
    pub config: HoleConfiguration,
}

/// Снимок всех данных раунда, уже проверенных и авторизованных снаружи.
///
/// Каждому виду данных — свой строго типизированный слот; несколько
/// видов игр могут читать один слот (BBB и GIR — в двух режимах).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RawGameData {
    pub roster: Vec<Player>,
    pub cards: Option<CardGameData>,
    pub points: Option<PointsGameData>,
    pub strokes: Option<StrokeGameData>,
    pub bbb: Option<BbbGameData>,
    pub gir: Option<GirGameData>,
}

impl RawGameData {
    pub fn new(roster: Vec<Player>) -> Self {
        Self {
            roster,
            ..Self::default()
        }
    }

    pub fn roster_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.roster.iter().map(|p| p.id)
    }
}
