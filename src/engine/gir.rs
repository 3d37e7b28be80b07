//! GIR (green in regulation): попадания в грин по лункам с учётом
//! штрафных и бонусных лунок. Итог может быть отрицательным.

use std::collections::BTreeMap;

use crate::domain::{
    GameKind, GirGameData, HoleConfiguration, HoleKind, HoleNumber, Money, NetPosition, PlayerId,
};
use crate::engine::errors::EngineError;
use crate::engine::pairwise::pairwise_settlement;
use crate::engine::segment_pot::{score_segment_pots, segment_scores};

/// Очки за одну лунку:
///   - штрафная: попал +1, мимо −1;
///   - бонусная: попал +2, мимо 0;
///   - обычная: попал +1, мимо 0.
pub fn gir_hole_points(config: &HoleConfiguration, hole: HoleNumber, hit: bool) -> i64 {
    match (config.kind_of(hole), hit) {
        (HoleKind::Penalty, true) => 1,
        (HoleKind::Penalty, false) => -1,
        (HoleKind::Bonus, true) => 2,
        (HoleKind::Bonus, false) => 0,
        (HoleKind::Neutral, true) => 1,
        (HoleKind::Neutral, false) => 0,
    }
}

/// Итог очков GIR по игрокам (только те, у кого есть отметки).
pub fn gir_totals(data: &GirGameData) -> BTreeMap<PlayerId, i64> {
    let mut totals = BTreeMap::new();
    for hole in &data.holes {
        for (player, hit) in &hole.entries {
            *totals.entry(*player).or_insert(0) += gir_hole_points(&data.config, hole.hole, *hit);
        }
    }
    totals
}

/// GIR в попарном режиме: итоги со знаком идут в сравнение как есть.
pub fn score_gir_points(data: &GirGameData, unit: Money) -> Result<NetPosition, EngineError> {
    pairwise_settlement(&gir_totals(data), unit, GameKind::GirPoints)
}

/// GIR в режиме банков Front / Back / Total.
pub fn score_gir_segments(data: &GirGameData, pot: Money) -> Result<NetPosition, EngineError> {
    let scores = segment_scores(&data.holes, |hole, hit| {
        gir_hole_points(&data.config, hole, *hit)
    });
    score_segment_pots(&scores, pot, GameKind::GirSegmentPot)
}
