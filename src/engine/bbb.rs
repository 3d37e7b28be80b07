//! BBB (Bingo Bango Bongo): на каждой лунке три категории — первый на
//! грине, ближе всех к флагу, первый в лунке. Каждая выигранная категория
//! = 1 очко.

use std::collections::BTreeMap;

use crate::domain::{BbbGameData, GameKind, HoleScore, Money, NetPosition, PlayerId};
use crate::engine::errors::EngineError;
use crate::engine::pairwise::pairwise_settlement;
use crate::engine::segment_pot::{score_segment_pots, segment_scores};

/// Очки по лункам. На каждой записанной лунке участвует весь состав
/// группы (с нулём, если категорий не взял).
pub fn bbb_hole_points(data: &BbbGameData, roster: &[PlayerId]) -> Vec<HoleScore<i64>> {
    data.holes
        .iter()
        .map(|hole| {
            let mut entries: BTreeMap<PlayerId, i64> = roster.iter().map(|p| (*p, 0)).collect();
            for winner in hole.winners() {
                *entries.entry(winner).or_insert(0) += 1;
            }
            HoleScore {
                hole: hole.hole,
                entries,
            }
        })
        .collect()
}

/// Итог очков BBB по игрокам (весь состав, даже без очков).
pub fn bbb_totals(data: &BbbGameData, roster: &[PlayerId]) -> BTreeMap<PlayerId, i64> {
    let mut totals: BTreeMap<PlayerId, i64> = roster.iter().map(|p| (*p, 0)).collect();
    for hole in &data.holes {
        for winner in hole.winners() {
            *totals.entry(winner).or_insert(0) += 1;
        }
    }
    totals
}

/// BBB в попарном режиме.
pub fn score_bbb_points(
    data: &BbbGameData,
    roster: &[PlayerId],
    unit: Money,
) -> Result<NetPosition, EngineError> {
    pairwise_settlement(&bbb_totals(data, roster), unit, GameKind::BbbPoints)
}

/// BBB в режиме банков Front / Back / Total.
pub fn score_bbb_segments(
    data: &BbbGameData,
    roster: &[PlayerId],
    pot: Money,
) -> Result<NetPosition, EngineError> {
    let holes = bbb_hole_points(data, roster);
    let scores = segment_scores(&holes, |_, points| *points);
    score_segment_pots(&scores, pot, GameKind::BbbSegmentPot)
}
