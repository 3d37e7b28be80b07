//! Общая логика банков Front / Back / Total.
//!
//! На каждый отрезок разыгрывается фиксированный банк. Лучший счёт
//! (больше = лучше) забирает банк, делёж поровну при ничьей среди лучших;
//! остальные участники отрезка скидываются на банк поровну. Если все
//! участники сыграли одинаково, банк отрезка не разыгрывается.
//!
//! Отрезки считаются независимо и складываются: можно выиграть Front
//! и проиграть Back.

use std::collections::BTreeMap;

use crate::domain::{
    GameKind, HoleNumber, HoleScore, Money, NetPosition, PlayerId, Segment, StrokeGameData,
};
use crate::engine::errors::EngineError;

/// Счёт участников по отрезкам. Игрок попадает в отрезок, только если у
/// него есть хотя бы одна запись на лунках этого отрезка.
pub type SegmentScores = BTreeMap<Segment, BTreeMap<PlayerId, i64>>;

/// Собрать счёт по отрезкам из записей по лункам.
pub fn segment_scores<T>(
    holes: &[HoleScore<T>],
    score: impl Fn(HoleNumber, &T) -> i64,
) -> SegmentScores {
    let mut scores = SegmentScores::new();
    for segment in Segment::ALL {
        let mut totals = BTreeMap::new();
        for hole in holes.iter().filter(|h| segment.contains(h.hole)) {
            for (player, value) in &hole.entries {
                *totals.entry(*player).or_insert(0) += score(hole.hole, value);
            }
        }
        scores.insert(segment, totals);
    }
    scores
}

/// Расчёт одного отрезка.
pub fn settle_segment(scores: &BTreeMap<PlayerId, i64>, pot: Money) -> NetPosition {
    let mut position = NetPosition::zeroed(scores.keys().copied());
    if !pot.is_positive() || scores.len() < 2 {
        return position;
    }

    let Some(best) = scores.values().copied().max() else {
        return position;
    };

    // BTreeMap: оба списка уже по возрастанию PlayerId.
    let (winners, losers): (Vec<PlayerId>, Vec<PlayerId>) =
        scores.keys().copied().partition(|p| scores[p] == best);

    // Все вровень: иначе игроки платили бы сами себе.
    if losers.is_empty() {
        return position;
    }

    for (player, share) in winners.iter().zip(pot.split_evenly(winners.len())) {
        position.credit(*player, share);
    }
    for (player, share) in losers.iter().zip(pot.split_evenly(losers.len())) {
        position.debit(*player, share);
    }

    position
}

/// Все три отрезка, результат суммируется. Игрок может выиграть банк
/// трижды, поэтому сумма по отрезкам проверяется на переполнение.
pub fn score_segment_pots(
    scores: &SegmentScores,
    pot: Money,
    game: GameKind,
) -> Result<NetPosition, EngineError> {
    let mut position = NetPosition::new();
    for segment_scores in scores.values() {
        for (player, amount) in settle_segment(segment_scores, pot).iter() {
            position
                .checked_credit(player, amount)
                .ok_or(EngineError::AmountOverflow { game })?;
        }
    }
    Ok(position)
}

/// Классическая игра по ударам: меньше ударов = лучше, поэтому удары
/// берутся со знаком минус.
pub fn score_stroke_segments(
    data: &StrokeGameData,
    pot: Money,
) -> Result<NetPosition, EngineError> {
    let scores = segment_scores(&data.holes, |_, strokes| -i64::from(*strokes));
    score_segment_pots(&scores, pot, GameKind::SegmentPot)
}
