//! Общий расчёт по нескольким играм: выбранные игры → позиции игр →
//! объединённая позиция → переводы "кто кому".
//!
//! Чистая функция: никакого кэша, никакого ввода-вывода. Одинаковый вход
//! всегда даёт одинаковый результат, так что вызывающий может спокойно
//! кэшировать или повторять запрос.

use core::fmt;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::domain::{
    GameKind, Money, NetPosition, PlayerId, RawGameData, SettlementConfig, Transaction,
};
use crate::engine::bbb::{score_bbb_points, score_bbb_segments};
use crate::engine::cards::{score_cards, CardSettlementBreakdown};
use crate::engine::combiner::{combine, GamePosition};
use crate::engine::errors::EngineError;
use crate::engine::gir::{score_gir_points, score_gir_segments};
use crate::engine::points::score_points;
use crate::engine::segment_pot::score_stroke_segments;
use crate::engine::solver::settle_debts;
use crate::engine::validation::validate_game_data;

/// Почему выбранная игра не вошла в расчёт. Это не ошибка: настройки
/// могут быть заполнены частично.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SkipReason {
    /// Ставка/банк не задан или не больше нуля.
    MissingUnitValue,
    /// Нет данных для этой игры.
    MissingGameData,
    /// Игра уже учтена в другом режиме.
    SupersededBy(GameKind),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingUnitValue => f.write_str("ставка не задана"),
            SkipReason::MissingGameData => f.write_str("нет данных игры"),
            SkipReason::SupersededBy(kind) => write!(f, "учтено в режиме {kind}"),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkippedGame {
    pub kind: GameKind,
    pub reason: SkipReason,
}

/// Итог расчёта.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementResult {
    /// Объединённая позиция по всем учтённым играм.
    pub net_position: NetPosition,
    /// Минимальный список переводов.
    pub transactions: Vec<Transaction>,
    /// Позиция каждой учтённой игры отдельно.
    pub per_game: Vec<GamePosition>,
    /// Подробности карточной игры (если она учтена).
    pub card_breakdown: Option<CardSettlementBreakdown>,
    pub skipped: Vec<SkippedGame>,
}

/// Посчитать одну игру. `None` — данных для неё нет.
fn score_game(
    kind: GameKind,
    unit: Money,
    data: &RawGameData,
    roster: &[PlayerId],
) -> Result<Option<(NetPosition, Option<CardSettlementBreakdown>)>, EngineError> {
    let scored = match kind {
        GameKind::Cards => match &data.cards {
            Some(cards) => {
                let settlement = score_cards(cards, roster)?;
                Some((settlement.position, Some(settlement.breakdown)))
            }
            None => None,
        },
        GameKind::Points => match &data.points {
            Some(points) => Some((score_points(points, unit)?, None)),
            None => None,
        },
        GameKind::SegmentPot => match &data.strokes {
            Some(strokes) => Some((score_stroke_segments(strokes, unit)?, None)),
            None => None,
        },
        GameKind::BbbPoints => match &data.bbb {
            Some(bbb) => Some((score_bbb_points(bbb, roster, unit)?, None)),
            None => None,
        },
        GameKind::BbbSegmentPot => match &data.bbb {
            Some(bbb) => Some((score_bbb_segments(bbb, roster, unit)?, None)),
            None => None,
        },
        GameKind::GirPoints => match &data.gir {
            Some(gir) => Some((score_gir_points(gir, unit)?, None)),
            None => None,
        },
        GameKind::GirSegmentPot => match &data.gir {
            Some(gir) => Some((score_gir_segments(gir, unit)?, None)),
            None => None,
        },
    };

    Ok(scored)
}

/// Главная точка входа движка.
///
/// Порядок выбранных игр и повторы в `selected` на результат не влияют.
/// Любая жёсткая ошибка отменяет расчёт целиком.
pub fn settle(
    selected: &[GameKind],
    config: &SettlementConfig,
    data: &RawGameData,
) -> Result<SettlementResult, EngineError> {
    let kinds: BTreeSet<GameKind> = selected.iter().copied().collect();
    let roster: Vec<PlayerId> = data.roster_ids().collect();

    let mut per_game = Vec::new();
    let mut skipped = Vec::new();
    let mut card_breakdown = None;

    for kind in kinds.iter().copied() {
        // GIR в двух режимах сразу не списывается дважды.
        if kind == GameKind::GirPoints && kinds.contains(&GameKind::GirSegmentPot) {
            skipped.push(SkippedGame {
                kind,
                reason: SkipReason::SupersededBy(GameKind::GirSegmentPot),
            });
            continue;
        }

        let unit = config.unit_value(kind).unwrap_or(Money::ZERO);
        if kind != GameKind::Cards && !unit.is_positive() {
            warn!(game = %kind, unit = unit.0, "game skipped: no usable unit value");
            skipped.push(SkippedGame {
                kind,
                reason: SkipReason::MissingUnitValue,
            });
            continue;
        }

        validate_game_data(kind, data)?;

        match score_game(kind, unit, data, &roster)? {
            Some((position, breakdown)) => {
                debug!(
                    game = %kind,
                    players = position.len(),
                    participants = position.participants(),
                    "game scored"
                );
                if breakdown.is_some() {
                    card_breakdown = breakdown;
                }
                per_game.push(GamePosition { kind, position });
            }
            None => {
                warn!(game = %kind, "game skipped: no game data");
                skipped.push(SkippedGame {
                    kind,
                    reason: SkipReason::MissingGameData,
                });
            }
        }
    }

    let net_position = combine(&per_game).map_err(|err| {
        error!(%err, "settlement aborted");
        err
    })?;
    let transactions = settle_debts(&net_position)?;

    info!(
        games = per_game.len(),
        skipped = skipped.len(),
        participants = net_position.participants(),
        transactions = transactions.len(),
        "settlement computed"
    );

    Ok(SettlementResult {
        net_position,
        transactions,
        per_game,
        card_breakdown,
        skipped,
    })
}
