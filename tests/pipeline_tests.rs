//! Общий расчёт `settle`: выбор игр, пропуски, жёсткие ошибки,
//! идемпотентность, параллельные вызовы.

use std::sync::Arc;

use golf_wager_engine::domain::{
    BbbGameData, BbbHole, CardAssignment, CardGameData, GameKind, GirGameData, HoleConfiguration,
    HoleScore, Money, NetPosition, Player, PlayerId, PointsGameData, PointsInput, RawGameData,
    SettlementConfig, StrokeGameData,
};
use golf_wager_engine::engine::{
    combine_positions, replay, settle, EngineError, SkipReason, SkippedGame,
};

// -----------------------------
// ВСПОМОГАТЕЛЬНЫЕ КОНСТРУКТОРЫ
// -----------------------------

fn roster() -> Vec<Player> {
    vec![
        Player::new(1, "Daniel"),
        Player::new(2, "Rory"),
        Player::new(3, "Oscar"),
        Player::new(4, "Kate"),
    ]
}

fn card(card_id: u64, cents: i64, player_id: PlayerId) -> CardAssignment {
    CardAssignment {
        card_id,
        card_type: "snake".to_string(),
        value: Money(cents),
        player_id,
        timestamp: 0,
    }
}

fn worked_example_cards() -> CardGameData {
    CardGameData::new([card(1, 200, 1), card(2, 400, 2), card(3, 400, 3), card(4, 1400, 4)])
}

fn hole<T: Copy>(number: u8, pairs: &[(PlayerId, T)]) -> HoleScore<T> {
    HoleScore {
        hole: number,
        entries: pairs.iter().copied().collect(),
    }
}

/// Полный раунд: карточки, удары, BBB, GIR.
fn full_round() -> RawGameData {
    let mut data = RawGameData::new(roster());
    data.cards = Some(worked_example_cards());

    let strokes: Vec<HoleScore<u32>> = (1..=18u8)
        .map(|h| {
            let x = u32::from(h);
            hole(h, &[(1, 4 + x % 2), (2, 4), (3, 5 - x % 3 / 2), (4, 3 + x % 4)])
        })
        .collect();
    data.points = Some(PointsGameData {
        input: PointsInput::Strokes(strokes.clone()),
    });
    data.strokes = Some(StrokeGameData { holes: strokes });

    data.bbb = Some(BbbGameData {
        holes: (1..=18u8)
            .map(|h| BbbHole {
                hole: h,
                first_on: Some(u64::from(h % 4) + 1),
                closest_to: Some(2),
                first_in: None,
            })
            .collect(),
    });

    data.gir = Some(GirGameData {
        holes: (1..=18u8)
            .map(|h| hole(h, &[(1, h % 2 == 0), (2, h % 3 == 0), (3, true), (4, h > 12)]))
            .collect(),
        config: HoleConfiguration {
            penalty_holes: [5].into_iter().collect(),
            bonus_holes: [14].into_iter().collect(),
        },
    });

    data
}

fn full_config() -> SettlementConfig {
    SettlementConfig {
        points_unit: Money(25),
        segment_pot: Money(500),
        bbb_unit: Money(50),
        bbb_pot: Money(300),
        gir_unit: Money(20),
        gir_pot: Money(200),
    }
}

const ALL_GAMES: [GameKind; 7] = [
    GameKind::Cards,
    GameKind::Points,
    GameKind::SegmentPot,
    GameKind::BbbPoints,
    GameKind::BbbSegmentPot,
    GameKind::GirPoints,
    GameKind::GirSegmentPot,
];

fn non_zero(p: &NetPosition) -> Vec<(PlayerId, Money)> {
    p.iter().filter(|(_, m)| !m.is_zero()).collect()
}

// -----------------------------
// ОСНОВНОЙ СЦЕНАРИЙ
// -----------------------------

#[test]
fn cards_only_settlement_matches_worked_example() {
    let mut data = RawGameData::new(roster());
    data.cards = Some(worked_example_cards());

    let result = settle(&[GameKind::Cards], &SettlementConfig::default(), &data).unwrap();

    assert_eq!(result.net_position.get(1), Money(1267));
    assert_eq!(result.net_position.get(2), Money(67));
    assert_eq!(result.net_position.get(3), Money(66));
    assert_eq!(result.net_position.get(4), Money(-1400));

    assert_eq!(result.transactions.len(), 3);
    assert!(result.transactions.iter().all(|t| t.from == 4));

    let breakdown = result.card_breakdown.expect("Разбивка карточной игры должна быть");
    assert_eq!(breakdown.pay_up_threshold, Money(1080));
    assert!(result.skipped.is_empty());
}

#[test]
fn all_games_combine_into_balanced_position() {
    let result = settle(&ALL_GAMES, &full_config(), &full_round()).unwrap();

    assert!(result.net_position.is_balanced());
    for game in &result.per_game {
        assert!(game.position.is_balanced(), "Игра {} несбалансирована", game.kind);
    }

    // GIR в двух режимах: списывается только банковый.
    assert_eq!(
        result.skipped,
        vec![SkippedGame {
            kind: GameKind::GirPoints,
            reason: SkipReason::SupersededBy(GameKind::GirSegmentPot),
        }]
    );
    assert_eq!(result.per_game.len(), 6);

    // Итог = сумма позиций игр.
    let recombined = combine_positions(result.per_game.iter().map(|g| &g.position)).unwrap();
    assert_eq!(recombined, result.net_position);

    // Переводы воспроизводят итог.
    assert_eq!(non_zero(&replay(&result.transactions)), non_zero(&result.net_position));
    assert!(result.transactions.len() < result.net_position.participants().max(1));
}

#[test]
fn per_game_positions_follow_selection_in_kind_order() {
    let result = settle(
        &[GameKind::BbbPoints, GameKind::Cards, GameKind::Points],
        &full_config(),
        &full_round(),
    )
    .unwrap();

    let kinds: Vec<GameKind> = result.per_game.iter().map(|g| g.kind).collect();
    assert_eq!(kinds, vec![GameKind::Cards, GameKind::Points, GameKind::BbbPoints]);
}

// -----------------------------
// ПРОПУСКИ (НЕ ОШИБКИ)
// -----------------------------

#[test]
fn zero_unit_value_skips_game_silently() {
    let config = SettlementConfig {
        points_unit: Money::ZERO,
        ..full_config()
    };

    let result = settle(&[GameKind::Points], &config, &full_round()).unwrap();

    assert!(result.per_game.is_empty());
    assert!(result.net_position.is_empty());
    assert!(result.transactions.is_empty());
    assert_eq!(
        result.skipped,
        vec![SkippedGame {
            kind: GameKind::Points,
            reason: SkipReason::MissingUnitValue,
        }]
    );
}

#[test]
fn missing_game_data_skips_game() {
    let data = RawGameData::new(roster());
    let result = settle(&[GameKind::BbbPoints, GameKind::Cards], &full_config(), &data).unwrap();

    assert_eq!(result.skipped.len(), 2);
    assert!(result
        .skipped
        .iter()
        .all(|s| s.reason == SkipReason::MissingGameData));
    assert!(result.card_breakdown.is_none());
}

/// Выключенная игра не проверяется: её данные в расчёт не идут.
#[test]
fn skipped_game_is_not_validated() {
    let mut data = RawGameData::new(roster());
    data.bbb = Some(BbbGameData {
        holes: vec![BbbHole {
            hole: 1,
            first_on: Some(99),
            closest_to: None,
            first_in: None,
        }],
    });

    let result = settle(&[GameKind::BbbPoints], &SettlementConfig::default(), &data).unwrap();
    assert_eq!(result.skipped[0].reason, SkipReason::MissingUnitValue);
}

#[test]
fn empty_input_gives_empty_result() {
    let result = settle(&[], &SettlementConfig::default(), &RawGameData::default()).unwrap();

    assert!(result.net_position.is_empty());
    assert!(result.transactions.is_empty());
    assert!(result.per_game.is_empty());

    let result = settle(&ALL_GAMES, &full_config(), &RawGameData::default()).unwrap();
    assert!(result.net_position.is_empty());
    assert!(result.transactions.is_empty());
}

/// Состав есть, но никто ничего не набрал: итог пустой, без строк по $0.00.
#[test]
fn roster_without_scores_gives_empty_position() {
    let mut data = RawGameData::new(roster());
    data.cards = Some(CardGameData::default());
    data.bbb = Some(BbbGameData { holes: Vec::new() });

    let result = settle(&[GameKind::Cards, GameKind::BbbPoints], &full_config(), &data).unwrap();

    assert!(result.net_position.is_empty());
    assert!(result.transactions.is_empty());
    assert_eq!(result.per_game.len(), 2);
    assert!(result.per_game.iter().all(|g| g.position.participants() == 0));
}

// -----------------------------
// ЖЁСТКИЕ ОШИБКИ
// -----------------------------

#[test]
fn unknown_card_holder_fails_settlement() {
    let mut data = RawGameData::new(roster());
    data.cards = Some(CardGameData::new([card(1, 200, 1), card(2, 300, 99)]));

    let err = settle(&[GameKind::Cards], &SettlementConfig::default(), &data).unwrap_err();
    assert_eq!(
        err,
        EngineError::UnknownPlayerReference {
            game: GameKind::Cards,
            player_id: 99,
        }
    );
}

#[test]
fn unknown_player_in_hole_scores_fails_settlement() {
    let mut data = full_round();
    data.gir = Some(GirGameData {
        holes: vec![hole(1, &[(1, true), (7, false)])],
        config: HoleConfiguration::default(),
    });

    let err = settle(&[GameKind::GirSegmentPot], &full_config(), &data).unwrap_err();
    assert_eq!(
        err,
        EngineError::UnknownPlayerReference {
            game: GameKind::GirSegmentPot,
            player_id: 7,
        }
    );
}

#[test]
fn hole_out_of_range_fails_settlement() {
    let mut data = RawGameData::new(roster());
    data.strokes = Some(StrokeGameData {
        holes: vec![hole(19, &[(1, 4u32), (2, 5)])],
    });

    let err = settle(&[GameKind::SegmentPot], &full_config(), &data).unwrap_err();
    assert_eq!(
        err,
        EngineError::HoleOutOfRange {
            game: GameKind::SegmentPot,
            hole: 19,
        }
    );
}

#[test]
fn overlapping_gir_configuration_fails_settlement() {
    let mut data = full_round();
    if let Some(gir) = data.gir.as_mut() {
        gir.config.bonus_holes.insert(5);
    }

    let err = settle(&[GameKind::GirPoints], &full_config(), &data).unwrap_err();
    assert_eq!(err, EngineError::OverlappingHoleConfiguration { hole: 5 });
}

// -----------------------------
// ИДЕМПОТЕНТНОСТЬ И ПАРАЛЛЕЛЬНОСТЬ
// -----------------------------

#[test]
fn identical_inputs_give_byte_identical_output() {
    let data = full_round();
    let config = full_config();

    let first = serde_json::to_string(&settle(&ALL_GAMES, &config, &data).unwrap()).unwrap();
    let second = serde_json::to_string(&settle(&ALL_GAMES, &config, &data).unwrap()).unwrap();
    assert_eq!(first, second);

    // Порядок и повторы в выборе игр не важны.
    let mut shuffled = ALL_GAMES.to_vec();
    shuffled.reverse();
    shuffled.push(GameKind::Cards);
    let third = serde_json::to_string(&settle(&shuffled, &config, &data).unwrap()).unwrap();
    assert_eq!(first, third);
}

#[tokio::test]
async fn concurrent_settle_calls_agree() {
    let data = Arc::new(full_round());
    let config = Arc::new(full_config());
    let expected = settle(&ALL_GAMES, &config, &data).unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let data = Arc::clone(&data);
        let config = Arc::clone(&config);
        handles.push(tokio::task::spawn_blocking(move || {
            settle(&ALL_GAMES, &config, &data)
        }));
    }

    for handle in handles {
        let result = handle.await.unwrap().unwrap();
        assert_eq!(result, expected);
    }
}
