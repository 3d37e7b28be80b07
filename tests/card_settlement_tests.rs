//! Карточная игра: алгоритм "pay-up".
//!
//! Проверяем:
//! - эталонный пример Daniel / Rory / Oscar / Kate до цента;
//! - делёж фазы 1 между несколькими держателями минимума;
//! - граничный случай "ровно на пороге";
//! - вырожденные входы (пусто, все равны, игрок без карточек);
//! - суммы на грани i64.

use std::collections::BTreeMap;

use golf_wager_engine::domain::{CardAssignment, CardGameData, GameKind, Money, PlayerId};
use golf_wager_engine::engine::cards::{card_debts, score_cards, settle_cards, CardRole};
use golf_wager_engine::engine::EngineError;

const DANIEL: PlayerId = 1;
const RORY: PlayerId = 2;
const OSCAR: PlayerId = 3;
const KATE: PlayerId = 4;

/// Утилита: долги из пар (игрок, центы).
fn debts(pairs: &[(PlayerId, i64)]) -> BTreeMap<PlayerId, Money> {
    pairs.iter().map(|(p, c)| (*p, Money(*c))).collect()
}

/// Daniel $2, Rory $4, Oscar $4, Kate $14.
fn worked_example_debts() -> BTreeMap<PlayerId, Money> {
    debts(&[(DANIEL, 200), (RORY, 400), (OSCAR, 400), (KATE, 1400)])
}

/// Утилита: назначение карточки.
fn card(card_id: u64, cents: i64, player_id: PlayerId) -> CardAssignment {
    CardAssignment {
        card_id,
        card_type: "snake".to_string(),
        value: Money(cents),
        player_id,
        timestamp: card_id as i64,
    }
}

// ======================= ЭТАЛОННЫЙ ПРИМЕР =======================

/// Daniel $2, Rory $4, Oscar $4, Kate $14.
#[test]
fn worked_example_matches_to_the_cent() {
    let settlement = settle_cards(&worked_example_debts()).unwrap();
    let b = &settlement.breakdown;

    assert_eq!(b.total_debt, Money(2400));
    assert_eq!(b.min_debt, Money(200));
    assert_eq!(b.net_pot, Money(2200));
    assert_eq!(b.pay_up_threshold, Money(1080));
    assert_eq!(b.pay_up_total, Money(800));
    assert_eq!(b.remainder, Money(1400));

    // 1400 / 3 = 466.67: лишние центы первым по id (Daniel, Rory).
    let p = &settlement.position;
    assert_eq!(p.get(DANIEL), Money(1267));
    assert_eq!(p.get(RORY), Money(67));
    assert_eq!(p.get(OSCAR), Money(66));
    assert_eq!(p.get(KATE), Money(-1400));
    assert!(p.is_balanced(), "Сумма позиций должна быть ровно 0");
}

#[test]
fn worked_example_roles_and_phases() {
    let settlement = settle_cards(&worked_example_debts()).unwrap();
    let rows = &settlement.breakdown.players;

    let roles: Vec<(PlayerId, CardRole)> = rows.iter().map(|r| (r.player_id, r.role)).collect();
    assert_eq!(
        roles,
        vec![
            (DANIEL, CardRole::MinimumHolder),
            (RORY, CardRole::PaidUp),
            (OSCAR, CardRole::PaidUp),
            (KATE, CardRole::LargeDebtor),
        ]
    );

    let daniel = &rows[0];
    assert_eq!(daniel.phase_one_received, Money(800));
    assert_eq!(daniel.phase_two_received, Money(467));
    assert_eq!(daniel.phase_one_paid, Money::ZERO);

    let rory = &rows[1];
    assert_eq!(rory.phase_one_paid, Money(400));
    assert_eq!(rory.phase_two_received, Money(467));
    assert_eq!(rory.net, Money(67));

    let kate = &rows[3];
    assert_eq!(kate.phase_two_paid, Money(1400));
    assert_eq!(kate.phase_one_received + kate.phase_two_received, Money::ZERO);
}

#[test]
fn worked_example_from_card_assignments() {
    let data = CardGameData::new([
        card(1, 200, DANIEL),
        card(2, 400, RORY),
        card(3, 400, OSCAR),
        card(4, 700, KATE),
        card(5, 700, KATE),
    ]);

    let settlement = score_cards(&data, &[DANIEL, RORY, OSCAR, KATE]).unwrap();
    assert_eq!(settlement.position.get(DANIEL), Money(1267));
    assert_eq!(settlement.position.get(KATE), Money(-1400));
}

// ======================= НЕСКОЛЬКО МИНИМУМОВ =======================

/// A=100, B=100, C=300, D=1000: порог 100 + 0.4 × 1400 = 660.
#[test]
fn tied_minimum_holders_split_phase_one() {
    let settlement = settle_cards(&debts(&[(1, 100), (2, 100), (3, 300), (4, 1000)])).unwrap();
    let p = &settlement.position;

    // Фаза 1: 300 → по 150. Фаза 2: 1000 / 3 → 334, 333, 333.
    assert_eq!(p.get(1), Money(484));
    assert_eq!(p.get(2), Money(483));
    assert_eq!(p.get(3), Money(33));
    assert_eq!(p.get(4), Money(-1000));
    assert!(p.is_balanced());

    assert_eq!(settlement.breakdown.pay_up_threshold, Money(660));
}

// ======================= ПОРОГ =======================

/// Долг ровно на пороге считается "мелким".
#[test]
fn debt_exactly_at_threshold_pays_up() {
    // min 0, банк 1000, порог 400.
    let settlement = settle_cards(&debts(&[(1, 0), (2, 400), (3, 600)])).unwrap();
    let rows = &settlement.breakdown.players;

    assert_eq!(rows[1].role, CardRole::PaidUp);
    assert_eq!(rows[2].role, CardRole::LargeDebtor);

    let p = &settlement.position;
    assert_eq!(p.get(1), Money(700));
    assert_eq!(p.get(2), Money(-100));
    assert_eq!(p.get(3), Money(-600));
}

#[test]
fn two_players_large_debtor_pays_minimum_holder() {
    let settlement = settle_cards(&debts(&[(1, 0), (2, 500)])).unwrap();
    assert_eq!(settlement.position.get(1), Money(500));
    assert_eq!(settlement.position.get(2), Money(-500));
}

// ======================= ВЫРОЖДЕННЫЕ СЛУЧАИ =======================

#[test]
fn equal_debts_settle_to_zero() {
    let settlement = settle_cards(&debts(&[(1, 300), (2, 300), (3, 300)])).unwrap();

    assert_eq!(settlement.position.participants(), 0);
    assert!(settlement
        .breakdown
        .players
        .iter()
        .all(|r| r.role == CardRole::MinimumHolder && r.net.is_zero()));
}

#[test]
fn no_players_gives_empty_settlement() {
    let settlement = settle_cards(&BTreeMap::new()).unwrap();
    assert!(settlement.position.is_empty());
    assert!(settlement.breakdown.players.is_empty());
}

#[test]
fn player_without_cards_is_minimum_holder() {
    let data = CardGameData::new([card(1, 300, 2), card(2, 200, 3)]);
    let roster = [1, 2, 3];

    let d = card_debts(&data, &roster).unwrap();
    assert_eq!(d.get(&1), Some(&Money::ZERO));
    assert_eq!(d.get(&2), Some(&Money(300)));

    let settlement = score_cards(&data, &roster).unwrap();
    assert_eq!(settlement.breakdown.players[0].role, CardRole::MinimumHolder);
    assert!(settlement.position.get(1).is_positive());
    assert!(settlement.position.is_balanced());
}

#[test]
fn card_debts_sum_every_card_of_a_player() {
    let data = CardGameData::new([card(1, 150, 1), card(2, 250, 1), card(3, 100, 2)]);
    let d = card_debts(&data, &[1, 2]).unwrap();

    assert_eq!(d[&1], Money(400));
    assert_eq!(d[&2], Money(100));
}

// ======================= КРУПНЫЕ СУММЫ =======================

/// 0.4 × 5·10¹⁸ не влезает в i64 при умножении "в лоб".
#[test]
fn huge_debt_threshold_is_exact() {
    let settlement = settle_cards(&debts(&[(1, 0), (2, 5_000_000_000_000_000_000)])).unwrap();

    assert_eq!(settlement.breakdown.pay_up_threshold, Money(2_000_000_000_000_000_000));
    assert_eq!(settlement.breakdown.players[1].role, CardRole::LargeDebtor);
    assert_eq!(settlement.position.get(1), Money(5_000_000_000_000_000_000));
    assert!(settlement.position.is_balanced());
}

#[test]
fn overflowing_total_debt_is_reported() {
    let err = settle_cards(&debts(&[(1, i64::MAX), (2, 1)])).unwrap_err();
    assert_eq!(
        err,
        EngineError::AmountOverflow {
            game: GameKind::Cards
        }
    );
}

#[test]
fn overflowing_player_debt_is_reported() {
    let data = CardGameData::new([card(1, i64::MAX, DANIEL), card(2, 1, DANIEL)]);

    let err = card_debts(&data, &[DANIEL, RORY]).unwrap_err();
    assert_eq!(
        err,
        EngineError::AmountOverflow {
            game: GameKind::Cards
        }
    );
    assert!(score_cards(&data, &[DANIEL, RORY]).is_err());
}
