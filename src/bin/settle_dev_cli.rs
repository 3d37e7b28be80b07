// src/bin/settle_dev_cli.rs
//
// Использование:
//   settle_dev_cli                 – демо-раунд (4 игрока, все игры)
//   settle_dev_cli request.json    – расчёт по JSON-запросу (SettleRequest)
//
// Уровень логов задаётся через RUST_LOG (например, RUST_LOG=debug).

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use golf_wager_engine::api::{handle_settle, SettleRequest, SettlementResponse};
use golf_wager_engine::domain::{
    BbbGameData, BbbHole, CardAssignment, CardGameData, GameKind, GirGameData, HoleConfiguration,
    HoleScore, Money, Player, PointsGameData, PointsInput, RawGameData, SettlementConfig,
    StrokeGameData,
};
use golf_wager_engine::infra::load_request_from_path;

fn demo_request() -> SettleRequest {
    let roster = vec![
        Player::new(1, "Daniel"),
        Player::new(2, "Rory"),
        Player::new(3, "Oscar"),
        Player::new(4, "Kate"),
    ];

    // Карточки: Daniel $2, Rory $4, Oscar $4, Kate $14.
    let card = |card_id: u64, card_type: &str, cents: i64, player_id: u64| CardAssignment {
        card_id,
        card_type: card_type.to_string(),
        value: Money(cents),
        player_id,
        timestamp: 0,
    };
    let cards = CardGameData::new([
        card(1, "snake", 200, 1),
        card(2, "sandy", 400, 2),
        card(3, "sandy", 400, 3),
        card(4, "snake", 700, 4),
        card(5, "water", 700, 4),
    ]);

    // Удары по 18 лункам: небольшие вариации вокруг пара.
    let strokes: Vec<HoleScore<u32>> = (1..=18u8)
        .map(|hole| {
            let h = u32::from(hole);
            HoleScore::new(hole)
                .with(1, 4 + h % 2)
                .with(2, 4 + (h % 3) / 2)
                .with(3, 5 - h % 2)
                .with(4, 4 + h % 4 / 3)
        })
        .collect();

    let bbb_holes: Vec<BbbHole> = (1..=18u8)
        .map(|hole| BbbHole {
            hole,
            first_on: Some(u64::from(hole % 4) + 1),
            closest_to: Some(u64::from((hole + 1) % 3) + 1),
            first_in: if hole % 5 == 0 { None } else { Some(1) },
        })
        .collect();

    let gir_holes: Vec<HoleScore<bool>> = (1..=18u8)
        .map(|hole| {
            HoleScore::new(hole)
                .with(1, hole % 2 == 0)
                .with(2, hole % 3 == 0)
                .with(3, hole % 4 != 0)
                .with(4, hole > 9)
        })
        .collect();

    let mut data = RawGameData::new(roster);
    data.cards = Some(cards);
    data.points = Some(PointsGameData {
        input: PointsInput::Strokes(strokes.clone()),
    });
    data.strokes = Some(StrokeGameData { holes: strokes });
    data.bbb = Some(BbbGameData { holes: bbb_holes });
    data.gir = Some(GirGameData {
        holes: gir_holes,
        config: HoleConfiguration {
            penalty_holes: [3, 12].into_iter().collect(),
            bonus_holes: [7, 16].into_iter().collect(),
        },
    });

    SettleRequest {
        selected_games: vec![
            GameKind::Cards,
            GameKind::Points,
            GameKind::SegmentPot,
            GameKind::BbbPoints,
            GameKind::GirSegmentPot,
        ],
        config: SettlementConfig {
            points_unit: Money(25),
            segment_pot: Money(500),
            bbb_unit: Money(50),
            gir_pot: Money(300),
            ..SettlementConfig::default()
        },
        data,
    }
}

fn print_response(response: &SettlementResponse) {
    for game in &response.games {
        println!("--- {} ---", game.kind);
        for p in &game.players {
            println!("  {:<10} {:>10}", p.display_name, p.net_display);
        }
    }

    for skipped in &response.skipped {
        println!("--- {} пропущена: {} ---", skipped.kind, skipped.reason);
    }

    if let Some(cards) = &response.card_breakdown {
        println!(
            "\nКарточки: долг всего {}, минимум {}, банк {}, порог {}",
            cards.total_debt, cards.min_debt, cards.net_pot, cards.pay_up_threshold
        );
        for row in &cards.players {
            println!(
                "  player_id={} | долг={} | роль={:?} | итог={}",
                row.player_id, row.debt, row.role, row.net
            );
        }
    }

    println!("\n=== ИТОГ ===");
    for p in &response.players {
        println!("  {:<10} {:>10}", p.display_name, p.net_display);
    }

    println!("\n=== КТО КОМУ ===");
    if response.transactions.is_empty() {
        println!("  Никто никому не должен.");
    }
    for tx in &response.transactions {
        println!("  {} → {}: {}", tx.from_name, tx.to_name, tx.amount_display);
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== GOLF SETTLEMENT DEV CLI ===\n");

    let request = match std::env::args().nth(1) {
        Some(path) => match load_request_from_path(&path) {
            Ok(req) => req,
            Err(err) => {
                eprintln!("Не удалось прочитать запрос: {:?}", err);
                return ExitCode::FAILURE;
            }
        },
        None => demo_request(),
    };

    match handle_settle(&request) {
        Ok(response) => {
            print_response(&response);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Расчёт не выполнен: {:?}", err);
            ExitCode::FAILURE
        }
    }
}
