use std::collections::BTreeSet;

use crate::domain::{
    is_valid_hole, GameKind, HoleNumber, HoleScore, PlayerId, PointsInput, RawGameData,
};
use crate::engine::errors::EngineError;

/// Проверка ссылок данных игры на состав группы и номеров лунок.
///
/// Данные приходят уже проверенными, но суммы денег не считаются по
/// игроку, которого нет в составе: такое — жёсткая ошибка, а не пропуск.
pub fn validate_game_data(kind: GameKind, data: &RawGameData) -> Result<(), EngineError> {
    let roster: BTreeSet<PlayerId> = data.roster_ids().collect();

    let check_player = |player_id: PlayerId| {
        if roster.contains(&player_id) {
            Ok(())
        } else {
            Err(EngineError::UnknownPlayerReference {
                game: kind,
                player_id,
            })
        }
    };
    let check_hole = |hole: HoleNumber| {
        if is_valid_hole(hole) {
            Ok(())
        } else {
            Err(EngineError::HoleOutOfRange { game: kind, hole })
        }
    };

    match kind {
        GameKind::Cards => {
            if let Some(cards) = &data.cards {
                for assignment in cards.assignments.values() {
                    check_player(assignment.player_id)?;
                }
            }
        }

        GameKind::Points => match data.points.as_ref().map(|p| &p.input) {
            Some(PointsInput::Points(holes)) => check_holes(holes, &check_player, &check_hole)?,
            Some(PointsInput::Strokes(holes)) => check_holes(holes, &check_player, &check_hole)?,
            None => {}
        },

        GameKind::SegmentPot => {
            if let Some(strokes) = &data.strokes {
                check_holes(&strokes.holes, &check_player, &check_hole)?;
            }
        }

        GameKind::BbbPoints | GameKind::BbbSegmentPot => {
            if let Some(bbb) = &data.bbb {
                for hole in &bbb.holes {
                    check_hole(hole.hole)?;
                    for winner in hole.winners() {
                        check_player(winner)?;
                    }
                }
            }
        }

        GameKind::GirPoints | GameKind::GirSegmentPot => {
            if let Some(gir) = &data.gir {
                if let Some(hole) = gir.config.first_overlap() {
                    return Err(EngineError::OverlappingHoleConfiguration { hole });
                }
                check_holes(&gir.holes, &check_player, &check_hole)?;
            }
        }
    }

    Ok(())
}

fn check_holes<T>(
    holes: &[HoleScore<T>],
    check_player: impl Fn(PlayerId) -> Result<(), EngineError>,
    check_hole: impl Fn(HoleNumber) -> Result<(), EngineError>,
) -> Result<(), EngineError> {
    for hole in holes {
        check_hole(hole.hole)?;
        for player in hole.entries.keys() {
            check_player(*player)?;
        }
    }
    Ok(())
}
