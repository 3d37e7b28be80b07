use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{GameKind, HoleNumber, Money, PlayerId};

/// Где обнаружено нарушение нулевой суммы.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum InvariantSource {
    Game(GameKind),
    Combiner,
    Solver,
}

impl fmt::Display for InvariantSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantSource::Game(kind) => write!(f, "игра {kind}"),
            InvariantSource::Combiner => f.write_str("объединение позиций"),
            InvariantSource::Solver => f.write_str("расчёт переводов"),
        }
    }
}

/// Жёсткие ошибки расчёта. Любая из них отменяет весь вызов `settle`:
/// частичных результатов не бывает.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Нарушен баланс нулевой суммы ({origin}): сумма позиций {total}")]
    InvariantViolation {
        origin: InvariantSource,
        total: Money,
    },

    #[error("Игра {game}: игрок {player_id} не входит в состав группы")]
    UnknownPlayerReference { game: GameKind, player_id: PlayerId },

    #[error("Игра {game}: номер лунки {hole} вне диапазона 1–18")]
    HoleOutOfRange { game: GameKind, hole: HoleNumber },

    #[error("Лунка {hole} одновременно штрафная и бонусная")]
    OverlappingHoleConfiguration { hole: HoleNumber },

    #[error("Игра {game}: переполнение при расчёте суммы")]
    AmountOverflow { game: GameKind },

    #[error("Объединение позиций: переполнение итога игрока {player_id}")]
    CombinedAmountOverflow { player_id: PlayerId },
}
