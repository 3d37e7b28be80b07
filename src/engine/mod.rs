//! Движок расчётов: калькуляторы игр, объединение позиций, "кто кому".
//!
//! Высокоуровневая точка входа: `settle`.
//! Основные части:
//!   - `points`, `bbb`, `gir`, `segment_pot`, `cards` – позиции отдельных игр
//!   - `combiner` – сумма позиций игр
//!   - `solver` – минимальный список переводов

pub mod bbb;
pub mod cards;
pub mod combiner;
pub mod errors;
pub mod gir;
pub mod pairwise;
pub mod pipeline;
pub mod points;
pub mod points_table;
pub mod segment_pot;
pub mod solver;
pub mod validation;

pub use cards::{CardPlayerBreakdown, CardRole, CardSettlement, CardSettlementBreakdown};
pub use combiner::{combine, combine_positions, GamePosition};
pub use errors::{EngineError, InvariantSource};
pub use pipeline::{settle, SettlementResult, SkipReason, SkippedGame};
pub use solver::{replay, settle_debts};
