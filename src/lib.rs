//! Движок расчётов для игр на деньги в гольфе.
//!
//! Из сырых событий по лункам (карточки, удары/очки, GIR, BBB) считает
//! нетто-позиции игроков, складывает их по одновременно сыгранным играм и
//! сводит итог к минимальному числу переводов "кто кому".
//!
//! Весь расчёт — в целых центах, деньги не создаются и не исчезают.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use domain::{GameKind, Money, NetPosition, RawGameData, SettlementConfig, Transaction};
pub use engine::{settle, EngineError, SettlementResult};
