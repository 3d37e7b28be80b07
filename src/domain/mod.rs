//! Доменная модель расчётов: игроки, деньги, счета по лункам, карточки,
//! нетто-позиции и переводы.
//!
//! Все типы здесь — неизменяемые значения. Никакого состояния между вызовами.

pub mod cards;
pub mod config;
pub mod holes;
pub mod money;
pub mod net_position;
pub mod player;
pub mod scores;
pub mod transaction;

// Базовые идентификаторы.
pub type PlayerId = u64;
pub type CardId = u64;
pub type HoleNumber = u8;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Money и т.п.
pub use cards::*;
pub use config::*;
pub use holes::*;
pub use money::*;
pub use net_position::*;
pub use player::*;
pub use scores::*;
pub use transaction::*;
