//! Инфраструктурный слой вокруг движка расчётов:
//! - маппинги между domain/engine и API (имена игроков, форматирование сумм);
//! - загрузка запроса из JSON (строка / файл).

pub mod config;
pub mod mapping;

pub use config::*;
pub use mapping::*;
