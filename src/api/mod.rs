//! Внешний API движка расчётов.
//!
//! Здесь описываются:
//! - запрос (requests.rs) — выбранные игры, ставки и данные раунда;
//! - DTO (dto.rs) — удобные структуры для фронта (имена, форматированные суммы);
//! - ошибки (errors.rs) — то, что видит клиент;
//! - обработчики (handlers.rs) — запрос → расчёт → ответ.

pub mod dto;
pub mod errors;
pub mod handlers;
pub mod requests;

pub use dto::*;
pub use errors::*;
pub use handlers::*;
pub use requests::*;
