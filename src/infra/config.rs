use std::fs;
use std::path::Path;

use tracing::debug;

use crate::api::errors::ApiError;
use crate::api::requests::SettleRequest;

/// Разобрать запрос расчёта из JSON.
pub fn load_request_from_str(body: &str) -> Result<SettleRequest, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Прочитать запрос расчёта из JSON-файла.
pub fn load_request_from_path(path: impl AsRef<Path>) -> Result<SettleRequest, ApiError> {
    let path = path.as_ref();
    let body = fs::read_to_string(path)
        .map_err(|e| ApiError::BadRequest(format!("{}: {}", path.display(), e)))?;

    let request = load_request_from_str(&body)?;
    debug!(
        path = %path.display(),
        games = request.selected_games.len(),
        players = request.data.roster.len(),
        "settle request loaded"
    );
    Ok(request)
}
