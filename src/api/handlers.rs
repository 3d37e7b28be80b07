use crate::api::dto::SettlementResponse;
use crate::api::errors::ApiError;
use crate::api::requests::SettleRequest;
use crate::engine::settle;
use crate::infra::config::load_request_from_str;
use crate::infra::mapping::{map_result_to_response, RosterNameResolver};

/// Запрос → расчёт → ответ с именами игроков.
pub fn handle_settle(request: &SettleRequest) -> Result<SettlementResponse, ApiError> {
    let result = settle(&request.selected_games, &request.config, &request.data)?;
    let resolver = RosterNameResolver::new(&request.data.roster);
    Ok(map_result_to_response(&result, &resolver))
}

/// То же, но JSON на входе и на выходе.
pub fn handle_settle_json(body: &str) -> Result<String, ApiError> {
    let request = load_request_from_str(body)?;
    let response = handle_settle(&request)?;
    serde_json::to_string(&response).map_err(|e| ApiError::Internal(e.to_string()))
}
