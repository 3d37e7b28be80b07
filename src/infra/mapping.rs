use std::collections::BTreeMap;

use crate::api::dto::{GameSummaryDto, PlayerNetDto, SettlementResponse, TransactionDto};
use crate::domain::{NetPosition, Player, PlayerId, Transaction};
use crate::engine::SettlementResult;

/// Утилита: получить отображаемое имя игрока.
pub trait PlayerNameResolver {
    fn resolve_name(&self, player_id: PlayerId) -> String;
}

/// Простая реализация: отображаемое имя = "Player {id}".
pub struct DefaultNameResolver;

impl PlayerNameResolver for DefaultNameResolver {
    fn resolve_name(&self, player_id: PlayerId) -> String {
        format!("Player {}", player_id)
    }
}

/// Имена из состава группы; неизвестный id — как у `DefaultNameResolver`.
pub struct RosterNameResolver {
    names: BTreeMap<PlayerId, String>,
}

impl RosterNameResolver {
    pub fn new(roster: &[Player]) -> Self {
        Self {
            names: roster.iter().map(|p| (p.id, p.name.clone())).collect(),
        }
    }
}

impl PlayerNameResolver for RosterNameResolver {
    fn resolve_name(&self, player_id: PlayerId) -> String {
        self.names
            .get(&player_id)
            .cloned()
            .unwrap_or_else(|| DefaultNameResolver.resolve_name(player_id))
    }
}

/// NetPosition -> список итогов игроков (по возрастанию id).
pub fn map_position_to_dto(
    position: &NetPosition,
    name_resolver: &impl PlayerNameResolver,
) -> Vec<PlayerNetDto> {
    position
        .iter()
        .map(|(player_id, net)| PlayerNetDto {
            player_id,
            display_name: name_resolver.resolve_name(player_id),
            net,
            net_display: net.to_string(),
        })
        .collect()
}

pub fn map_transaction_to_dto(
    tx: &Transaction,
    name_resolver: &impl PlayerNameResolver,
) -> TransactionDto {
    TransactionDto {
        from_player_id: tx.from,
        from_name: name_resolver.resolve_name(tx.from),
        to_player_id: tx.to,
        to_name: name_resolver.resolve_name(tx.to),
        amount: tx.amount,
        amount_display: tx.amount.to_string(),
    }
}

/// Утилита: маппинг SettlementResult -> SettlementResponse.
pub fn map_result_to_response(
    result: &SettlementResult,
    name_resolver: &impl PlayerNameResolver,
) -> SettlementResponse {
    SettlementResponse {
        players: map_position_to_dto(&result.net_position, name_resolver),
        transactions: result
            .transactions
            .iter()
            .map(|tx| map_transaction_to_dto(tx, name_resolver))
            .collect(),
        games: result
            .per_game
            .iter()
            .map(|g| GameSummaryDto {
                kind: g.kind,
                players: map_position_to_dto(&g.position, name_resolver),
            })
            .collect(),
        card_breakdown: result.card_breakdown.clone(),
        skipped: result.skipped.clone(),
    }
}
