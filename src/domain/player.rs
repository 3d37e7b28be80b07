use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;

/// Игрок группы. Создаётся снаружи (управление группами), для движка неизменяем.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Цвет в интерфейсе, на расчёты не влияет.
    #[serde(default)]
    pub color: Option<String>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: None,
        }
    }
}
