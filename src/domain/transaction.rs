use serde::{Deserialize, Serialize};

use crate::domain::money::Money;
use crate::domain::PlayerId;

/// Один перевод "кто кому": `from` платит `to` сумму `amount` (> 0).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub from: PlayerId,
    pub to: PlayerId,
    pub amount: Money,
}
