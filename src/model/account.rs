use crate::ticket_service::PurchaseError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for a customer account.
///
/// Only positive ids can be represented; the raw integer handed in by a caller is
/// checked through [`TryFrom<i64>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct AccountId(u64);

impl AccountId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = PurchaseError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        u64::try_from(raw)
            .ok()
            .filter(|id| *id > 0)
            .map(Self)
            .ok_or(PurchaseError::AccountId(raw))
    }
}

impl From<AccountId> for u64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "account_{}", self.0)
    }
}
