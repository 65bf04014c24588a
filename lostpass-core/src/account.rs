//! Account data as seen by the reset flow.

use serde::{Deserialize, Serialize};

/// Unique account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub u64);

/// Whether an account may receive password resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Blocked,
}

/// An account, referenced but never mutated by the flow. Owned by the
/// account store; treated as immutable for the duration of one flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    pub email: String,
    pub status: AccountStatus,
    /// Language the account prefers for notifications, if it set one.
    pub preferred_language: Option<String>,
}

impl Account {
    pub fn is_active(&self) -> bool {
        matches!(self.status, AccountStatus::Active)
    }
}
