//! Audit trail contract.

use serde::Serialize;

use crate::account::Account;

/// Something worth recording in the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AuditEvent {
    /// Reset instructions were handed to the notification service.
    ResetMailed { username: String, email: String },
}

impl AuditEvent {
    pub fn reset_mailed(account: &Account) -> Self {
        Self::ResetMailed {
            username: account.username.clone(),
            email: account.email.clone(),
        }
    }
}

/// Records audit events. Recording is infallible; an audit sink that can
/// fail should handle the failure itself rather than abort the flow.
pub trait AuditLog: Send + Sync {
    fn record(&self, event: &AuditEvent);
}
