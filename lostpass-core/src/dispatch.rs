//! Sending reset instructions once an account is settled.

use crate::account::Account;
use crate::audit::{AuditEvent, AuditLog};
use crate::error::{FlowError, FlowResult};
use crate::notify::NotificationService;

/// Hands a resolved account to the notification service and records the
/// send in the audit trail. The audit entry is only written after the
/// notifier accepts the message.
pub struct ResetDispatcher<'a, N: NotificationService + ?Sized, G: AuditLog + ?Sized> {
    notifier: &'a N,
    audit: &'a G,
    default_language: &'a str,
}

impl<'a, N: NotificationService + ?Sized, G: AuditLog + ?Sized> ResetDispatcher<'a, N, G> {
    pub fn new(notifier: &'a N, audit: &'a G, default_language: &'a str) -> Self {
        Self {
            notifier,
            audit,
            default_language,
        }
    }

    /// Send reset instructions in the account's preferred language, falling
    /// back to the configured default.
    pub fn dispatch(&self, account: &Account) -> FlowResult<()> {
        let language = account
            .preferred_language
            .as_deref()
            .unwrap_or(self.default_language);

        self.notifier
            .send_password_reset(account, language)
            .map_err(FlowError::DispatchFailed)?;

        self.audit.record(&AuditEvent::reset_mailed(account));
        Ok(())
    }
}
