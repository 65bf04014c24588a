//! Notification delivery contract.

use crate::account::Account;

/// Delivers password reset instructions to an account.
///
/// How the instructions travel (email, console, a test spy) is entirely the
/// implementation's concern. The `language` argument is the language the
/// notification should be composed in, already resolved from the account's
/// preference by the caller.
pub trait NotificationService: Send + Sync {
    /// Send password reset instructions to the account's registered address.
    fn send_password_reset(&self, account: &Account, language: &str) -> Result<(), String>;
}
