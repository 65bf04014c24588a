//! Account lookup contract.

use crate::account::Account;
use crate::error::FlowResult;

/// Read-only account lookup used by the resolver.
///
/// Both lookups return only active accounts; blocked or otherwise disabled
/// accounts are treated as absent. Whether lookups are case-insensitive is
/// the store's concern and should match how the surrounding system collates
/// usernames and email addresses.
pub trait AccountStore: Send + Sync {
    /// Find the active account registered under this email address.
    fn find_active_by_email(&self, email: &str) -> FlowResult<Option<Account>>;

    /// Find the active account with this username.
    fn find_active_by_username(&self, username: &str) -> FlowResult<Option<Account>>;
}
