//! Turning a submitted name into candidate accounts.

use crate::candidates::CandidateSet;
use crate::error::{FlowError, FlowResult};
use crate::store::AccountStore;
use crate::token::TokenSalt;

/// Resolves a submitted username or email address to candidate accounts.
///
/// The input is matched as an email address first, then as a username. The
/// username lookup only happens for anonymous requesters: someone who is
/// already logged in can only reset by email, so an attacker with a session
/// cannot probe for usernames through this form. An account matching both
/// ways appears once.
pub struct AccountResolver<'a, S: AccountStore + ?Sized> {
    store: &'a S,
    salt: &'a TokenSalt,
}

impl<'a, S: AccountStore + ?Sized> AccountResolver<'a, S> {
    pub fn new(store: &'a S, salt: &'a TokenSalt) -> Self {
        Self { store, salt }
    }

    /// Resolve `input` to the accounts it may refer to.
    ///
    /// Returns `FlowError::NotFound` when nothing matches; the error carries
    /// the trimmed input for the caller's message.
    pub fn resolve(&self, input: &str, authenticated: bool) -> FlowResult<CandidateSet> {
        let input = input.trim();
        let mut candidates = CandidateSet::new();

        if let Some(account) = self.store.find_active_by_email(input)? {
            candidates.insert(self.salt, account);
        }

        // Also try the username, but only when the requester is not logged in.
        if !authenticated {
            if let Some(account) = self.store.find_active_by_username(input)? {
                candidates.insert(self.salt, account);
            }
        }

        if candidates.is_empty() {
            return Err(FlowError::NotFound {
                input: input.to_string(),
            });
        }
        Ok(candidates)
    }
}
