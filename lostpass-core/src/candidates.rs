//! Candidate accounts matched during resolution.

use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::token::{CandidateToken, TokenSalt, derive_token};

/// One account matched by the resolver, addressable by its stable token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub token: CandidateToken,
    pub account: Account,
}

/// The accounts matched by one resolution, in resolution order: the email
/// match first, then the username match. An account never appears twice
/// even when it matches both ways, so the set holds at most two entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateSet {
    entries: Vec<Candidate>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account unless it is already present (compared by id).
    /// Returns whether the account was inserted.
    pub fn insert(&mut self, salt: &TokenSalt, account: Account) -> bool {
        if self.entries.iter().any(|c| c.account.id == account.id) {
            return false;
        }
        let token = derive_token(salt, account.id);
        self.entries.push(Candidate { token, account });
        true
    }

    /// Find the candidate a submitted token refers to.
    pub fn get(&self, token: &CandidateToken) -> Option<&Candidate> {
        self.entries.iter().find(|c| &c.token == token)
    }

    /// The first candidate in resolution order, if any.
    pub fn first(&self) -> Option<&Candidate> {
        self.entries.first()
    }

    /// The sole candidate, when exactly one account matched.
    pub fn single(&self) -> Option<&Candidate> {
        match self.entries.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
