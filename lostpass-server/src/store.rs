//! In-memory storage implementations

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use lostpass_core::{
    Account, AccountId, AccountStatus, AccountStore, FlowId, FlowResult, FlowStore, WorkflowState,
};

/// Rejected account insertions. Email and username uniqueness is enforced
/// here so a resolution can never yield more than one account per lookup.
#[derive(Debug, Error)]
pub enum InsertError {
    #[error("An account with email {0} already exists")]
    DuplicateEmail(String),

    #[error("An account with username {0} already exists")]
    DuplicateUsername(String),
}

/// In-memory account store
///
/// Lookup keys are normalized to lowercase, so email and username matching
/// is case-insensitive. Blocked accounts are kept but never resolvable.
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<AccountId, Account>>,
    by_email: RwLock<HashMap<String, AccountId>>,
    by_username: RwLock<HashMap<String, AccountId>>,
    next_account_id: AtomicU64,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            by_email: RwLock::new(HashMap::new()),
            by_username: RwLock::new(HashMap::new()),
            next_account_id: AtomicU64::new(1),
        }
    }

    /// Add an account, rejecting duplicate emails and usernames.
    pub fn insert(
        &self,
        username: &str,
        email: &str,
        status: AccountStatus,
        preferred_language: Option<&str>,
    ) -> Result<Account, InsertError> {
        let email_key = email.to_lowercase();
        let username_key = username.to_lowercase();

        let mut by_email = self.by_email.write().unwrap();
        let mut by_username = self.by_username.write().unwrap();
        if by_email.contains_key(&email_key) {
            return Err(InsertError::DuplicateEmail(email.to_string()));
        }
        if by_username.contains_key(&username_key) {
            return Err(InsertError::DuplicateUsername(username.to_string()));
        }

        let id = AccountId(self.next_account_id.fetch_add(1, Ordering::SeqCst));
        let account = Account {
            id,
            username: username.to_string(),
            email: email.to_string(),
            status,
            preferred_language: preferred_language.map(str::to_string),
        };
        by_email.insert(email_key, id);
        by_username.insert(username_key, id);
        self.accounts.write().unwrap().insert(id, account.clone());
        Ok(account)
    }

    fn get_active(&self, id: AccountId) -> Option<Account> {
        self.accounts
            .read()
            .unwrap()
            .get(&id)
            .filter(|a| a.is_active())
            .cloned()
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn find_active_by_email(&self, email: &str) -> FlowResult<Option<Account>> {
        let normalized = email.to_lowercase();
        let id = self.by_email.read().unwrap().get(&normalized).copied();
        Ok(id.and_then(|id| self.get_active(id)))
    }

    fn find_active_by_username(&self, username: &str) -> FlowResult<Option<Account>> {
        let normalized = username.to_lowercase();
        let id = self.by_username.read().unwrap().get(&normalized).copied();
        Ok(id.and_then(|id| self.get_active(id)))
    }
}

struct StoredFlow {
    state: WorkflowState,
    saved_at: DateTime<Utc>,
}

/// In-memory flow store with expiry
///
/// State older than the configured TTL is treated as absent on load, which
/// restarts the flow; `cleanup_expired` reclaims the memory. Abandoned
/// flows need no other garbage collection.
pub struct InMemoryFlowStore {
    flows: RwLock<HashMap<FlowId, StoredFlow>>,
    ttl: Duration,
}

impl InMemoryFlowStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            flows: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Delete expired flow state, returning how many entries were removed.
    pub fn cleanup_expired(&self) -> u64 {
        let cutoff = Utc::now() - self.ttl;
        let mut flows = self.flows.write().unwrap();
        let before = flows.len();
        flows.retain(|_, f| f.saved_at > cutoff);
        (before - flows.len()) as u64
    }
}

impl FlowStore for InMemoryFlowStore {
    fn load(&self, flow: &FlowId) -> FlowResult<Option<WorkflowState>> {
        let cutoff = Utc::now() - self.ttl;
        let flows = self.flows.read().unwrap();
        Ok(flows
            .get(flow)
            .filter(|f| f.saved_at > cutoff)
            .map(|f| f.state.clone()))
    }

    fn save(&self, flow: &FlowId, state: &WorkflowState) -> FlowResult<()> {
        self.flows.write().unwrap().insert(
            flow.clone(),
            StoredFlow {
                state: state.clone(),
                saved_at: Utc::now(),
            },
        );
        Ok(())
    }

    fn clear(&self, flow: &FlowId) -> FlowResult<()> {
        self.flows.write().unwrap().remove(flow);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_email_is_case_insensitive() {
        let store = InMemoryAccountStore::new();
        store
            .insert("alice", "Alice@Example.com", AccountStatus::Active, None)
            .unwrap();

        let found = store.find_active_by_email("alice@example.COM").unwrap();
        assert_eq!(found.unwrap().username, "alice");
    }

    #[test]
    fn test_blocked_accounts_are_never_returned() {
        let store = InMemoryAccountStore::new();
        store
            .insert("eve", "eve@example.com", AccountStatus::Blocked, None)
            .unwrap();

        assert!(store.find_active_by_email("eve@example.com").unwrap().is_none());
        assert!(store.find_active_by_username("eve").unwrap().is_none());
    }

    #[test]
    fn test_insert_rejects_duplicate_email() {
        let store = InMemoryAccountStore::new();
        store
            .insert("alice", "alice@example.com", AccountStatus::Active, None)
            .unwrap();

        let err = store
            .insert("other", "ALICE@example.com", AccountStatus::Active, None)
            .unwrap_err();
        assert!(matches!(err, InsertError::DuplicateEmail(_)));
    }

    #[test]
    fn test_insert_rejects_duplicate_username() {
        let store = InMemoryAccountStore::new();
        store
            .insert("alice", "alice@example.com", AccountStatus::Active, None)
            .unwrap();

        let err = store
            .insert("Alice", "other@example.com", AccountStatus::Active, None)
            .unwrap_err();
        assert!(matches!(err, InsertError::DuplicateUsername(_)));
    }

    #[test]
    fn test_flow_state_round_trips() {
        let store = InMemoryFlowStore::new(Duration::minutes(360));
        let flow = FlowId::new("flow-1");
        assert!(store.load(&flow).unwrap().is_none());

        store.save(&flow, &WorkflowState::AwaitingInput).unwrap();
        assert_eq!(store.load(&flow).unwrap(), Some(WorkflowState::AwaitingInput));

        store.clear(&flow).unwrap();
        assert!(store.load(&flow).unwrap().is_none());
    }

    #[test]
    fn test_expired_flows_are_absent() {
        let store = InMemoryFlowStore::new(Duration::zero());
        let flow = FlowId::new("flow-1");
        store.save(&flow, &WorkflowState::AwaitingInput).unwrap();

        assert!(store.load(&flow).unwrap().is_none());
    }

    #[test]
    fn test_cleanup_removes_only_expired_flows() {
        let expired = InMemoryFlowStore::new(Duration::zero());
        expired.save(&FlowId::new("a"), &WorkflowState::AwaitingInput).unwrap();
        expired.save(&FlowId::new("b"), &WorkflowState::AwaitingInput).unwrap();
        assert_eq!(expired.cleanup_expired(), 2);

        let fresh = InMemoryFlowStore::new(Duration::minutes(360));
        fresh.save(&FlowId::new("a"), &WorkflowState::AwaitingInput).unwrap();
        assert_eq!(fresh.cleanup_expired(), 0);
        assert!(fresh.load(&FlowId::new("a")).unwrap().is_some());
    }
}
