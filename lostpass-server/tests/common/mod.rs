//! Common test utilities for host integration tests

use std::sync::Arc;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use axum_test::TestServer;
use chrono::Duration;

use lostpass_core::{
    Account, AccountStatus, AuditEvent, AuditLog, NotificationService, TokenSalt,
};
use lostpass_server::{AppState, InMemoryAccountStore, InMemoryFlowStore, routes};

/// Notifier that captures dispatches and can be switched to fail
#[derive(Default, Clone)]
pub struct MockNotifier {
    /// Captured (email, language) pairs
    pub sent: Arc<RwLock<Vec<(String, String)>>>,
    fail: Arc<AtomicBool>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.read().unwrap().clone()
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

impl NotificationService for MockNotifier {
    fn send_password_reset(&self, account: &Account, language: &str) -> Result<(), String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("smtp connection refused".to_string());
        }
        self.sent
            .write()
            .unwrap()
            .push((account.email.clone(), language.to_string()));
        Ok(())
    }
}

/// Audit log that records events for assertions
#[derive(Default, Clone)]
pub struct RecordingAudit {
    pub events: Arc<RwLock<Vec<AuditEvent>>>,
}

impl RecordingAudit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.read().unwrap().clone()
    }
}

impl AuditLog for RecordingAudit {
    fn record(&self, event: &AuditEvent) {
        self.events.write().unwrap().push(event.clone());
    }
}

/// The standard test roster. The string "shared@example.com" is carol's
/// email address and also dave's username, the one combination that forces
/// disambiguation.
pub fn seeded_accounts() -> InMemoryAccountStore {
    let accounts = InMemoryAccountStore::new();
    accounts
        .insert("alice", "alice@example.com", AccountStatus::Active, Some("fr"))
        .unwrap();
    accounts
        .insert("bob", "bob@example.com", AccountStatus::Active, None)
        .unwrap();
    accounts
        .insert("carol", "shared@example.com", AccountStatus::Active, None)
        .unwrap();
    accounts
        .insert("shared@example.com", "dave@example.com", AccountStatus::Active, None)
        .unwrap();
    accounts
        .insert("eve", "eve@example.com", AccountStatus::Blocked, None)
        .unwrap();
    accounts
}

/// Create a test server over the seeded roster, with cookie persistence so
/// consecutive requests share one flow.
pub fn create_test_server() -> (TestServer, MockNotifier, RecordingAudit) {
    let notifier = MockNotifier::new();
    let audit = RecordingAudit::new();

    let state = Arc::new(AppState::new(
        seeded_accounts(),
        InMemoryFlowStore::new(Duration::minutes(360)),
        notifier.clone(),
        audit.clone(),
        TokenSalt::new(b"test salt".to_vec()),
        "en".to_string(),
    ));

    let app = routes::create_router(state);
    let mut server = TestServer::new(app).expect("Failed to create test server");
    server.save_cookies();

    (server, notifier, audit)
}
