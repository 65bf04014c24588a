//! Application state shared by all route handlers

use lostpass_core::{
    AccountStore, AuditLog, FlowStore, NotificationService, ResetFlow, TokenSalt,
};

/// Everything the reset routes need, generic over the collaborator traits
/// so tests can swap in recording implementations.
pub struct AppState<A, F, N, G>
where
    A: AccountStore,
    F: FlowStore,
    N: NotificationService,
    G: AuditLog,
{
    pub accounts: A,
    pub flows: F,
    pub notifier: N,
    pub audit: G,
    pub salt: TokenSalt,
    pub default_language: String,
}

impl<A, F, N, G> AppState<A, F, N, G>
where
    A: AccountStore,
    F: FlowStore,
    N: NotificationService,
    G: AuditLog,
{
    pub fn new(
        accounts: A,
        flows: F,
        notifier: N,
        audit: G,
        salt: TokenSalt,
        default_language: String,
    ) -> Self {
        Self {
            accounts,
            flows,
            notifier,
            audit,
            salt,
            default_language,
        }
    }

    /// The reset flow wired to this state's collaborators.
    pub fn flow(&self) -> ResetFlow<'_, A, F, N, G> {
        ResetFlow::new(
            &self.accounts,
            &self.flows,
            &self.notifier,
            &self.audit,
            &self.salt,
            &self.default_language,
        )
    }
}
