//! Tracing-backed audit log

use lostpass_core::{AuditEvent, AuditLog};

/// Audit log that writes one structured tracing event per record.
pub struct TracingAuditLog;

impl TracingAuditLog {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingAuditLog {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditLog for TracingAuditLog {
    fn record(&self, event: &AuditEvent) {
        match event {
            AuditEvent::ResetMailed { username, email } => {
                tracing::info!(
                    username = %username,
                    email = %email,
                    "Password reset instructions mailed"
                );
            }
        }
    }
}
