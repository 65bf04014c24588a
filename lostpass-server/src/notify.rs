//! Console-based notifier for development

use lostpass_core::{Account, NotificationService};

/// Notifier that logs to console instead of delivering mail (for development)
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationService for ConsoleNotifier {
    fn send_password_reset(&self, account: &Account, language: &str) -> Result<(), String> {
        println!();
        println!("========================================");
        println!("  PASSWORD RESET INSTRUCTIONS FOR: {}", account.email);
        println!("  LANGUAGE: {}", language);
        println!("========================================");
        println!();

        tracing::info!(
            email = %account.email,
            language = %language,
            "Password reset instructions sent"
        );

        Ok(())
    }
}
