//! Lostpass Reference Host
//!
//! Serves the multistep password reset flow over JSON, with in-memory
//! storage and a console notifier. A demonstration host, not a mail system.

use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lostpass_core::{AccountStatus, TokenSalt};
use lostpass_server::{
    AppState, Config, ConsoleNotifier, InMemoryAccountStore, InMemoryFlowStore, TracingAuditLog,
    routes,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lostpass_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    tracing::info!(
        port = config.port,
        default_language = %config.default_language,
        flow_ttl_minutes = config.flow_ttl_minutes,
        seed_accounts = config.seed_accounts.len(),
        "Loaded configuration"
    );

    // Load or generate the token salt
    let salt = match &config.token_salt {
        Some(secret) => TokenSalt::new(secret.as_bytes().to_vec()),
        None => {
            tracing::warn!(
                "LOSTPASS_TOKEN_SALT not set; using an ephemeral salt, \
                 in-progress flows will not survive a restart"
            );
            TokenSalt::generate()
        }
    };

    // Seed the account store
    let accounts = InMemoryAccountStore::new();
    for seed in &config.seed_accounts {
        let account = accounts.insert(
            &seed.username,
            &seed.email,
            AccountStatus::Active,
            seed.preferred_language.as_deref(),
        )?;
        tracing::info!(username = %account.username, email = %account.email, "Seeded account");
    }

    // Create app state
    let state = Arc::new(AppState::new(
        accounts,
        InMemoryFlowStore::new(chrono::Duration::minutes(config.flow_ttl_minutes)),
        ConsoleNotifier::new(),
        TracingAuditLog::new(),
        salt,
        config.default_language.clone(),
    ));

    // Create router
    let app = routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Reset host listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
