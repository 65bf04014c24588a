//! Host configuration

/// Configuration for the reference host, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on
    pub port: u16,

    /// Secret salt for candidate tokens. When unset, an ephemeral salt is
    /// generated at startup and flows do not survive a restart.
    pub token_salt: Option<String>,

    /// Language for notifications to accounts without a preference
    pub default_language: String,

    /// How long an in-progress flow may idle before its state expires
    pub flow_ttl_minutes: i64,

    /// Accounts to seed the in-memory store with at startup
    pub seed_accounts: Vec<SeedAccount>,
}

/// One account from `LOSTPASS_SEED_ACCOUNTS`, `username:email[:language]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedAccount {
    pub username: String,
    pub email: String,
    pub preferred_language: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            token_salt: None,
            default_language: "en".to_string(),
            flow_ttl_minutes: 6 * 60,
            seed_accounts: Vec::new(),
        }
    }
}

impl Config {
    /// Read configuration from environment variables
    ///
    /// All optional:
    /// - LOSTPASS_PORT (default: 3000)
    /// - LOSTPASS_TOKEN_SALT
    /// - LOSTPASS_DEFAULT_LANGUAGE (default: "en")
    /// - LOSTPASS_FLOW_TTL_MINUTES (default: 360)
    /// - LOSTPASS_SEED_ACCOUNTS (comma-separated `username:email[:language]`)
    pub fn from_env() -> Self {
        // Helper to get non-empty env var
        fn get_env(key: &str) -> Option<String> {
            std::env::var(key).ok().filter(|s| !s.is_empty())
        }

        let defaults = Config::default();

        Self {
            port: get_env("LOSTPASS_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            token_salt: get_env("LOSTPASS_TOKEN_SALT"),
            default_language: get_env("LOSTPASS_DEFAULT_LANGUAGE")
                .unwrap_or(defaults.default_language),
            flow_ttl_minutes: get_env("LOSTPASS_FLOW_TTL_MINUTES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.flow_ttl_minutes),
            seed_accounts: get_env("LOSTPASS_SEED_ACCOUNTS")
                .map(|s| parse_seed_accounts(&s))
                .unwrap_or_default(),
        }
    }
}

/// Parse the seed account list, skipping malformed entries.
fn parse_seed_accounts(raw: &str) -> Vec<SeedAccount> {
    raw.split(',')
        .filter_map(|entry| {
            let mut parts = entry.trim().splitn(3, ':');
            let username = parts.next()?.to_string();
            let email = parts.next()?.to_string();
            if username.is_empty() || email.is_empty() {
                return None;
            }
            Some(SeedAccount {
                username,
                email,
                preferred_language: parts.next().map(str::to_string),
            })
        })
        .collect()
}
