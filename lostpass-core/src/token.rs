//! Stable candidate tokens.
//!
//! A token is derived from a secret salt and the account identifier, so it
//! can be echoed to the client and round-tripped without exposing the raw
//! identifier. Tokens are stable for the lifetime of one salt and not
//! guessable without it.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::account::AccountId;

type HmacSha256 = Hmac<Sha256>;

/// Number of random bytes in a generated salt.
const GENERATED_SALT_LEN: usize = 32;

/// Secret salt keying the token derivation.
#[derive(Clone)]
pub struct TokenSalt(Vec<u8>);

impl TokenSalt {
    /// Wrap existing secret bytes, e.g. from deployment configuration.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Generate a fresh random salt. Tokens derived from it do not survive
    /// a restart; deployments should configure a fixed salt instead.
    pub fn generate() -> Self {
        let mut bytes = vec![0u8; GENERATED_SALT_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }
}

/// Opaque token identifying one candidate account within a flow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateToken(pub String);

/// Derive the token for an account: base64url (no padding) of the
/// HMAC-SHA256 of the account id under the secret salt.
pub fn derive_token(salt: &TokenSalt, id: AccountId) -> CandidateToken {
    let mut mac = HmacSha256::new_from_slice(&salt.0).expect("hmac accepts keys of any length");
    mac.update(&id.0.to_be_bytes());
    CandidateToken(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
}
