//! Session token issuing and verification
//!
//! Stateless HS256 tokens keyed by a process-wide seed. A token binds an
//! email address to an absolute expiry; nothing is stored server-side, so
//! expiry is the only invalidation mechanism. The persist flag stretches
//! the lifetime from 7 to 365 days.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token lifetime in days for a regular session.
pub const SESSION_DAYS: i64 = 7;
/// Token lifetime in days when the caller asks the login to persist.
pub const PERSISTENT_SESSION_DAYS: i64 = 365;

/// Signing configuration, shared read-only across the process. Seed
/// resolution (config file, `SEED` env fallback) lives in `AppConfig`;
/// this struct only carries the resolved value.
#[derive(Clone)]
pub struct TokenConfig {
    /// Secret seed for signing tokens. Must stay constant across restarts
    /// or every issued session becomes invalid.
    pub seed: String,
}

/// Claims embedded in every session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the account's email address.
    pub email_address: String,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

impl SessionClaims {
    pub fn new(email_address: &str, persist: bool) -> Self {
        let lifetime = Duration::days(if persist {
            PERSISTENT_SESSION_DAYS
        } else {
            SESSION_DAYS
        });
        Self {
            email_address: email_address.to_string(),
            exp: (Utc::now() + lifetime).timestamp(),
        }
    }
}

/// Verification failures, split so callers can report expiry separately.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Signature has expired.")]
    Expired,
    #[error("Invalid signature provided.")]
    Invalid,
}

/// Sign a session token for an email address.
pub fn issue_token(
    email_address: &str,
    persist: bool,
    config: &TokenConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = SessionClaims::new(email_address, persist);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.seed.as_bytes()),
    )
}

/// Verify and decode a session token. Expiry is checked exactly, with no
/// clock-skew grace.
pub fn verify_token(token: &str, config: &TokenConfig) -> Result<SessionClaims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.seed.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    })
}
