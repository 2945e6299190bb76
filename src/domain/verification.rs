//! Second-factor verification codes
//!
//! Short-lived numeric challenges appended to an account's code history
//! when two-factor authentication is enabled. Codes are 5 digits and
//! stay valid for one hour after generation.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of digits in a generated code.
pub const CODE_LENGTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationCode {
    pub code: String,
    pub created_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Draw a fresh 5-digit code stamped with the current time.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let code = (0..CODE_LENGTH)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        Self {
            code,
            created_at: Utc::now(),
        }
    }

    /// Exact string comparison against a user-submitted candidate.
    pub fn matches(&self, candidate: &str) -> bool {
        self.code == candidate
    }

    /// Whether the one-hour window has elapsed at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at > Duration::hours(1)
    }
}
