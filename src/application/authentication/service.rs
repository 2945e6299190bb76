//! Authentication service
//!
//! Credential checks, session token issuance and the second-factor
//! verification step for accounts that opted into it.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::account::model::Account;
use crate::domain::account::repository::AccountRepositoryInterface;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::verification::VerificationCode;
use crate::infrastructure::crypto::password::verify_password;
use crate::infrastructure::crypto::token::{issue_token, TokenConfig};

/// Result of a credential check: either a ready session token, or a
/// pending second factor the caller still has to confirm.
pub enum AuthOutcome {
    TokenIssued { account: Account, token: String },
    SecondFactorPending { account: Account },
}

pub struct AuthenticationService {
    repo: Arc<dyn AccountRepositoryInterface>,
    token_config: TokenConfig,
}

impl AuthenticationService {
    pub fn new(repo: Arc<dyn AccountRepositoryInterface>, token_config: TokenConfig) -> Self {
        Self { repo, token_config }
    }

    /// Verify credentials and start a session.
    ///
    /// Accounts with two-factor authentication enabled get a fresh
    /// verification code recorded instead of a token; the session only
    /// starts once [`confirm_second_factor`](Self::confirm_second_factor)
    /// succeeds.
    pub async fn authenticate(
        &self,
        username: Option<&str>,
        password: Option<&str>,
        persist: bool,
    ) -> DomainResult<AuthOutcome> {
        let non_empty: for<'a> fn(Option<&'a str>) -> Option<&'a str> =
            |value| value.filter(|v| !v.is_empty());
        let (Some(username), Some(password)) = (non_empty(username), non_empty(password)) else {
            return Err(DomainError::BadRequest(
                "Incomplete request. \"username\" and \"password\" field can not be empty."
                    .to_string(),
            ));
        };

        let account = self
            .repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::NotFound("Account not found.".to_string()))?;

        if !verify_password(password, &account.password) {
            return Err(DomainError::Forbidden(
                "Incorrect password provided.".to_string(),
            ));
        }

        if account.preferences.two_factor_authentication {
            let mut account = account;
            account.verification_codes.push(VerificationCode::generate());
            let username = account.username.clone();
            let account = self
                .repo
                .update(&username, account)
                .await?
                .ok_or_else(|| DomainError::NotFound("Account not found.".to_string()))?;

            info!(username = %account.username, "Verification code recorded for two-factor sign-in");
            return Ok(AuthOutcome::SecondFactorPending { account });
        }

        let token = self.issue_for(&account, persist)?;
        info!(username = %account.username, "Authentication succeeded");
        Ok(AuthOutcome::TokenIssued { account, token })
    }

    /// Complete a two-factor sign-in with the code delivered out of band.
    /// Only the most recent code counts, and only within its validity
    /// window.
    pub async fn confirm_second_factor(
        &self,
        username: &str,
        code: &str,
        persist: bool,
    ) -> DomainResult<AuthOutcome> {
        let account = self
            .repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::NotFound("Account not found.".to_string()))?;

        if !account.confirm_verification_code(code, Utc::now()) {
            return Err(DomainError::Forbidden(
                "Incorrect or expired verification code provided.".to_string(),
            ));
        }

        let token = self.issue_for(&account, persist)?;
        info!(username = %account.username, "Two-factor sign-in confirmed");
        Ok(AuthOutcome::TokenIssued { account, token })
    }

    fn issue_for(&self, account: &Account, persist: bool) -> DomainResult<String> {
        issue_token(&account.email_address, persist, &self.token_config)
            .map_err(|e| DomainError::Internal(format!("Token issuance failed: {e}")))
    }
}
