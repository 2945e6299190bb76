//! Account management service: application-layer orchestration
//!
//! Signup, lookup, owner-guarded update and deletion. HTTP handlers stay
//! thin wrappers that delegate here.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::info;

use crate::domain::account::merge::apply_update;
use crate::domain::account::model::Account;
use crate::domain::account::repository::AccountRepositoryInterface;
use crate::domain::error::{DomainError, DomainResult};
use crate::infrastructure::crypto::password::hash_password;
use crate::infrastructure::crypto::token::SessionClaims;

/// Validated signup fields.
#[derive(Debug, Clone)]
pub struct SignupData {
    pub display_name: String,
    pub email_address: String,
    pub password: String,
}

pub struct AccountService {
    repo: Arc<dyn AccountRepositoryInterface>,
}

impl AccountService {
    pub fn new(repo: Arc<dyn AccountRepositoryInterface>) -> Self {
        Self { repo }
    }

    // ── Status ──────────────────────────────────────────────────

    /// Store reachability, surfaced by the status endpoint.
    pub async fn status(&self) -> DomainResult<()> {
        self.repo.ping().await
    }

    // ── Signup ──────────────────────────────────────────────────

    /// Create a new account. The email address must not be registered yet;
    /// the username is derived from its local part.
    pub async fn signup(&self, data: SignupData) -> DomainResult<Account> {
        if self
            .repo
            .find_by_email(&data.email_address)
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict(format!(
                r#"Account with email address "{}" already exists."#,
                data.email_address
            )));
        }

        let digest = hash_password(&data.password)
            .map_err(|e| DomainError::Internal(format!("Password hashing failed: {e}")))?;
        let account = Account::signup(&data.display_name, &data.email_address, &digest);
        self.repo.insert(account.clone()).await?;

        info!(username = %account.username, "New account created");
        Ok(account)
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Fetch an account by username.
    pub async fn fetch(&self, username: &str) -> DomainResult<Account> {
        self.repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::NotFound("Account not found.".to_string()))
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Apply a partial update to the requester's own account. Protected
    /// fields in the patch are dropped by the merge; a foreign requester
    /// is rejected before anything is touched.
    pub async fn update(
        &self,
        username: &str,
        requester: &SessionClaims,
        requested: &Map<String, Value>,
    ) -> DomainResult<Account> {
        let stored = self.fetch(username).await?;
        if stored.email_address != requester.email_address {
            return Err(DomainError::Forbidden(
                "You are not allowed to modify another user's account.".to_string(),
            ));
        }

        let merged = apply_update(&stored, requested)?;
        let updated = self
            .repo
            .update(username, merged)
            .await?
            .ok_or_else(|| DomainError::NotFound("Account not found.".to_string()))?;

        info!(username, "Account updated");
        Ok(updated)
    }

    /// Delete the requester's own account.
    pub async fn delete(&self, username: &str, requester: &SessionClaims) -> DomainResult<()> {
        let stored = self.fetch(username).await?;
        if stored.email_address != requester.email_address {
            return Err(DomainError::Forbidden(
                "You are not allowed to delete another user's account.".to_string(),
            ));
        }

        if !self.repo.delete(username).await? {
            return Err(DomainError::NotFound("Account not found.".to_string()));
        }

        info!(username, "Account deleted");
        Ok(())
    }
}
