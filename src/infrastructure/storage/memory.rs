//! In-memory account store implementation

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::account::model::Account;
use crate::domain::account::repository::AccountRepositoryInterface;
use crate::domain::error::{DomainError, DomainResult};

/// In-memory store for development and testing, keyed by username.
pub struct InMemoryAccountStore {
    accounts: DashMap<String, Account>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepositoryInterface for InMemoryAccountStore {
    async fn ping(&self) -> DomainResult<()> {
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Account>> {
        Ok(self.accounts.get(username).map(|entry| entry.clone()))
    }

    async fn find_by_email(&self, email_address: &str) -> DomainResult<Option<Account>> {
        Ok(self
            .accounts
            .iter()
            .find(|entry| entry.email_address == email_address)
            .map(|entry| entry.value().clone()))
    }

    async fn insert(&self, account: Account) -> DomainResult<()> {
        if self.accounts.contains_key(&account.username) {
            return Err(DomainError::Conflict(format!(
                r#"Account with username "{}" already exists."#,
                account.username
            )));
        }
        self.accounts.insert(account.username.clone(), account);
        Ok(())
    }

    async fn update(&self, username: &str, account: Account) -> DomainResult<Option<Account>> {
        if !self.accounts.contains_key(username) {
            return Ok(None);
        }
        self.accounts.insert(username.to_string(), account.clone());
        Ok(Some(account))
    }

    async fn delete(&self, username: &str) -> DomainResult<bool> {
        Ok(self.accounts.remove(username).is_some())
    }
}
