//! Account repository abstraction
//!
//! The backing store is a collaborator behind this trait; use-case
//! services never see a concrete driver. Write paths follow the store's
//! find-and-update / find-and-delete shape: one round trip, telling the
//! caller whether a record was there.

use async_trait::async_trait;

use crate::domain::account::model::Account;
use crate::domain::error::DomainResult;

#[async_trait]
pub trait AccountRepositoryInterface: Send + Sync {
    /// Cheap reachability probe for the status endpoint.
    async fn ping(&self) -> DomainResult<()>;

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Account>>;

    async fn find_by_email(&self, email_address: &str) -> DomainResult<Option<Account>>;

    /// Insert a new record. Fails with `Conflict` when the username is
    /// already taken.
    async fn insert(&self, account: Account) -> DomainResult<()>;

    /// Replace the record stored under `username`, returning the updated
    /// record, or `None` when no such record exists.
    async fn update(&self, username: &str, account: Account) -> DomainResult<Option<Account>>;

    /// Remove the record stored under `username`; `true` when a record was
    /// actually removed.
    async fn delete(&self, username: &str) -> DomainResult<bool>;
}
