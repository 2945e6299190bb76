//! Account aggregate: model, merge rules and repository trait

pub mod merge;
pub mod model;
pub mod repository;

pub use merge::{apply_update, is_protected, PROTECTED_FIELDS};
pub use model::{derive_username, Account, AccountDocument, Preferences, SCHEMA_VERSION};
pub use repository::AccountRepositoryInterface;
