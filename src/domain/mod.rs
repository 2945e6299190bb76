pub mod account;
pub mod error;
pub mod verification;

// Re-export commonly used types
pub use account::{Account, AccountDocument, AccountRepositoryInterface, Preferences};
pub use error::{DomainError, DomainResult};
pub use verification::VerificationCode;
