//! Cryptographic helpers: password digests and session tokens

pub mod password;
pub mod token;

pub use password::{hash_password, verify_password};
pub use token::{issue_token, verify_token, SessionClaims, TokenConfig, TokenError};
