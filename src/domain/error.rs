//! Domain error taxonomy
//!
//! Every failure a use-case can produce is one of these variants. The
//! variant carries the caller-facing message; the HTTP layer maps the
//! variant to a wire status without reformatting the message.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed or incomplete input.
    #[error("{0}")]
    BadRequest(String),

    /// No matching account.
    #[error("{0}")]
    NotFound(String),

    /// Wrong password, bad token, or acting on a foreign resource.
    #[error("{0}")]
    Forbidden(String),

    /// Duplicate account at signup.
    #[error("{0}")]
    Conflict(String),

    /// Unexpected failure. The message carries internal detail and must
    /// never reach the caller verbatim.
    #[error("{0}")]
    Internal(String),
}
