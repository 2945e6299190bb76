//! Authentication module: credential sign-in and session re-check

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
