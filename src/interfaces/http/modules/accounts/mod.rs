//! Accounts module: signup, lookup, update, deletion

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
