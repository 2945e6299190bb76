//! # Hetchfund Accounts Service
//!
//! Account management service: signup, credential authentication, session
//! tokens and owner-guarded profile updates.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Account aggregate, merge rules, verification codes, store trait
//! - **application**: Account and authentication services
//! - **infrastructure**: Password hashing, session tokens, storage
//! - **interfaces**: REST API with Swagger documentation
//! - **support**: Graceful shutdown plumbing

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod support;

pub use config::{default_config_path, AppConfig};

// Re-export storage for easy access
pub use infrastructure::InMemoryAccountStore;

// Re-export API router
pub use interfaces::http::create_api_router;
