//! Storage implementations behind the account repository trait

pub mod memory;

pub use memory::InMemoryAccountStore;
