pub mod crypto;
pub mod storage;

pub use storage::InMemoryAccountStore;
