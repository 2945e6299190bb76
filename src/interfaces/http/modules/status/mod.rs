//! Service status module

pub mod handlers;

pub use handlers::*;
