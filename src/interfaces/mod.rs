//! External interfaces (HTTP)

pub mod http;
