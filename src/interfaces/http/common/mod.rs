//! Shared HTTP plumbing: response envelope, JSON extraction, body checks

pub mod envelope;
pub mod parsed_json;
pub mod schema;

pub use envelope::Envelope;
pub use parsed_json::{ParsedJson, ParsedJsonRejection};
pub use schema::{require_string_fields, FieldError};
