//! Account API request bodies

use serde::Deserialize;
use utoipa::ToSchema;

/// Signup payload.
///
/// The handler checks the raw body for these fields first so that every
/// missing or mistyped attribute is reported by name; this struct is only
/// deserialized once the body has passed that check.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub email_address: String,
    pub display_name: String,
    pub password: String,
}
