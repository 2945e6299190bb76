//! Authentication API request bodies

use serde::Deserialize;
use utoipa::ToSchema;

/// Credential sign-in payload.
///
/// `username` and `password` stay optional at the parse stage; presence is
/// enforced by the authentication service so an incomplete body gets its
/// own message instead of a generic parse error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AuthenticationRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    /// Stretches the session token lifetime from 7 to 365 days.
    #[serde(default)]
    pub is_persist: bool,
}
