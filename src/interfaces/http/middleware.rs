//! Bearer token middleware for Axum
//!
//! Guarded routes re-verify the session token on every request; there is
//! no server-side session state. On success the decoded claims are placed
//! in request extensions for handlers to pick up. On failure the guard
//! responds directly and the handler never runs.

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::infrastructure::crypto::token::{verify_token, TokenConfig};
use crate::interfaces::http::common::Envelope;

/// State for the token guard.
#[derive(Clone)]
pub struct TokenGuardState {
    pub token_config: TokenConfig,
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

/// Session token verification middleware.
pub async fn token_guard(
    State(state): State<TokenGuardState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(String::from);

    let Some(token) = auth_header.as_deref().and_then(extract_token) else {
        return Envelope::message(403, "Invalid or no signature provided.").into_response();
    };

    match verify_token(token, &state.token_config) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(err) => Envelope::message(403, err.to_string()).into_response(),
    }
}

// ── Tests ──────────────────────────────────────────────────────
