//! Authentication API handlers

use std::sync::Arc;

use axum::extract::State;
use axum::Extension;
use serde_json::{json, Value};

use super::dto::AuthenticationRequest;
use crate::application::authentication::{AuthOutcome, AuthenticationService};
use crate::infrastructure::crypto::token::SessionClaims;
use crate::interfaces::http::common::{Envelope, ParsedJson, ParsedJsonRejection};

/// Auth handler state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub authentication_service: Arc<AuthenticationService>,
}

#[utoipa::path(
    get,
    path = "/accounts/authentication",
    tag = "Authentication",
    request_body = AuthenticationRequest,
    responses(
        (status = 200, description = "Softly sanitized account plus session token", body = Envelope),
        (status = 201, description = "Second factor required before a token is issued", body = Envelope),
        (status = 400, description = "Non-JSON request or incomplete credentials", body = Envelope),
        (status = 403, description = "Wrong password", body = Envelope),
        (status = 404, description = "Unknown username", body = Envelope)
    )
)]
pub async fn authenticate(
    State(state): State<AuthHandlerState>,
    body: Result<ParsedJson<AuthenticationRequest>, ParsedJsonRejection>,
) -> Envelope {
    let ParsedJson(request) = match body {
        Ok(parsed) => parsed,
        Err(_) => {
            return Envelope::message(
                400,
                "Invalid request. Request has to be made with JSON data as the body.",
            )
        }
    };

    let outcome = state
        .authentication_service
        .authenticate(
            request.username.as_deref(),
            request.password.as_deref(),
            request.is_persist,
        )
        .await;

    match outcome {
        Ok(AuthOutcome::TokenIssued { account, token }) => {
            let mut data = account.sanitize_soft();
            if let Value::Object(map) = &mut data {
                map.insert("jwt_token".to_string(), Value::String(token));
            }
            Envelope::success(data)
        }
        Ok(AuthOutcome::SecondFactorPending { .. }) => Envelope::message(
            201,
            "Verification code required to complete authentication.",
        ),
        Err(err) => err.into(),
    }
}

#[utoipa::path(
    get,
    path = "/accounts/authentication/re",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Token still valid, decoded claims returned", body = Envelope),
        (status = 403, description = "Expired, invalid or missing token", body = Envelope)
    )
)]
pub async fn re_authenticate(Extension(claims): Extension<SessionClaims>) -> Envelope {
    Envelope::success(json!({
        "email_address": claims.email_address,
        "exp": claims.exp,
    }))
}
